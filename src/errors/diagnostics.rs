use std::{fmt::Display, slice::Iter};

use thiserror::Error;

use crate::Position;

/// Every user-facing semantic violation. The display strings are the exact messages
/// expected by existing output fixtures.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    // Name resolution
    #[error("Undeclared identifier")]
    UndeclaredIdentifier,
    #[error("Multiply-declared identifier")]
    MultiplyDeclared,
    #[error("Non-function declared void")]
    NonFunctionVoid,
    #[error("Invalid name of tuple type")]
    InvalidTupleType,
    #[error("Colon-access of non-tuple type")]
    ColonAccessOfNonTuple,
    #[error("Invalid tuple field name")]
    InvalidTupleField,

    // Operators
    #[error("Arithmetic operator used with non-integer operand")]
    ArithmeticNonInteger,
    #[error("Relational operator used with non-integer operand")]
    RelationalNonInteger,
    #[error("Logical operator used with non-logical operand")]
    LogicalNonLogical,
    #[error("Mismatched type")]
    MismatchedType,
    #[error("Equality operator used with void function calls")]
    EqualityVoidCalls,
    #[error("Equality operator used with function names")]
    EqualityFunctionNames,
    #[error("Equality operator used with tuple variables")]
    EqualityTupleVariables,
    #[error("Equality operator used with tuple names")]
    EqualityTupleNames,

    // Assignment
    #[error("Assignment to function name")]
    AssignFunctionName,
    #[error("Assignment to tuple variable")]
    AssignTupleVariable,
    #[error("Assignment to tuple name")]
    AssignTupleName,

    // Calls
    #[error("Call attempt on non-function")]
    CallNonFunction,
    #[error("Function call with wrong # of args")]
    WrongArgCount,
    #[error("Actual type does not match formal type")]
    ActualFormalMismatch,

    // Statements
    #[error("Non-logical expression used in if condition")]
    NonLogicalIfCondition,
    #[error("Non-logical expression used in while condition")]
    NonLogicalWhileCondition,
    #[error("Read attempt of function name")]
    ReadFunctionName,
    #[error("Read attempt of tuple variable")]
    ReadTupleVariable,
    #[error("Read attempt of tuple name")]
    ReadTupleName,
    #[error("Write attempt of function name")]
    WriteFunctionName,
    #[error("Write attempt of tuple variable")]
    WriteTupleVariable,
    #[error("Write attempt of tuple name")]
    WriteTupleName,
    #[error("Write attempt of void")]
    WriteVoid,
    #[error("Return value missing")]
    ReturnValueMissing,
    #[error("Return with value in void function")]
    ReturnWithValueInVoid,
    #[error("Return value wrong type")]
    ReturnValueWrongType,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub position: Position,
    pub kind: DiagnosticKind,
}

impl Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ***ERROR*** {}", self.position, self.kind)
    }
}

/// Ordered list of diagnostics produced by one or both passes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics(Vec<Diagnostic>);

impl Diagnostics {
    pub fn new() -> Self {
        Diagnostics(vec![])
    }

    pub fn report(&mut self, position: Position, kind: DiagnosticKind) {
        tracing::trace!(%position, %kind, "diagnostic");
        self.0.push(Diagnostic { position, kind });
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> Iter<'_, Diagnostic> {
        self.0.iter()
    }

    /// Kinds in emission order; handy for assertions.
    pub fn kinds(&self) -> Vec<DiagnosticKind> {
        self.0.iter().map(|diagnostic| diagnostic.kind).collect()
    }

    pub fn count_of(&self, kind: DiagnosticKind) -> usize {
        self.0.iter().filter(|diagnostic| diagnostic.kind == kind).count()
    }
}

impl Extend<Diagnostic> for Diagnostics {
    fn extend<T: IntoIterator<Item = Diagnostic>>(&mut self, iter: T) {
        self.0.extend(iter)
    }
}

impl IntoIterator for Diagnostics {
    type Item = Diagnostic;
    type IntoIter = std::vec::IntoIter<Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Diagnostics {
    type Item = &'a Diagnostic;
    type IntoIter = Iter<'a, Diagnostic>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
