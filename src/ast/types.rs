use std::fmt::Display;

use crate::symbols::types::Type;

use super::ast::Ident;

/// A type annotation as written in a declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeNode {
    Logical,
    Integer,
    Void,
    /// `tuple Name`; the identifier is linked to the tuple definition during name resolution.
    Tuple(Ident),
}

impl TypeNode {
    /// The type a declaration with this annotation gives its name.
    pub fn to_type(&self) -> Type {
        match self {
            TypeNode::Logical => Type::Logical,
            TypeNode::Integer => Type::Integer,
            TypeNode::Void => Type::Void,
            TypeNode::Tuple(name) => Type::TupleInstance(name.name.clone()),
        }
    }

    pub fn is_void(&self) -> bool {
        matches!(self, TypeNode::Void)
    }
}

impl Display for TypeNode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeNode::Logical => write!(f, "logical"),
            TypeNode::Integer => write!(f, "integer"),
            TypeNode::Void => write!(f, "void"),
            TypeNode::Tuple(name) => write!(f, "tuple {}", name.name),
        }
    }
}
