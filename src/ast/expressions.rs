use crate::Position;

use super::ast::{Ident, NodeId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    /// `-e`
    Negate,
    /// `~e`
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Plus,
    Minus,
    Times,
    Divide,
    Equals,
    NotEquals,
    Less,
    LessEq,
    Greater,
    GreaterEq,
    And,
    Or,
}

impl BinaryOp {
    pub fn symbol(&self) -> &'static str {
        match self {
            BinaryOp::Plus => "+",
            BinaryOp::Minus => "-",
            BinaryOp::Times => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Equals => "==",
            BinaryOp::NotEquals => "~=",
            BinaryOp::Less => "<",
            BinaryOp::LessEq => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEq => ">=",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
        }
    }

    pub fn is_arithmetic(&self) -> bool {
        matches!(
            self,
            BinaryOp::Plus | BinaryOp::Minus | BinaryOp::Times | BinaryOp::Divide
        )
    }

    pub fn is_relational(&self) -> bool {
        matches!(
            self,
            BinaryOp::Less | BinaryOp::LessEq | BinaryOp::Greater | BinaryOp::GreaterEq
        )
    }

    pub fn is_equality(&self) -> bool {
        matches!(self, BinaryOp::Equals | BinaryOp::NotEquals)
    }

    pub fn is_logical(&self) -> bool {
        matches!(self, BinaryOp::And | BinaryOp::Or)
    }
}

/// Something that names a storage location: `x` or a chain of field accesses `x:y:z`.
#[derive(Debug, Clone, PartialEq)]
pub enum Loc {
    Ident(Ident),
    Access(TupleAccess),
}

impl Loc {
    /// Position of the identifier that ends the location.
    pub fn position(&self) -> Position {
        match self {
            Loc::Ident(ident) => ident.position,
            Loc::Access(access) => access.field.position,
        }
    }
}

/// `loc : field`
#[derive(Debug, Clone, PartialEq)]
pub struct TupleAccess {
    pub id: NodeId,
    pub loc: Box<Loc>,
    pub field: Ident,
}

/// `lhs = rhs`, usable both as an expression and as a statement.
#[derive(Debug, Clone, PartialEq)]
pub struct AssignExpr {
    pub lhs: Loc,
    pub rhs: Box<Expr>,
}

/// `callee(args)`
#[derive(Debug, Clone, PartialEq)]
pub struct CallExpr {
    pub callee: Ident,
    pub args: Vec<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    True(Position),
    False(Position),
    Ident(Ident),
    IntLit {
        value: i32,
        position: Position,
    },
    /// Raw source text of the literal, quotes and escapes included.
    StrLit {
        value: String,
        position: Position,
    },
    TupleAccess(TupleAccess),
    Assign(AssignExpr),
    Call(CallExpr),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Where diagnostics about this expression as a whole are reported.
    pub fn position(&self) -> Position {
        match self {
            Expr::True(position) | Expr::False(position) => *position,
            Expr::IntLit { position, .. } | Expr::StrLit { position, .. } => *position,
            Expr::Ident(ident) => ident.position,
            Expr::TupleAccess(access) => access.field.position,
            Expr::Assign(assign) => assign.lhs.position(),
            Expr::Call(call) => call.callee.position,
            Expr::Unary { operand, .. } => operand.position(),
            Expr::Binary { left, .. } => left.position(),
        }
    }

    pub fn is_call(&self) -> bool {
        matches!(self, Expr::Call(_))
    }
}

impl From<Loc> for Expr {
    fn from(loc: Loc) -> Self {
        match loc {
            Loc::Ident(ident) => Expr::Ident(ident),
            Loc::Access(access) => Expr::TupleAccess(access),
        }
    }
}
