use std::fmt::Display;

use crate::Position;

use super::{statements::Stmt, types::TypeNode};

/// Identity of a node that the name resolver annotates: every identifier occurrence and every
/// tuple field access. Assigned by the parser, unique within one program.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single identifier occurrence, either declaring or using a name.
#[derive(Debug, Clone, PartialEq)]
pub struct Ident {
    pub id: NodeId,
    pub name: String,
    pub position: Position,
}

/// Root of the tree: the top-level declarations in source order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub decls: Vec<Decl>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Decl {
    Var(VarDecl),
    Fctn(FctnDecl),
    Tuple(TupleDecl),
}

/// `integer x.` or `tuple Point p.`; also used for tuple fields.
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub ty: TypeNode,
    pub name: Ident,
}

/// One function parameter.
#[derive(Debug, Clone, PartialEq)]
pub struct FormalDecl {
    pub ty: TypeNode,
    pub name: Ident,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FctnDecl {
    pub return_type: TypeNode,
    pub name: Ident,
    pub formals: Vec<FormalDecl>,
    pub body: Block,
}

/// `tuple Name { ... }.`
#[derive(Debug, Clone, PartialEq)]
pub struct TupleDecl {
    pub name: Ident,
    pub fields: Vec<VarDecl>,
}

/// Declarations followed by statements. Function bodies, branches and loop bodies all use it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Block {
    pub decls: Vec<VarDecl>,
    pub stmts: Vec<Stmt>,
}
