use crate::Position;

use super::{
    ast::Block,
    expressions::{AssignExpr, CallExpr, Expr, Loc},
};

#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    Assign(AssignExpr),
    PostInc(Loc),
    PostDec(Loc),
    If {
        cond: Expr,
        body: Block,
    },
    IfElse {
        cond: Expr,
        then_body: Block,
        else_body: Block,
    },
    While {
        cond: Expr,
        body: Block,
    },
    Read(Loc),
    Write(Expr),
    Call(CallExpr),
    Return {
        value: Option<Expr>,
        /// Position of the `return` keyword.
        position: Position,
    },
}
