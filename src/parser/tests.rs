//! Unit tests for the parser module.
//!
//! This module contains tests for parsing various language constructs including:
//! - Variable, function and tuple declarations
//! - Expressions and operator precedence
//! - Tuple field access chains
//! - Control flow statements
//! - Syntax errors

use super::parser::parse;
use crate::{
    ast::{
        ast::{Decl, Program},
        expressions::{BinaryOp, Expr, Loc, UnaryOp},
        statements::Stmt,
        types::TypeNode,
    },
    errors::errors::Error,
    lexer::lexer::tokenize,
    Position,
};

fn parse_source(source: &str) -> Result<Program, Error> {
    parse(tokenize(source.to_string())?)
}

/// Parses `stmts` as the body of `void main{}` and returns the statements.
fn parse_body(stmts: &str) -> Vec<Stmt> {
    let program = parse_source(&format!("void main{{}} [ {} ]", stmts)).unwrap();
    match program.decls.into_iter().next() {
        Some(Decl::Fctn(fctn)) => fctn.body.stmts,
        other => panic!("expected a function, got {:?}", other),
    }
}

fn parse_single_expr(expr: &str) -> Expr {
    match parse_body(&format!("write << {}.", expr)).remove(0) {
        Stmt::Write(expr) => expr,
        other => panic!("expected write, got {:?}", other),
    }
}

#[test]
fn test_parse_variable_declaration() {
    let program = parse_source("integer x. logical b. tuple Point p.").unwrap();

    assert_eq!(program.decls.len(), 3);
    match &program.decls[2] {
        Decl::Var(var) => {
            assert_eq!(var.name.name, "p");
            assert!(matches!(&var.ty, TypeNode::Tuple(name) if name.name == "Point"));
        }
        other => panic!("expected variable, got {:?}", other),
    }
}

#[test]
fn test_parse_function_declaration() {
    let program =
        parse_source("integer add{integer a, integer b} [ integer c. c = a + b. return c. ]")
            .unwrap();

    match &program.decls[0] {
        Decl::Fctn(fctn) => {
            assert_eq!(fctn.name.name, "add");
            assert_eq!(fctn.return_type, TypeNode::Integer);
            assert_eq!(fctn.formals.len(), 2);
            assert_eq!(fctn.body.decls.len(), 1);
            assert_eq!(fctn.body.stmts.len(), 2);
        }
        other => panic!("expected function, got {:?}", other),
    }
}

#[test]
fn test_parse_tuple_declaration() {
    let program =
        parse_source("tuple Point { integer x. integer y. }. tuple Line { tuple Point a. }.")
            .unwrap();

    match &program.decls[1] {
        Decl::Tuple(tuple) => {
            assert_eq!(tuple.name.name, "Line");
            assert_eq!(tuple.fields.len(), 1);
        }
        other => panic!("expected tuple, got {:?}", other),
    }
}

#[test]
fn test_parse_precedence() {
    // a + b * c  =>  a + (b * c)
    match parse_single_expr("a + b * c") {
        Expr::Binary { op, right, .. } => {
            assert_eq!(op, BinaryOp::Plus);
            assert!(matches!(*right, Expr::Binary { op: BinaryOp::Times, .. }));
        }
        other => panic!("unexpected {:?}", other),
    }

    // a | b & c  =>  a | (b & c)
    match parse_single_expr("a | b & c") {
        Expr::Binary { op, right, .. } => {
            assert_eq!(op, BinaryOp::Or);
            assert!(matches!(*right, Expr::Binary { op: BinaryOp::And, .. }));
        }
        other => panic!("unexpected {:?}", other),
    }

    // a < b == c  =>  (a < b) == c
    match parse_single_expr("a < b == c") {
        Expr::Binary { op, left, .. } => {
            assert_eq!(op, BinaryOp::Equals);
            assert!(matches!(*left, Expr::Binary { op: BinaryOp::Less, .. }));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_parse_left_associative() {
    // a - b - c  =>  (a - b) - c
    match parse_single_expr("a - b - c") {
        Expr::Binary { left, right, .. } => {
            assert!(matches!(*left, Expr::Binary { op: BinaryOp::Minus, .. }));
            assert!(matches!(*right, Expr::Ident(_)));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_parse_unary() {
    match parse_single_expr("-a + b") {
        Expr::Binary { left, .. } => {
            assert!(matches!(*left, Expr::Unary { op: UnaryOp::Negate, .. }));
        }
        other => panic!("unexpected {:?}", other),
    }

    assert!(matches!(
        parse_single_expr("~(a & b)"),
        Expr::Unary { op: UnaryOp::Not, .. }
    ));
}

#[test]
fn test_parse_assignment_is_right_associative() {
    match parse_body("a = b = 3.").remove(0) {
        Stmt::Assign(assign) => {
            assert!(matches!(assign.lhs, Loc::Ident(ref ident) if ident.name == "a"));
            assert!(matches!(*assign.rhs, Expr::Assign(_)));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_parse_tuple_access_chain() {
    match parse_single_expr("a:b:c") {
        Expr::TupleAccess(outer) => {
            assert_eq!(outer.field.name, "c");
            match outer.loc.as_ref() {
                Loc::Access(inner) => {
                    assert_eq!(inner.field.name, "b");
                    assert!(matches!(inner.loc.as_ref(), Loc::Ident(ident) if ident.name == "a"));
                }
                other => panic!("unexpected {:?}", other),
            }
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_parse_call() {
    match parse_single_expr("f(1, x + 2, g())") {
        Expr::Call(call) => {
            assert_eq!(call.callee.name, "f");
            assert_eq!(call.args.len(), 3);
            assert!(matches!(&call.args[2], Expr::Call(inner) if inner.args.is_empty()));
        }
        other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn test_parse_statements() {
    let stmts = parse_body(
        "x = 1. x++. p:y--. f(x). read >> x. write << \"hi\". \
         if x [ ] if x [ ] else [ integer y. ] while x [ x--. ] return.",
    );

    assert!(matches!(stmts[0], Stmt::Assign(_)));
    assert!(matches!(stmts[1], Stmt::PostInc(Loc::Ident(_))));
    assert!(matches!(stmts[2], Stmt::PostDec(Loc::Access(_))));
    assert!(matches!(stmts[3], Stmt::Call(_)));
    assert!(matches!(stmts[4], Stmt::Read(_)));
    assert!(matches!(stmts[5], Stmt::Write(Expr::StrLit { .. })));
    assert!(matches!(stmts[6], Stmt::If { .. }));
    match &stmts[7] {
        Stmt::IfElse { else_body, .. } => assert_eq!(else_body.decls.len(), 1),
        other => panic!("unexpected {:?}", other),
    }
    assert!(matches!(stmts[8], Stmt::While { .. }));
    assert!(matches!(stmts[9], Stmt::Return { value: None, .. }));
}

#[test]
fn test_parse_positions() {
    let program = parse_source("integer x.\nvoid f{} [\n  x = 12.\n]").unwrap();

    let Decl::Fctn(fctn) = &program.decls[1] else {
        panic!("expected function");
    };
    assert_eq!(fctn.name.position, Position::new(2, 6));

    let Stmt::Assign(assign) = &fctn.body.stmts[0] else {
        panic!("expected assignment");
    };
    assert_eq!(assign.lhs.position(), Position::new(3, 3));
    assert_eq!(assign.rhs.position(), Position::new(3, 7));
}

#[test]
fn test_parse_node_ids_are_unique() {
    let program = parse_source("integer x. void f{} [ x = x + x. ]").unwrap();

    let Decl::Var(var) = &program.decls[0] else {
        panic!("expected variable");
    };
    let Decl::Fctn(fctn) = &program.decls[1] else {
        panic!("expected function");
    };
    let Stmt::Assign(assign) = &fctn.body.stmts[0] else {
        panic!("expected assignment");
    };
    let Loc::Ident(lhs) = &assign.lhs else {
        panic!("expected identifier");
    };

    assert_ne!(var.name.id, fctn.name.id);
    assert_ne!(var.name.id, lhs.id);
    assert_ne!(fctn.name.id, lhs.id);
}

#[test]
fn test_parse_empty_program() {
    assert!(parse_source("").unwrap().decls.is_empty());
}

#[test]
fn test_parse_missing_dot() {
    let error = parse_source("integer x").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedToken");
}

#[test]
fn test_parse_expression_statement_without_effect() {
    let error = parse_source("void f{} [ x + 1. ]").unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidStatement");
}

#[test]
fn test_parse_invalid_assignment_target() {
    let error = parse_source("void f{} [ 1 = x. ]").unwrap_err();
    assert_eq!(error.get_error_name(), "InvalidAssignmentTarget");
}

#[test]
fn test_parse_tuple_formal_rejected() {
    let error = parse_source("void f{tuple P p} [ ]").unwrap_err();
    assert_eq!(error.get_error_name(), "UnexpectedTokenDetailed");
}

#[test]
fn test_parse_unclosed_block() {
    assert!(parse_source("void f{} [ x = 1.").is_err());
}
