//! Unit tests for name resolution.

use super::{name_resolver::resolve_names, resolution::{AccessLink, Resolution}};
use crate::{
    ast::{
        ast::{Decl, Program},
        expressions::Loc,
        statements::Stmt,
    },
    errors::diagnostics::{DiagnosticKind, Diagnostics},
    lexer::lexer::tokenize,
    parser::parser::parse,
    symbols::{symbol::SymbolKind, types::Type},
};

fn resolve(source: &str) -> (Program, Resolution, Diagnostics) {
    let program = parse(tokenize(source.to_string()).unwrap()).unwrap();
    let (resolution, diagnostics) = resolve_names(&program).unwrap();
    (program, resolution, diagnostics)
}

fn messages(diagnostics: &Diagnostics) -> Vec<String> {
    diagnostics.iter().map(|diagnostic| diagnostic.to_string()).collect()
}

/// The first statement of the last declaration, which must be a function.
fn first_stmt(program: &Program) -> &Stmt {
    match program.decls.last() {
        Some(Decl::Fctn(fctn)) => &fctn.body.stmts[0],
        other => panic!("expected a function, got {:?}", other),
    }
}

fn assigned_loc(program: &Program) -> &Loc {
    match first_stmt(program) {
        Stmt::Assign(assign) => &assign.lhs,
        other => panic!("expected an assignment, got {:?}", other),
    }
}

#[test]
fn test_clean_program() {
    let (_, resolution, diagnostics) = resolve(
        "integer g.
         tuple Point { integer x. integer y. }.
         integer add{integer a, integer b} [
             tuple Point p.
             p:x = a + b + g.
             while p:x > 0 [ p:x--. ]
             return add(p:x, p:y).
         ]",
    );

    assert!(diagnostics.is_empty(), "{:?}", messages(&diagnostics));
    assert!(resolution.link_count() > 0);
}

#[test]
fn test_multiply_declared_keeps_first() {
    let (program, resolution, diagnostics) =
        resolve("integer x.\ninteger x.\nvoid f{} [ x = 1. ]");

    assert_eq!(
        messages(&diagnostics),
        vec!["2:9 ***ERROR*** Multiply-declared identifier"]
    );

    let Loc::Ident(x) = assigned_loc(&program) else {
        panic!("expected identifier");
    };
    let Decl::Var(first) = &program.decls[0] else {
        panic!("expected variable");
    };
    assert_eq!(resolution.link_of(x), resolution.link_of(&first.name));
    assert!(resolution.link_of(x).is_some());
}

#[test]
fn test_undeclared_identifier() {
    let (_, _, diagnostics) = resolve("void f{} [ y = 1. ]");

    assert_eq!(
        messages(&diagnostics),
        vec!["1:12 ***ERROR*** Undeclared identifier"]
    );
}

#[test]
fn test_void_variable() {
    let (_, _, diagnostics) = resolve("void x.");

    assert_eq!(
        messages(&diagnostics),
        vec!["1:6 ***ERROR*** Non-function declared void"]
    );
}

#[test]
fn test_void_and_duplicate_both_reported() {
    let (_, _, diagnostics) = resolve("integer x.\nvoid x.");

    assert_eq!(
        diagnostics.kinds(),
        vec![DiagnosticKind::NonFunctionVoid, DiagnosticKind::MultiplyDeclared]
    );
}

#[test]
fn test_invalid_tuple_type() {
    let (_, _, diagnostics) = resolve("tuple Nope p.");
    assert_eq!(
        messages(&diagnostics),
        vec!["1:7 ***ERROR*** Invalid name of tuple type"]
    );

    let (_, _, diagnostics) = resolve("integer P.\ntuple P p.");
    assert_eq!(
        messages(&diagnostics),
        vec!["2:7 ***ERROR*** Invalid name of tuple type"]
    );
}

#[test]
fn test_tuple_fields_have_own_scope() {
    let (_, _, diagnostics) = resolve("integer x.\ntuple P { integer x. logical y. }.");
    assert!(diagnostics.is_empty());

    let (_, _, diagnostics) = resolve("tuple P { integer x. }.\nvoid f{} [ x = 1. ]");
    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::UndeclaredIdentifier]);
}

#[test]
fn test_duplicate_tuple_still_checks_fields() {
    let (_, _, diagnostics) = resolve("integer P.\ntuple P { integer x. integer x. }.");

    assert_eq!(
        diagnostics.kinds(),
        vec![DiagnosticKind::MultiplyDeclared, DiagnosticKind::MultiplyDeclared]
    );
    assert_eq!(messages(&diagnostics)[0], "2:7 ***ERROR*** Multiply-declared identifier");
}

#[test]
fn test_formals() {
    let (program, resolution, diagnostics) = resolve("void f{integer a, logical a} [ ]");

    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::MultiplyDeclared]);

    let Decl::Fctn(fctn) = &program.decls[0] else {
        panic!("expected function");
    };
    match &resolution.symbol_of(&fctn.name).unwrap().kind {
        SymbolKind::Function { param_types, .. } => {
            assert_eq!(param_types, &vec![Type::Integer]);
        }
        other => panic!("expected function symbol, got {:?}", other),
    }

    let (_, _, diagnostics) = resolve("void f{void a} [ ]");
    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::NonFunctionVoid]);
}

#[test]
fn test_multiply_declared_function_body_still_resolved() {
    let (program, resolution, diagnostics) =
        resolve("integer f.\nvoid f{integer a} [ a = 1. ]");

    assert_eq!(
        messages(&diagnostics),
        vec!["2:6 ***ERROR*** Multiply-declared identifier"]
    );

    let Loc::Ident(a) = assigned_loc(&program) else {
        panic!("expected identifier");
    };
    assert_eq!(resolution.symbol_of(a).unwrap().get_type(), Type::Integer);
}

#[test]
fn test_recursive_call() {
    let (_, _, diagnostics) = resolve("void f{} [ f(). ]");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_block_scopes_are_popped() {
    let (_, _, diagnostics) = resolve("void f{} [ if True [ integer x. ] x = 1. ]");
    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::UndeclaredIdentifier]);

    let (_, _, diagnostics) =
        resolve("void f{} [ if True [ integer x. ] else [ integer x. ] while 1 [ integer x. ] ]");
    assert!(diagnostics.is_empty());
}

#[test]
fn test_shadowing() {
    let (program, resolution, diagnostics) =
        resolve("integer x.\nvoid f{logical x} [ x = True. ]");

    assert!(diagnostics.is_empty());

    let Loc::Ident(x) = assigned_loc(&program) else {
        panic!("expected identifier");
    };
    assert_eq!(resolution.symbol_of(x).unwrap().get_type(), Type::Logical);
}

#[test]
fn test_tuple_access() {
    let (program, resolution, diagnostics) =
        resolve("tuple P { integer x. }.\ntuple P p.\nvoid f{} [ p:x = 1. ]");

    assert!(diagnostics.is_empty());

    let Loc::Access(access) = assigned_loc(&program) else {
        panic!("expected access");
    };
    assert_eq!(
        resolution.access(access.id),
        Some(AccessLink::Resolved { tuple_def: None })
    );
    assert_eq!(
        resolution.symbol_of(&access.field).unwrap().get_type(),
        Type::Integer
    );
}

#[test]
fn test_colon_access_of_non_tuple() {
    let (program, resolution, diagnostics) = resolve("integer i.\nvoid f{} [ i:x = 1. ]");

    assert_eq!(
        messages(&diagnostics),
        vec!["2:12 ***ERROR*** Colon-access of non-tuple type"]
    );

    let Loc::Access(access) = assigned_loc(&program) else {
        panic!("expected access");
    };
    assert_eq!(resolution.access(access.id), Some(AccessLink::Bad));
}

#[test]
fn test_invalid_tuple_field() {
    let (_, _, diagnostics) =
        resolve("tuple P { integer x. }.\ntuple P p.\nvoid f{} [ p:y = 1. ]");

    assert_eq!(
        messages(&diagnostics),
        vec!["3:14 ***ERROR*** Invalid tuple field name"]
    );
}

#[test]
fn test_access_of_undeclared_is_reported_once() {
    let (_, _, diagnostics) = resolve("void f{} [ q:x = 1. ]");
    assert_eq!(diagnostics.kinds(), vec![DiagnosticKind::UndeclaredIdentifier]);
}

#[test]
fn test_tuple_access_chain() {
    let (program, resolution, diagnostics) = resolve(
        "tuple A { integer n. }.\ntuple B { tuple A a. }.\ntuple B b.\nvoid f{} [ b:a:n = 1. ]",
    );

    assert!(diagnostics.is_empty());

    let Loc::Access(outer) = assigned_loc(&program) else {
        panic!("expected access");
    };
    let Loc::Access(inner) = outer.loc.as_ref() else {
        panic!("expected chained access");
    };
    assert!(matches!(
        resolution.access(inner.id),
        Some(AccessLink::Resolved { tuple_def: Some(_) })
    ));
    assert_eq!(
        resolution.symbol_of(&outer.field).unwrap().get_type(),
        Type::Integer
    );
}

#[test]
fn test_tuple_chain_failure_reported_once() {
    let (_, _, diagnostics) = resolve(
        "tuple A { integer n. }.\ntuple B { tuple A a. }.\ntuple B b.\nvoid f{} [ b:zz:n = 1. ]",
    );
    assert_eq!(
        messages(&diagnostics),
        vec!["4:14 ***ERROR*** Invalid tuple field name"]
    );

    let (_, _, diagnostics) =
        resolve("tuple B { integer a. }.\ntuple B b.\nvoid f{} [ b:a:n = 1. ]");
    assert_eq!(
        messages(&diagnostics),
        vec!["3:14 ***ERROR*** Colon-access of non-tuple type"]
    );
}

#[test]
fn test_tuple_type_name_is_linked() {
    let (program, resolution, _) = resolve("tuple P { integer x. }.\ntuple P p.");

    let Decl::Var(var) = &program.decls[1] else {
        panic!("expected variable");
    };
    let crate::ast::types::TypeNode::Tuple(type_name) = &var.ty else {
        panic!("expected tuple type");
    };

    assert!(resolution.symbol_of(type_name).unwrap().is_tuple_def());
    assert_eq!(resolution.symbol_of(&var.name).unwrap().to_string(), "P");
}
