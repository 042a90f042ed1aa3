use super::{ast::Program, unparse::unparse};
use crate::{
    lexer::lexer::tokenize, name_resolver::name_resolver::resolve_names, parser::parser::parse,
};

const SOURCE: &str = "integer x.
tuple P { integer a. }.
integer f{integer n, logical b} [
  tuple P p.
  if b [ p:a = n + 1. ] else [ x--. ]
  while ~b [ read >> x. ]
  write << \"hi\".
  return f(-n, b = True).
]";

fn parse_source(source: &str) -> Program {
    parse(tokenize(source.to_string()).unwrap()).unwrap()
}

#[test]
fn test_unparse_without_symbols() {
    let expected = "integer x.
tuple P {
    integer a.
}.

integer f{integer n, logical b} [
    tuple P p.
    if b [
        (p):a = (n + 1).
    ]
    else [
        x--.
    ]
    while (~b) [
        read >> x.
    ]
    write << \"hi\".
    return f((-n), (b = True)).
]

";

    assert_eq!(unparse(&parse_source(SOURCE), None), expected);
}

#[test]
fn test_unparse_with_symbols() {
    let program = parse_source(SOURCE);
    let (resolution, diagnostics) = resolve_names(&program).unwrap();
    assert!(diagnostics.is_empty());

    let expected = "integer x<integer>.
tuple P<tuple> {
    integer a<integer>.
}.

integer f<integer,logical->integer>{integer n<integer>, logical b<logical>} [
    tuple P p<P>.
    if b<logical> [
        (p<P>):a<integer> = (n<integer> + 1).
    ]
    else [
        x<integer>--.
    ]
    while (~b<logical>) [
        read >> x<integer>.
    ]
    write << \"hi\".
    return f<integer,logical->integer>((-n<integer>), (b<logical> = True)).
]

";

    assert_eq!(unparse(&program, Some(&resolution)), expected);
}

#[test]
fn test_unparse_parenthesizes_every_operator() {
    let program = parse_source("void g{} [ write << 1 + 2 * 3 - 4 / 5 == 6 & False | 7 ~= 8. ]");

    assert_eq!(
        unparse(&program, None),
        "void g{} [\n    write << (((((1 + (2 * 3)) - (4 / 5)) == 6) & False) | (7 ~= 8)).\n]\n\n"
    );
}

#[test]
fn test_unparse_nested_access_and_empty_return() {
    let program = parse_source("void g{} [ a:b:c++. if True [ while False [ return. ] ] ]");

    assert_eq!(
        unparse(&program, None),
        "void g{} [
    ((a):b):c++.
    if True [
        while False [
            return.
        ]
    ]
]

"
    );
}

#[test]
fn test_unparse_leaves_unlinked_identifiers_bare() {
    let program = parse_source("void g{} [ y = 1. ]");
    let (resolution, _) = resolve_names(&program).unwrap();

    assert_eq!(
        unparse(&program, Some(&resolution)),
        "void g<->void>{} [\n    y = 1.\n]\n\n"
    );
}

#[test]
fn test_unparse_is_stable() {
    let once = unparse(&parse_source(SOURCE), None);
    let twice = unparse(&parse_source(&once), None);

    assert_eq!(once, twice);
}
