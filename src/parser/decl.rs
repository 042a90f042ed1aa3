use crate::{
    ast::ast::{Decl, FctnDecl, FormalDecl, TupleDecl, VarDecl},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    parser::Parser,
    stmt::parse_block,
    types::{parse_primitive_type, parse_type},
};

/// Parses one top-level declaration.
///
/// `tuple Name {` starts a tuple definition and `type name {` a function; anything else that
/// starts with a type is a variable.
pub fn parse_decl(parser: &mut Parser) -> Result<Decl, Error> {
    let opens_body = parser.peek_kind(2) == TokenKind::OpenCurly;

    match parser.current_token_kind() {
        TokenKind::Tuple if opens_body => Ok(Decl::Tuple(parse_tuple_decl(parser)?)),
        TokenKind::Tuple => Ok(Decl::Var(parse_var_decl(parser)?)),
        _ if parser.current_token().is_primitive_type() && opens_body => {
            Ok(Decl::Fctn(parse_fctn_decl(parser)?))
        }
        _ if parser.current_token().is_primitive_type() => Ok(Decl::Var(parse_var_decl(parser)?)),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a declaration"),
            },
            parser.get_position(),
        )),
    }
}

pub fn parse_var_decl(parser: &mut Parser) -> Result<VarDecl, Error> {
    let ty = parse_type(parser)?;
    let name = parser.expect_ident()?;
    parser.expect(TokenKind::Dot)?;

    Ok(VarDecl { ty, name })
}

fn parse_formal_decl(parser: &mut Parser) -> Result<FormalDecl, Error> {
    let ty = parse_primitive_type(parser)?;
    let name = parser.expect_ident()?;

    Ok(FormalDecl { ty, name })
}

fn parse_fctn_decl(parser: &mut Parser) -> Result<FctnDecl, Error> {
    let return_type = parse_primitive_type(parser)?;
    let name = parser.expect_ident()?;

    parser.expect(TokenKind::OpenCurly)?;

    let mut formals = vec![];
    if parser.current_token_kind() != TokenKind::CloseCurly {
        formals.push(parse_formal_decl(parser)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            formals.push(parse_formal_decl(parser)?);
        }
    }

    parser.expect(TokenKind::CloseCurly)?;

    let body = parse_block(parser)?;

    Ok(FctnDecl {
        return_type,
        name,
        formals,
        body,
    })
}

fn parse_tuple_decl(parser: &mut Parser) -> Result<TupleDecl, Error> {
    parser.expect(TokenKind::Tuple)?;
    let name = parser.expect_ident()?;

    parser.expect(TokenKind::OpenCurly)?;

    let mut fields = vec![];
    while parser.current_token_kind() != TokenKind::CloseCurly {
        if !parser.has_tokens() {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected `}` to close the tuple"),
                },
                parser.get_position(),
            ));
        }

        fields.push(parse_var_decl(parser)?);
    }

    parser.expect(TokenKind::CloseCurly)?;
    parser.expect(TokenKind::Dot)?;

    Ok(TupleDecl { name, fields })
}
