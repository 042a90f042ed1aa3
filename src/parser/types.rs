//! Type annotation parsing.
//!
//! Base has three primitive types (`logical`, `integer`, `void`) and named
//! tuple types written `tuple Name`. Each is registered in a lookup table
//! keyed by its leading token.

use std::collections::HashMap;

use crate::{
    ast::types::TypeNode,
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::parser::Parser;

/// Type alias for type annotation handler functions.
pub type TypeNUDHandler = fn(&mut Parser) -> Result<TypeNode, Error>;

/// Type alias for the type annotation lookup table.
pub type TypeNUDLookup = HashMap<TokenKind, TypeNUDHandler>;

/// Initializes the type parsing lookup table.
pub fn create_token_type_lookups(parser: &mut Parser) {
    parser.type_nud(TokenKind::Logical, parse_keyword_type);
    parser.type_nud(TokenKind::Integer, parse_keyword_type);
    parser.type_nud(TokenKind::Void, parse_keyword_type);
    parser.type_nud(TokenKind::Tuple, parse_tuple_type);
}

pub fn parse_type(parser: &mut Parser) -> Result<TypeNode, Error> {
    let token_kind = parser.current_token_kind();
    let Some(type_fn) = parser.get_type_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected a type"),
            },
            parser.get_position(),
        ));
    };

    type_fn(parser)
}

/// Formals and function return types cannot be tuples.
pub fn parse_primitive_type(parser: &mut Parser) -> Result<TypeNode, Error> {
    if !parser.current_token().is_primitive_type() {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: parser.current_token().value.clone(),
                message: String::from("expected `logical`, `integer` or `void`"),
            },
            parser.get_position(),
        ));
    }

    parse_type(parser)
}

fn parse_keyword_type(parser: &mut Parser) -> Result<TypeNode, Error> {
    let token = parser.advance();

    match token.kind {
        TokenKind::Logical => Ok(TypeNode::Logical),
        TokenKind::Integer => Ok(TypeNode::Integer),
        TokenKind::Void => Ok(TypeNode::Void),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: token.value },
            token.span.start,
        )),
    }
}

fn parse_tuple_type(parser: &mut Parser) -> Result<TypeNode, Error> {
    parser.expect(TokenKind::Tuple)?;
    let name = parser.expect_ident()?;

    Ok(TypeNode::Tuple(name))
}
