use crate::{
    ast::{ast::Block, expressions::Expr, statements::Stmt},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{
    decl::parse_var_decl,
    expr::{expr_to_loc, parse_expr},
    lookups::BindingPower,
    parser::Parser,
};

pub fn parse_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    if let Some(stmt_fn) = parser
        .get_stmt_lookup()
        .get(&parser.current_token_kind())
        .copied()
    {
        return stmt_fn(parser);
    }

    let expr = parse_expr(parser, BindingPower::Default)?;

    match parser.current_token_kind() {
        TokenKind::PlusPlus => {
            parser.advance();
            parser.expect(TokenKind::Dot)?;
            Ok(Stmt::PostInc(expr_to_loc(expr)?))
        }
        TokenKind::MinusMinus => {
            parser.advance();
            parser.expect(TokenKind::Dot)?;
            Ok(Stmt::PostDec(expr_to_loc(expr)?))
        }
        TokenKind::Dot => {
            parser.advance();
            match expr {
                Expr::Assign(assign) => Ok(Stmt::Assign(assign)),
                Expr::Call(call) => Ok(Stmt::Call(call)),
                other => Err(Error::new(ErrorImpl::InvalidStatement, other.position())),
            }
        }
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        )),
    }
}

/// Parses `[ decls stmts ]`, consuming both brackets.
pub fn parse_block(parser: &mut Parser) -> Result<Block, Error> {
    parser.expect(TokenKind::OpenBracket)?;

    let mut decls = vec![];
    while parser.current_token().is_primitive_type()
        || parser.current_token_kind() == TokenKind::Tuple
    {
        decls.push(parse_var_decl(parser)?);
    }

    let mut stmts = vec![];
    while parser.current_token_kind() != TokenKind::CloseBracket {
        if !parser.has_tokens() {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: parser.current_token().value.clone(),
                    message: String::from("expected `]` to close the block"),
                },
                parser.get_position(),
            ));
        }

        stmts.push(parse_stmt(parser)?);
    }

    parser.expect(TokenKind::CloseBracket)?;

    Ok(Block { decls, stmts })
}

pub fn parse_if_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let cond = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    if parser.current_token_kind() == TokenKind::Else {
        parser.advance();
        let else_body = parse_block(parser)?;

        return Ok(Stmt::IfElse {
            cond,
            then_body: body,
            else_body,
        });
    }

    Ok(Stmt::If { cond, body })
}

pub fn parse_while_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();

    let cond = parse_expr(parser, BindingPower::Default)?;
    let body = parse_block(parser)?;

    Ok(Stmt::While { cond, body })
}

pub fn parse_read_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    parser.expect(TokenKind::ReadArrow)?;

    let target = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Dot)?;

    Ok(Stmt::Read(expr_to_loc(target)?))
}

pub fn parse_write_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    parser.advance();
    parser.expect(TokenKind::WriteArrow)?;

    let value = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::Dot)?;

    Ok(Stmt::Write(value))
}

pub fn parse_return_stmt(parser: &mut Parser) -> Result<Stmt, Error> {
    let position = parser.advance().span.start;

    let value = if parser.current_token_kind() == TokenKind::Dot {
        None
    } else {
        Some(parse_expr(parser, BindingPower::Default)?)
    };

    parser.expect(TokenKind::Dot)?;

    Ok(Stmt::Return { value, position })
}
