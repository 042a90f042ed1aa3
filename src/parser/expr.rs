use crate::{
    ast::expressions::{AssignExpr, BinaryOp, CallExpr, Expr, Loc, TupleAccess, UnaryOp},
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::TokenKind,
};

use super::{lookups::BindingPower, parser::Parser};

pub fn parse_expr(parser: &mut Parser, bp: BindingPower) -> Result<Expr, Error> {
    // First parse NUD
    let token_kind = parser.current_token_kind();
    let Some(nud_fn) = parser.get_nud_lookup().get(&token_kind).copied() else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: parser.current_token().value.clone(),
            },
            parser.get_position(),
        ));
    };

    let mut left = nud_fn(parser)?;

    // While LED and current BP is less than BP of current token, continue parsing lhs
    loop {
        let token_kind = parser.current_token_kind();
        let token_bp = parser
            .get_bp_lookup()
            .get(&token_kind)
            .copied()
            .unwrap_or(BindingPower::Default);

        if token_bp <= bp {
            break;
        }

        let Some(led_fn) = parser.get_led_lookup().get(&token_kind).copied() else {
            break;
        };

        left = led_fn(parser, left, token_bp)?;
    }

    Ok(left)
}

pub fn parse_primary_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let token = parser.advance();
    let position = token.span.start;

    match token.kind {
        TokenKind::IntLiteral => match token.value.parse::<i32>() {
            Ok(value) => Ok(Expr::IntLit { value, position }),
            Err(_) => Err(Error::new(
                ErrorImpl::NumberParseError { token: token.value },
                position,
            )),
        },
        TokenKind::StringLiteral => Ok(Expr::StrLit {
            value: token.value,
            position,
        }),
        TokenKind::True => Ok(Expr::True(position)),
        TokenKind::False => Ok(Expr::False(position)),
        TokenKind::Identifier => Ok(Expr::Ident(parser.make_ident(&token))),
        _ => Err(Error::new(
            ErrorImpl::UnexpectedToken { token: token.value },
            position,
        )),
    }
}

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Plus),
        TokenKind::Dash => Some(BinaryOp::Minus),
        TokenKind::Star => Some(BinaryOp::Times),
        TokenKind::Slash => Some(BinaryOp::Divide),
        TokenKind::Equals => Some(BinaryOp::Equals),
        TokenKind::NotEquals => Some(BinaryOp::NotEquals),
        TokenKind::Less => Some(BinaryOp::Less),
        TokenKind::LessEquals => Some(BinaryOp::LessEq),
        TokenKind::Greater => Some(BinaryOp::Greater),
        TokenKind::GreaterEquals => Some(BinaryOp::GreaterEq),
        TokenKind::And => Some(BinaryOp::And),
        TokenKind::Or => Some(BinaryOp::Or),
        _ => None,
    }
}

pub fn parse_binary_expr(parser: &mut Parser, left: Expr, bp: BindingPower) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let Some(op) = binary_op(operator_token.kind) else {
        return Err(Error::new(
            ErrorImpl::UnexpectedToken {
                token: operator_token.value,
            },
            operator_token.span.start,
        ));
    };

    let right = parse_expr(parser, bp)?;

    Ok(Expr::Binary {
        op,
        left: Box::new(left),
        right: Box::new(right),
    })
}

pub fn parse_prefix_expr(parser: &mut Parser) -> Result<Expr, Error> {
    let operator_token = parser.advance();
    let op = match operator_token.kind {
        TokenKind::Tilde => UnaryOp::Not,
        _ => UnaryOp::Negate,
    };

    let operand = parse_expr(parser, BindingPower::Unary)?;

    Ok(Expr::Unary {
        op,
        operand: Box::new(operand),
    })
}

/// Turns a parsed expression back into a location, for assignment targets and reads.
pub fn expr_to_loc(expr: Expr) -> Result<Loc, Error> {
    match expr {
        Expr::Ident(ident) => Ok(Loc::Ident(ident)),
        Expr::TupleAccess(access) => Ok(Loc::Access(access)),
        other => Err(Error::new(
            ErrorImpl::InvalidAssignmentTarget,
            other.position(),
        )),
    }
}

pub fn parse_assignment_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    parser.advance();
    let lhs = expr_to_loc(left)?;

    // right associative: `a = b = c` is `a = (b = c)`
    let rhs = parse_expr(parser, BindingPower::Comma)?;

    Ok(Expr::Assign(AssignExpr {
        lhs,
        rhs: Box::new(rhs),
    }))
}

pub fn parse_grouping_expr(parser: &mut Parser) -> Result<Expr, Error> {
    parser.advance();
    let expr = parse_expr(parser, BindingPower::Default)?;
    parser.expect(TokenKind::CloseParen)?;

    Ok(expr)
}

pub fn parse_call_expr(parser: &mut Parser, left: Expr, _bp: BindingPower) -> Result<Expr, Error> {
    let open = parser.advance();

    let Expr::Ident(callee) = left else {
        return Err(Error::new(
            ErrorImpl::UnexpectedTokenDetailed {
                token: open.value,
                message: String::from("only a function name can be called"),
            },
            open.span.start,
        ));
    };

    let mut args = vec![];

    if parser.current_token_kind() != TokenKind::CloseParen {
        args.push(parse_expr(parser, BindingPower::Default)?);

        while parser.current_token_kind() == TokenKind::Comma {
            parser.advance();
            args.push(parse_expr(parser, BindingPower::Default)?);
        }
    }

    parser.expect(TokenKind::CloseParen)?;

    Ok(Expr::Call(CallExpr { callee, args }))
}

pub fn parse_tuple_access_expr(
    parser: &mut Parser,
    left: Expr,
    _bp: BindingPower,
) -> Result<Expr, Error> {
    let colon = parser.advance();

    let loc = match left {
        Expr::Ident(ident) => Loc::Ident(ident),
        Expr::TupleAccess(access) => Loc::Access(access),
        _ => {
            return Err(Error::new(
                ErrorImpl::UnexpectedTokenDetailed {
                    token: colon.value,
                    message: String::from("field access needs a name on its left"),
                },
                colon.span.start,
            ))
        }
    };

    let id = parser.advance_id();
    let field = parser.expect_ident()?;

    Ok(Expr::TupleAccess(TupleAccess {
        id,
        loc: Box::new(loc),
        field,
    }))
}
