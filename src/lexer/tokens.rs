use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

use crate::Span;

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("logical", TokenKind::Logical);
        map.insert("integer", TokenKind::Integer);
        map.insert("void", TokenKind::Void);
        map.insert("tuple", TokenKind::Tuple);
        map.insert("True", TokenKind::True);
        map.insert("False", TokenKind::False);
        map.insert("if", TokenKind::If);
        map.insert("else", TokenKind::Else);
        map.insert("while", TokenKind::While);
        map.insert("read", TokenKind::Read);
        map.insert("write", TokenKind::Write);
        map.insert("return", TokenKind::Return);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    IntLiteral,
    StringLiteral,
    Identifier,

    OpenBracket,
    CloseBracket,
    OpenCurly,
    CloseCurly,
    OpenParen,
    CloseParen,

    Colon,
    Comma,
    Dot,

    WriteArrow, // <<
    ReadArrow,  // >>

    Assignment, // =
    Equals,     // ==
    NotEquals,  // ~=
    Tilde,      // ~

    Less,
    LessEquals,
    Greater,
    GreaterEquals,

    Or,  // |
    And, // &

    PlusPlus,
    MinusMinus,

    Plus,
    Dash,
    Slash,
    Star,

    // Reserved
    Logical,
    Integer,
    Void,
    Tuple,
    True,
    False,
    If,
    Else,
    While,
    Read,
    Write,
    Return,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub span: Span,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_one_of_many(&[
            TokenKind::StringLiteral,
            TokenKind::Identifier,
            TokenKind::IntLiteral,
        ]) {
            write!(f, "{} ({})", self.kind, self.value)
        } else {
            write!(f, "{}", self.kind)
        }
    }
}

impl Token {
    pub fn is_one_of_many(&self, kinds: &[TokenKind]) -> bool {
        kinds.contains(&self.kind)
    }

    /// `logical`, `integer` or `void`; the types a formal or a function may carry.
    pub fn is_primitive_type(&self) -> bool {
        self.is_one_of_many(&[TokenKind::Logical, TokenKind::Integer, TokenKind::Void])
    }
}
