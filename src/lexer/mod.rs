//! Lexical analysis module for the compiler.
//!
//! This module contains the lexer (tokenizer) that converts Base source code
//! into a stream of tokens for parsing. It handles:
//!
//! - Tokenization of source code using an ordered regex pattern table
//! - Recognition of keywords, identifiers, literals, and operators
//! - Line and column tracking for error reporting
//! - `$` comments and whitespace handling

pub mod lexer;
pub mod tokens;
