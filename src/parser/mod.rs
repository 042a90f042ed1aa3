//! Parser module for building an Abstract Syntax Tree (AST).
//!
//! This module contains the parser that transforms a stream of tokens
//! into a `Program`. It uses a Pratt parser for expressions
//! with proper operator precedence and handles:
//!
//! - Declaration parsing (variables, functions, tuple definitions)
//! - Statement parsing (assignment, increments, control flow, read/write, return)
//! - Expression parsing (binary ops, calls, tuple field access, literals)
//! - Type annotation parsing
//!
//! The parser uses NUD (null denotation) and LED (left denotation) functions
//! for expression parsing with binding power for precedence handling.
//! Every identifier and every field access gets a fresh node id here.

pub mod decl;
pub mod expr;
pub mod lookups;
pub mod parser;
pub mod stmt;
pub mod types;

#[cfg(test)]
mod tests;
