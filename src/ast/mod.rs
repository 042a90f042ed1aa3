//! Abstract syntax tree for Base programs.
//!
//! Submodules:
//! - ast: Program, declarations, blocks and identifiers
//! - expressions: Locations and expressions
//! - statements: Statement forms
//! - types: Type annotations as written in declarations
//! - unparse: Canonical text rendering of a tree
//!
//! The tree is never mutated after parsing; name resolution results live in a
//! side table keyed by each identifier's node id.
pub mod ast;
pub mod expressions;
pub mod statements;
pub mod types;
pub mod unparse;

#[cfg(test)]
mod tests;
