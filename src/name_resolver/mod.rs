//! Name resolution.
//!
//! The first semantic pass. It walks the program once in source order and:
//!
//! - Pushes and pops scopes for function bodies, branches and loop bodies
//! - Declares variables, formals, functions and tuple definitions
//! - Links every identifier occurrence to the symbol it refers to
//! - Resolves tuple field access chains against each tuple's private field table
//!
//! Its output is a `Resolution` side table plus the diagnostics it reported.

pub mod name_resolver;
pub mod resolution;

#[cfg(test)]
mod tests;
