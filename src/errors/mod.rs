//! Error types and error handling for the compiler.
//!
//! This module defines the three kinds of failure in the front end:
//!
//! - Scanner and parser errors with source position information and suggestions
//! - Internal errors, raised when an analysis invariant breaks
//! - Semantic diagnostics, collected by the passes without stopping them

pub mod diagnostics;
pub mod errors;
