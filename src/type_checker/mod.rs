//! Type checking module.
//!
//! Runs after name resolution and reads its side table to give every
//! expression a type:
//!
//! - Checks operators, assignments and calls against their operand types
//! - Checks conditions, `read`/`write` targets and `return` values
//! - Absorbs errors already reported so one mistake yields one diagnostic

pub mod type_checker;
