//! Symbols and the scope-chained symbol table.
//!
//! This module provides:
//!
//! - `Type`, the semantic type values with nominal tuple equality
//! - `Symbol` and the arena that owns every symbol created during analysis
//! - `SymTable`, a stack of scopes with local and chained lookup

pub mod symbol;
pub mod symbol_table;
pub mod types;
