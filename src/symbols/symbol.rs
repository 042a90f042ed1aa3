use std::fmt::Display;

use super::{symbol_table::SymTable, types::Type};

/// Index of a symbol in its `SymbolArena`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolId(pub usize);

#[derive(Debug, Clone)]
pub enum SymbolKind {
    Variable(Type),
    Function {
        return_type: Type,
        /// Types of the formals that were declared successfully, in order.
        param_types: Vec<Type>,
    },
    TupleInstance {
        tuple_name: String,
        definition: SymbolId,
    },
    TupleDef {
        fields: SymTable,
    },
}

/// One declared name.
#[derive(Debug, Clone)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
}

impl Symbol {
    /// A function whose parameter list is filled in once its formals are resolved.
    pub fn function(name: &str, return_type: Type) -> Self {
        Symbol {
            name: name.to_string(),
            kind: SymbolKind::Function {
                return_type,
                param_types: vec![],
            },
        }
    }

    pub fn get_type(&self) -> Type {
        match &self.kind {
            SymbolKind::Variable(ty) => ty.clone(),
            SymbolKind::Function {
                return_type,
                param_types,
                ..
            } => Type::Function {
                return_type: Box::new(return_type.clone()),
                params: param_types.clone(),
            },
            SymbolKind::TupleInstance { tuple_name, .. } => {
                Type::TupleInstance(tuple_name.clone())
            }
            SymbolKind::TupleDef { .. } => Type::TupleDef(self.name.clone()),
        }
    }

    pub fn is_tuple_def(&self) -> bool {
        matches!(self.kind, SymbolKind::TupleDef { .. })
    }
}

// Used when rendering linked identifiers as `name<symbol>`.
impl Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            SymbolKind::TupleDef { .. } => write!(f, "tuple"),
            _ => write!(f, "{}", self.get_type()),
        }
    }
}

/// Owns every symbol created during one analysis. Symbols are never removed.
#[derive(Debug, Clone, Default)]
pub struct SymbolArena {
    symbols: Vec<Symbol>,
}

impl SymbolArena {
    pub fn new() -> Self {
        SymbolArena { symbols: vec![] }
    }

    pub fn alloc(&mut self, symbol: Symbol) -> SymbolId {
        self.symbols.push(symbol);
        SymbolId(self.symbols.len() - 1)
    }

    pub fn get(&self, id: SymbolId) -> &Symbol {
        &self.symbols[id.0]
    }

    pub fn get_mut(&mut self, id: SymbolId) -> &mut Symbol {
        &mut self.symbols[id.0]
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
