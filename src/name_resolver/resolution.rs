use std::collections::HashMap;

use crate::{
    ast::ast::{Ident, NodeId},
    symbols::symbol::{Symbol, SymbolArena, SymbolId},
};

/// Outcome of resolving one `loc : field` access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessLink {
    /// A diagnostic was already reported for this access or one it is chained on.
    Bad,
    /// The field was found. `tuple_def` is set when the field is itself a tuple instance, so an
    /// access chained on top of this one can keep going.
    Resolved { tuple_def: Option<SymbolId> },
}

/// Everything name resolution adds to a program: the symbols it created, the symbol each
/// identifier occurrence refers to and the outcome of every field access.
#[derive(Debug, Clone, Default)]
pub struct Resolution {
    pub symbols: SymbolArena,
    links: HashMap<NodeId, SymbolId>,
    accesses: HashMap<NodeId, AccessLink>,
}

impl Resolution {
    pub fn new() -> Self {
        Resolution {
            symbols: SymbolArena::new(),
            links: HashMap::new(),
            accesses: HashMap::new(),
        }
    }

    pub fn link(&mut self, ident: &Ident, symbol: SymbolId) {
        tracing::trace!(name = %ident.name, node = %ident.id, "link");
        self.links.insert(ident.id, symbol);
    }

    pub fn link_of(&self, ident: &Ident) -> Option<SymbolId> {
        self.links.get(&ident.id).copied()
    }

    pub fn symbol_of(&self, ident: &Ident) -> Option<&Symbol> {
        self.link_of(ident).map(|id| self.symbols.get(id))
    }

    pub fn set_access(&mut self, access: NodeId, link: AccessLink) {
        self.accesses.insert(access, link);
    }

    pub fn access(&self, access: NodeId) -> Option<AccessLink> {
        self.accesses.get(&access).copied()
    }

    pub fn link_count(&self) -> usize {
        self.links.len()
    }
}
