use std::collections::HashMap;

use crate::errors::errors::InternalError;

use super::symbol::SymbolId;

type Scope = HashMap<String, SymbolId>;

/// A stack of scopes, innermost last.
///
/// The outermost scope is stored apart from the nested ones, so the stack can never be empty.
#[derive(Debug, Clone, Default)]
pub struct SymTable {
    outermost: Scope,
    nested: Vec<Scope>,
}

impl SymTable {
    pub fn new() -> Self {
        SymTable {
            outermost: HashMap::new(),
            nested: vec![],
        }
    }

    pub fn enter_scope(&mut self) {
        self.nested.push(HashMap::new());
        tracing::trace!(depth = self.depth(), "enter scope");
    }

    pub fn exit_scope(&mut self) -> Result<(), InternalError> {
        match self.nested.pop() {
            Some(_) => {
                tracing::trace!(depth = self.depth(), "exit scope");
                Ok(())
            }
            None => Err(InternalError::ExitOutermostScope),
        }
    }

    /// Adds `name` to the innermost scope. Callers report user-facing duplicates themselves
    /// after a `lookup_local`, so a clash here is an internal error.
    pub fn declare(&mut self, name: &str, symbol: SymbolId) -> Result<(), InternalError> {
        let scope = self.innermost_mut();

        if scope.contains_key(name) {
            return Err(InternalError::DuplicateSymbol {
                name: name.to_string(),
            });
        }

        scope.insert(name.to_string(), symbol);
        Ok(())
    }

    pub fn lookup_local(&self, name: &str) -> Option<SymbolId> {
        self.innermost().get(name).copied()
    }

    pub fn lookup_chain(&self, name: &str) -> Option<SymbolId> {
        self.nested
            .iter()
            .rev()
            .chain(std::iter::once(&self.outermost))
            .find_map(|scope| scope.get(name).copied())
    }

    /// Number of scopes on the stack, the outermost included.
    pub fn depth(&self) -> usize {
        self.nested.len() + 1
    }

    fn innermost(&self) -> &Scope {
        self.nested.last().unwrap_or(&self.outermost)
    }

    fn innermost_mut(&mut self) -> &mut Scope {
        self.nested.last_mut().unwrap_or(&mut self.outermost)
    }
}
