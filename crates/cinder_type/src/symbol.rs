use std::collections::HashMap;

use crate::{Id, Store};

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Symbol {
  pub name: String,
}

pub type SymbolId = Id<Symbol>;

/// Interner for identifier spellings (attribute names, keyword arguments).
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
  symbols: Store<Symbol>,
  map: HashMap<String, SymbolId>,
}

impl SymbolTable {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn intern(
    &mut self,
    name: &str,
  ) -> SymbolId {
    if let Some(id) = self.map.get(name) {
      return *id;
    }

    let id = self.symbols.alloc(Symbol { name: name.to_string() });
    self.map.insert(name.to_string(), id);
    id
  }

  /// Look up an already interned spelling without inserting it.
  pub fn lookup(
    &self,
    name: &str,
  ) -> Option<SymbolId> {
    self.map.get(name).copied()
  }

  pub fn get(
    &self,
    id: &SymbolId,
  ) -> &str {
    &self.symbols.get(id).name
  }

  /// True if `id` is the interned spelling of `name`.
  pub fn is_str(
    &self,
    id: &SymbolId,
    name: &str,
  ) -> bool {
    self.get(id) == name
  }

  pub fn len(&self) -> usize {
    self.symbols.len()
  }

  pub fn is_empty(&self) -> bool {
    self.symbols.is_empty()
  }
}
