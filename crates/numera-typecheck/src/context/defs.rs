//! Definition table.
//!
//! The module checker is the only writer. It asks [`DefnTable::contains`]
//! before checking a definition, so each name is inserted at most once, in
//! source order.

use crate::typed::TypedDefn;
use indexmap::IndexMap;
use numera_mem::Symbol;

/// Checked definitions keyed by name, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct DefnTable {
    defns: IndexMap<Symbol, TypedDefn>,
}

impl DefnTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self { defns: IndexMap::new() }
    }

    /// Check if `name` has been defined.
    pub fn contains(&self, name: Symbol) -> bool {
        self.defns.contains_key(&name)
    }

    /// Record a definition whose name is not yet in the table.
    pub fn insert(&mut self, defn: TypedDefn) {
        debug_assert!(!self.contains(defn.name), "definition recorded twice");
        self.defns.insert(defn.name, defn);
    }

    /// Consume the table.
    pub fn into_inner(self) -> IndexMap<Symbol, TypedDefn> {
        self.defns
    }
}
