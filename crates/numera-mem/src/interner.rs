//! Bidirectional string ↔ [`Symbol`] table.
//!
//! The interner owns one copy of every distinct name. `intern` is a hash
//! lookup on the hot path and an append on first sight; `resolve` is a slice
//! index.

use crate::symbol::Symbol;

#[cfg(feature = "symbols")]
use hashbrown::HashMap;

#[cfg(not(feature = "symbols"))]
use std::collections::HashMap;

/// Owns the text of every interned name.
///
/// ```
/// use numera_mem::StringInterner;
///
/// let mut names = StringInterner::new();
/// let xs = names.intern("xs");
/// assert_eq!(names.resolve(xs), Some("xs"));
/// assert_eq!(names.len(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct StringInterner {
    /// Text by symbol index
    strings: Vec<Box<str>>,

    /// Symbol by text
    symbols: HashMap<Box<str>, Symbol>,
}

impl StringInterner {
    /// Creates an empty interner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol for `s`, allocating one on first sight.
    pub fn intern(&mut self, s: &str) -> Symbol {
        if let Some(&sym) = self.symbols.get(s) {
            return sym;
        }

        let sym = Symbol::new(self.strings.len() as u32);
        self.strings.push(s.into());
        self.symbols.insert(s.into(), sym);
        sym
    }

    /// Returns the symbol for `s` without interning it.
    #[must_use]
    pub fn get(&self, s: &str) -> Option<Symbol> {
        self.symbols.get(s).copied()
    }

    /// Text of `sym`, or `None` if it did not come from this interner.
    #[must_use]
    pub fn resolve(&self, sym: Symbol) -> Option<&str> {
        self.strings.get(sym.as_usize()).map(|s| &**s)
    }

    /// Text of `sym`, falling back to its `#id` rendering.
    ///
    /// Used when rendering diagnostics, where a foreign symbol should still
    /// produce something readable.
    #[must_use]
    pub fn display(&self, sym: Symbol) -> String {
        self.resolve(sym)
            .map_or_else(|| sym.to_string(), str::to_string)
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True when nothing has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interner_starts_empty() {
        let names = StringInterner::new();
        assert!(names.is_empty());
        assert_eq!(names.len(), 0);
    }

    #[test]
    fn test_intern_deduplicates() {
        let mut names = StringInterner::new();
        let a = names.intern("fact");
        let b = names.intern("fib");
        let c = names.intern("fact");

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(names.len(), 2);
    }

    #[test]
    fn test_symbols_are_dense() {
        let mut names = StringInterner::new();
        let ids: Vec<u32> = ["x", "y", "z"]
            .iter()
            .map(|s| names.intern(s).as_u32())
            .collect();
        assert_eq!(ids, [0, 1, 2]);
    }

    #[test]
    fn test_resolve_and_get() {
        let mut names = StringInterner::new();
        let x = names.intern("x'");

        assert_eq!(names.resolve(x), Some("x'"));
        assert_eq!(names.get("x'"), Some(x));
        assert_eq!(names.get("y"), None);
        assert_eq!(names.resolve(Symbol::new(40)), None);
    }

    #[test]
    fn test_display_falls_back_to_id() {
        let mut names = StringInterner::new();
        let n = names.intern("n");

        assert_eq!(names.display(n), "n");
        assert_eq!(names.display(Symbol::new(99)), "#99");
    }

    #[test]
    fn test_unicode_names() {
        let mut names = StringInterner::new();
        let alpha = names.intern("α");
        assert_eq!(names.resolve(alpha), Some("α"));
    }
}
