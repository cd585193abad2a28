//! Interned identifier handles.

use std::fmt;

/// Handle to a name stored in a [`StringInterner`](crate::StringInterner).
///
/// Two symbols from the same interner are equal exactly when their text is
/// equal. Symbols from different interners must not be mixed.
///
/// ```
/// use numera_mem::StringInterner;
///
/// let mut names = StringInterner::new();
/// let x = names.intern("x");
/// assert_eq!(x, names.intern("x"));
/// assert_ne!(x, names.intern("y"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Symbol(u32);

impl Symbol {
    /// Wraps a raw interner index.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// The raw index.
    #[must_use]
    pub const fn as_u32(self) -> u32 {
        self.0
    }

    /// The raw index as a slot position.
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0 as usize
    }
}

/// Renders as `#id`; resolve through the interner for the source text.
impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl From<u32> for Symbol {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_raw_round_trip() {
        let sym = Symbol::new(7);
        assert_eq!(sym.as_u32(), 7);
        assert_eq!(sym.as_usize(), 7);
        assert_eq!(Symbol::from(7), sym);
    }

    #[test]
    fn test_symbol_display() {
        assert_eq!(Symbol::new(12).to_string(), "#12");
    }

    #[test]
    fn test_symbol_as_map_key() {
        use std::collections::BTreeMap;

        let mut types = BTreeMap::new();
        types.insert(Symbol::new(2), "N");
        types.insert(Symbol::new(1), "Bool");
        types.insert(Symbol::new(2), "Z");

        assert_eq!(types.len(), 2);
        assert_eq!(types.values().copied().collect::<Vec<_>>(), ["Bool", "Z"]);
    }
}
