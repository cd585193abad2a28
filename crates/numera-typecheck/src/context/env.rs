//! Type environment for lexical scoping.
//!
//! The environment is a persistent chain of scopes. Extending it produces a
//! new environment whose innermost scope holds the new bindings; the parent
//! is shared, never copied or mutated, so a scope disappears as soon as the
//! environment that introduced it is dropped.
//!
//! # Example
//!
//! ```
//! use numera_mem::Symbol;
//! use numera_typecheck::{Ty, TypeEnv};
//!
//! let (x, y) = (Symbol::new(0), Symbol::new(1));
//! let outer = TypeEnv::singleton(x, Ty::NAT);
//! let inner = outer.bind(y, Ty::BOOL).bind(x, Ty::INT);
//!
//! assert_eq!(inner.lookup(x), Some(&Ty::INT));
//! assert_eq!(outer.lookup(x), Some(&Ty::NAT));
//! assert_eq!(outer.lookup(y), None);
//! ```

use crate::types::Ty;
use indexmap::IndexMap;
use numera_mem::Symbol;
use std::rc::Rc;

/// One scope's bindings, in insertion order.
pub type Bindings = IndexMap<Symbol, Ty>;

/// Persistent, scoped variable environment.
#[derive(Debug, Clone, Default)]
pub struct TypeEnv {
    head: Option<Rc<Scope>>,
}

#[derive(Debug)]
struct Scope {
    bindings: Bindings,
    parent: Option<Rc<Scope>>,
}

impl TypeEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        Self { head: None }
    }

    /// An environment binding only `name`.
    pub fn singleton(name: Symbol, ty: Ty) -> Self {
        Self::new().bind(name, ty)
    }

    /// Layer `bindings` over this environment.
    ///
    /// Lookups prefer the new layer. Extending with no bindings returns an
    /// environment sharing this one's scopes.
    pub fn extend(&self, bindings: Bindings) -> Self {
        if bindings.is_empty() {
            return self.clone();
        }
        Self {
            head: Some(Rc::new(Scope {
                bindings,
                parent: self.head.clone(),
            })),
        }
    }

    /// Layer a single binding over this environment.
    pub fn bind(&self, name: Symbol, ty: Ty) -> Self {
        let mut bindings = Bindings::with_capacity(1);
        bindings.insert(name, ty);
        self.extend(bindings)
    }

    /// Look up a variable, innermost scope first.
    pub fn lookup(&self, name: Symbol) -> Option<&Ty> {
        let mut scope = self.head.as_deref();
        while let Some(s) = scope {
            if let Some(ty) = s.bindings.get(&name) {
                return Some(ty);
            }
            scope = s.parent.as_deref();
        }
        None
    }

    /// Check if a variable is bound in any scope.
    pub fn contains(&self, name: Symbol) -> bool {
        self.lookup(name).is_some()
    }
}

/// Combine two disjoint binding sets, `left` first.
///
/// Returns the first name of `right` already bound in `left`.
pub fn merge(mut left: Bindings, right: Bindings) -> Result<Bindings, Symbol> {
    for (name, ty) in right {
        if left.contains_key(&name) {
            return Err(name);
        }
        left.insert(name, ty);
    }
    Ok(left)
}
