//! Type checking context.
//!
//! This module provides the context threaded through `check` and `infer`:
//! the symbol interner (for rendering names in errors) and the current
//! variable environment. Contexts are cheap to clone and are never mutated;
//! entering a binder produces a new context.

use crate::context::{Bindings, TypeEnv, merge};
use crate::error::{Result, TypeError};
use crate::types::Ty;
use numera_mem::{StringInterner, Symbol};

/// Main type checking context.
#[derive(Debug, Clone)]
pub struct Context<'ctx> {
    /// String interner (shared with whoever built the AST)
    pub interner: &'ctx StringInterner,

    /// Variables in scope
    pub env: TypeEnv,
}

impl<'ctx> Context<'ctx> {
    /// Create a context with nothing in scope.
    pub fn new(interner: &'ctx StringInterner) -> Self {
        Self::with_env(interner, TypeEnv::new())
    }

    /// Create a context over an existing environment.
    pub fn with_env(interner: &'ctx StringInterner, env: TypeEnv) -> Self {
        Self { interner, env }
    }

    /// A context with `bindings` layered over this one.
    pub fn extend(&self, bindings: Bindings) -> Self {
        Self {
            interner: self.interner,
            env: self.env.extend(bindings),
        }
    }

    /// A context with one more binding.
    pub fn bind(&self, name: Symbol, ty: Ty) -> Self {
        Self {
            interner: self.interner,
            env: self.env.bind(name, ty),
        }
    }

    /// Look up a variable.
    pub fn lookup(&self, name: Symbol) -> Result<Ty> {
        self.env
            .lookup(name)
            .cloned()
            .ok_or_else(|| TypeError::UnboundVariable { name: self.name(name) })
    }

    /// Text of a symbol, for error messages.
    pub fn name(&self, sym: Symbol) -> String {
        self.interner.display(sym)
    }

    /// Combine the bindings of sibling patterns, rejecting repeated names.
    pub fn merge(&self, left: Bindings, right: Bindings) -> Result<Bindings> {
        merge(left, right).map_err(|name| TypeError::DuplicatePatternVariable {
            name: self.name(name),
        })
    }

    /// Process a telescope: each item is checked in the context extended
    /// by every earlier item's bindings.
    ///
    /// Returns the fully extended context and the per-item results.
    pub fn telescope<T, U, F>(&self, items: &[T], mut step: F) -> Result<(Self, Vec<U>)>
    where
        F: FnMut(&Self, &T) -> Result<(U, Bindings)>,
    {
        let mut ctx = self.clone();
        let mut out = Vec::with_capacity(items.len());
        for item in items {
            let (result, bindings) = step(&ctx, item)?;
            ctx = ctx.extend(bindings);
            out.push(result);
        }
        Ok((ctx, out))
    }
}
