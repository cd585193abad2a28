//! Shared helpers for the type checker integration tests.

#![allow(dead_code)]

use numera_mem::{StringInterner, Symbol};
use numera_syntax::{Clause, Decl, Defn, Item, Module, Term, Type};
use numera_typecheck::{Context, Ty};

/// `(n : N)`
pub fn nat(n: u64) -> Term {
    Term::ascribe(Term::Nat(n), Type::Nat)
}

/// `(n : Z)`
pub fn int(n: u64) -> Term {
    Term::ascribe(Term::Nat(n), Type::Int)
}

/// Builds a module one item at a time.
pub struct ModuleBuilder<'a> {
    interner: &'a mut StringInterner,
    items: Vec<Item>,
}

impl<'a> ModuleBuilder<'a> {
    pub fn new(interner: &'a mut StringInterner) -> Self {
        Self { interner, items: Vec::new() }
    }

    pub fn sym(&mut self, name: &str) -> Symbol {
        self.interner.intern(name)
    }

    pub fn decl(mut self, name: &str, ty: Type) -> Self {
        let name = self.sym(name);
        self.items.push(Item::Decl(Decl::new(name, ty)));
        self
    }

    pub fn defn(mut self, name: &str, clauses: Vec<Clause>) -> Self {
        let name = self.sym(name);
        self.items.push(Item::Defn(Defn { name, clauses }));
        self
    }

    pub fn constant(self, name: &str, ty: Type, body: Term) -> Self {
        self.decl(name, ty).defn(name, vec![Clause::new(vec![], body)])
    }

    pub fn build(self) -> Module {
        Module { items: self.items }
    }
}

/// A small universe of types: every primitive, two modular types, and one
/// level of every constructor over the numeric tower plus `Bool`.
pub fn universe() -> Vec<Ty> {
    let leaves = vec![Ty::NAT, Ty::INT, Ty::POS_RATIONAL, Ty::RATIONAL, Ty::BOOL];

    let mut out = vec![Ty::VOID, Ty::UNIT, Ty::BOOL, Ty::NAT, Ty::INT, Ty::POS_RATIONAL, Ty::RATIONAL];
    out.push(Ty::Finite(2));
    out.push(Ty::Finite(5));
    for a in &leaves {
        out.push(Ty::list(a.clone()));
        for b in &leaves {
            out.push(Ty::arrow(a.clone(), b.clone()));
            out.push(Ty::pair(a.clone(), b.clone()));
            out.push(Ty::sum(a.clone(), b.clone()));
        }
    }
    out
}

/// A context with nothing in scope.
pub fn empty(interner: &StringInterner) -> Context<'_> {
    Context::new(interner)
}
