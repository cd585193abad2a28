//! Module-level nodes: type declarations, definitions, and properties.
//!
//! A module is an ordered list of items. Every definition must be preceded
//! (anywhere in the module) by a type declaration of the same name; the
//! declaration also carries the properties stated about that name.

use numera_mem::Symbol;

use crate::ast::pat::Pattern;
use crate::ast::term::Term;
use crate::ast::ty::Type;

/// `name : ty`, with the properties attached to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Decl {
    /// Declared name
    pub name: Symbol,
    /// Declared type
    pub ty: Type,
    /// `!!! forall ...` properties stated about `name`
    pub props: Vec<Property>,
}

/// One clause of a definition: `name p1 ... pn = body`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Clause {
    /// Argument patterns, one per arrow peeled off the declared type
    pub patterns: Vec<Pattern>,
    /// Right-hand side
    pub body: Term,
}

/// A definition: every clause for one name, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Defn {
    /// Defined name
    pub name: Symbol,
    /// Clauses, tried top to bottom at run time
    pub clauses: Vec<Clause>,
}

/// `forall x1 : T1, ..., xn : Tn. body`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Property {
    /// Quantified variables and their types
    pub binders: Vec<(Symbol, Type)>,
    /// Boolean body
    pub body: Term,
}

/// A module item.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Item {
    /// Type declaration
    Decl(Decl),
    /// Definition
    Defn(Defn),
}

/// A whole module, items in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Module {
    /// Items
    pub items: Vec<Item>,
}

impl Module {
    /// Type declarations, in source order.
    pub fn decls(&self) -> impl Iterator<Item = &Decl> {
        self.items.iter().filter_map(|item| match item {
            Item::Decl(decl) => Some(decl),
            Item::Defn(_) => None,
        })
    }

    /// Definitions, in source order.
    pub fn defns(&self) -> impl Iterator<Item = &Defn> {
        self.items.iter().filter_map(|item| match item {
            Item::Defn(defn) => Some(defn),
            Item::Decl(_) => None,
        })
    }
}

impl Decl {
    /// A declaration without properties.
    pub fn new(name: Symbol, ty: Type) -> Self {
        Self { name, ty, props: Vec::new() }
    }
}

impl Clause {
    /// `patterns = body`
    pub fn new(patterns: Vec<Pattern>, body: Term) -> Self {
        Self { patterns, body }
    }
}
