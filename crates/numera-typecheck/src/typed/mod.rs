//! Type-annotated terms.
//!
//! The checker's output mirrors the surface AST node for node, with every
//! node carrying its resolved [`Ty`]. The one extra node,
//! [`TypedKind::Sub`], marks where a term's inferred type was widened to the
//! type it was checked against. [`erase`] maps an annotated term back to its
//! surface term.

pub mod erase;

pub use erase::{erase, erase_clause, erase_defn, erase_property};

use crate::context::{Bindings, TypeEnv};
use crate::types::Ty;
use indexmap::IndexMap;
use numera_mem::Symbol;
use numera_syntax::ast::{Branch, Ellipsis, Link, Op, Pattern, Qual, Rational, Side, TyOp, UOp};

/// An annotated term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Typed {
    /// Node
    pub kind: TypedKind,
    /// Type of the node
    pub ty: Ty,
}

impl Typed {
    /// Pair a node with its type.
    pub fn new(kind: TypedKind, ty: Ty) -> Self {
        Self { kind, ty }
    }

    /// Widen `self` to `ty`. Returns `self` unchanged if the types agree.
    pub fn subsume(self, ty: Ty) -> Self {
        if self.ty == ty {
            return self;
        }
        Self {
            kind: TypedKind::Sub(Box::new(self)),
            ty,
        }
    }
}

/// Annotated term nodes, one per surface term node plus [`TypedKind::Sub`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypedKind {
    /// Variable reference
    Var(Symbol),
    /// `()`
    Unit,
    /// Boolean literal
    Bool(bool),
    /// Natural number literal
    Nat(u64),
    /// Rational literal
    Rational(Rational),
    /// Lambda
    Lambda(Vec<TypedArg>, Box<Typed>),
    /// Application
    App(Box<Typed>, Box<Typed>),
    /// Tuple
    Tuple(Vec<Typed>),
    /// Injection
    Inj(Side, Box<Typed>),
    /// Case expression
    Case(Vec<Branch<Typed>>),
    /// Let telescope
    Let(Vec<TypedBinding>, Box<Typed>),
    /// Unary operator
    Unary(UOp, Box<Typed>),
    /// Binary operator
    Binary(Op, Box<Typed>, Box<Typed>),
    /// Comparison chain
    Chain(Box<Typed>, Vec<Link<Typed>>),
    /// List literal
    List(Vec<Typed>, Option<Ellipsis<Box<Typed>>>),
    /// List comprehension
    ListComp(Box<Typed>, Vec<Qual<Typed>>),
    /// Ascription
    Ascribe(Box<Typed>, Ty),
    /// `enumerate` / `count`
    TyOp(TyOp, Ty),
    /// Subsumption: the inner term's type is a strict subtype of this node's
    Sub(Box<Typed>),
}

/// A checked lambda argument.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedArg {
    /// Bound name
    pub name: Symbol,
    /// Annotation as written, if any
    pub ann: Option<Ty>,
    /// Type the body sees the argument at
    pub ty: Ty,
}

/// A checked `let` binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedBinding {
    /// Bound name
    pub name: Symbol,
    /// Annotation as written, if any
    pub ann: Option<Ty>,
    /// Bound value; its type is the type of `name`
    pub value: Typed,
}

/// A checked definition clause.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedClause {
    /// Argument patterns
    pub patterns: Vec<Pattern>,
    /// Variables bound by the patterns
    pub bindings: Bindings,
    /// Body, checked at the declared type minus one arrow per pattern
    pub body: Typed,
}

/// A checked definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedDefn {
    /// Defined name
    pub name: Symbol,
    /// Declared type
    pub ty: Ty,
    /// Clauses in source order
    pub clauses: Vec<TypedClause>,
}

/// A checked property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedProperty {
    /// Quantified variables
    pub binders: Vec<(Symbol, Ty)>,
    /// Body, at `Bool`
    pub body: Typed,
}

/// Everything a checked module produces.
#[derive(Debug, Clone, Default)]
pub struct ModuleInfo {
    /// Checked definitions, in source order
    pub defns: IndexMap<Symbol, TypedDefn>,
    /// Checked properties per declared name, in declaration order
    pub props: IndexMap<Symbol, Vec<TypedProperty>>,
    /// Top-level environment: every declared name at its declared type
    pub ctx: TypeEnv,
}
