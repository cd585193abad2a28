//! AST node definitions.

pub mod decl;
pub mod pat;
pub mod term;
pub mod ty;

pub use decl::{Clause, Decl, Defn, Item, Module, Property};
pub use pat::Pattern;
pub use term::{Arg, Binding, Branch, Ellipsis, Guard, Link, Op, Qual, Rational, Side, Term, TyOp, UOp};
pub use ty::Type;
