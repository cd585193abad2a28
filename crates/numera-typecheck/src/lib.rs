//! numera type checker.
//!
//! A bidirectional checker for the numera expression language. Types form a
//! lattice around the numeric tower `N ⊂ Z ⊂ Q`, `N ⊂ Q+ ⊂ Q`, with the
//! modular types `Zn` standing apart. The checker turns a surface
//! [`Module`](numera_syntax::Module) into annotated definitions and
//! properties, or reports the first error it finds.
//!
//! # Modules
//!
//! - [`types`] - the `Ty` representation, subtyping, joins, and printing
//! - [`context`] - scoped variable environments and the definition table
//! - [`infer`] - the checking context and the inference judgment
//! - [`check`] - the checking judgment, patterns, definitions, properties
//! - [`typed`] - annotated terms and their erasure back to surface terms
//! - [`error`] - the error taxonomy
//!
//! # Example
//!
//! ```
//! use numera_mem::StringInterner;
//! use numera_syntax::{Clause, Decl, Defn, Item, Module, Op, Term, Type};
//! use numera_typecheck::check_module;
//!
//! let mut interner = StringInterner::new();
//! let two = interner.intern("two");
//! let module = Module {
//!     items: vec![
//!         Item::Decl(Decl::new(two, Type::Nat)),
//!         Item::Defn(Defn {
//!             name: two,
//!             clauses: vec![Clause::new(vec![], Term::binary(Op::Add, Term::Nat(1), Term::Nat(1)))],
//!         }),
//!     ],
//! };
//!
//! let info = check_module(&interner, &module).unwrap();
//! assert_eq!(info.defns[&two].clauses.len(), 1);
//! ```

#![warn(missing_docs)]

pub mod check;
pub mod context;
pub mod error;
pub mod infer;
pub mod typed;
pub mod types;

pub use check::{ast_to_ty, check, check_defn, check_module, check_pattern, check_property, ty_to_ast};
pub use context::{Bindings, DefnTable, TypeEnv};
pub use error::{Result, TypeError};
pub use infer::{Context, infer};
pub use typed::{ModuleInfo, Typed, TypedKind, erase};
pub use types::{PrimTy, Ty, is_subtype, lub, lub_all};

/// Run `f` with at least 64 KiB of stack left, growing it in 2 MiB segments.
///
/// Every recursive walk over terms enters through here, so operator chains
/// thousands of levels deep do not overflow.
pub(crate) fn with_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(64 * 1024, 2 * 1024 * 1024, f)
}
