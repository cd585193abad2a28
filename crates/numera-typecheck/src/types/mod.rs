//! Type representation and operations.
//!
//! This module defines the type system used during type checking:
//!
//! - **Ty**: Internal type representation and type predicates
//! - **Lattice**: Subtyping and least upper bounds
//! - **Display**: Pretty-printing for error messages

pub mod display;
pub mod lattice;
pub mod ty;

pub use lattice::{is_subtype, lub, lub_all};
pub use ty::{PrimTy, Ty};
