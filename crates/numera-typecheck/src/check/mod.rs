//! The checking judgment and everything built on it.
//!
//! - [`expr`] - checking terms against a type
//! - [`pat`] - checking patterns against a scrutinee type
//! - [`decl`] - definitions and whole modules
//! - [`prop`] - properties
//! - [`ty`] - converting type annotations

pub mod decl;
pub mod expr;
pub mod pat;
pub mod prop;
pub mod ty;

pub use decl::{check_defn, check_module};
pub use expr::check;
pub use pat::check_pattern;
pub use prop::check_property;
pub use ty::{ast_to_ty, ty_to_ast};
