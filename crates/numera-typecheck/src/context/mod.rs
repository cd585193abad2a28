//! Type checking context and environment management.
//!
//! - **TypeEnv**: Persistent variable environment with scoped extension
//! - **DefnTable**: Write-once table of checked definitions

pub mod defs;
pub mod env;

pub use defs::DefnTable;
pub use env::{Bindings, TypeEnv, merge};
