//! Type inference engine.
//!
//! This module holds the checking context and the inference half of the
//! bidirectional checker; the checking half lives in [`crate::check`].

pub mod context;
pub mod expr;

pub use context::Context;
pub use expr::infer;
