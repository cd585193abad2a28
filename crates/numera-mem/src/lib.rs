//! Name interning for numera.
//!
//! Every identifier in the surface AST (variables, definition names,
//! pattern binders) is a [`Symbol`]: a 32-bit handle into a
//! [`StringInterner`]. Symbols compare and hash as integers, so contexts and
//! definition tables key on them directly and only error rendering goes back
//! to the interner for the text.
//!
//! Enable the `symbols` feature to back the interner with `hashbrown`.

pub mod interner;
pub mod symbol;

pub use interner::StringInterner;
pub use symbol::Symbol;
