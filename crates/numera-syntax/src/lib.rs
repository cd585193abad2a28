//! numera surface syntax.
//!
//! This crate defines the untyped AST that a front end hands to the type
//! checker: terms, patterns, type annotations, and the module-level
//! declarations that tie them together. It contains no lexer or parser;
//! producers build these values directly.
//!
//! # Modules
//!
//! - [`ast::term`] - expressions and their operators
//! - [`ast::pat`] - patterns used by case guards and definition clauses
//! - [`ast::ty`] - type annotations
//! - [`ast::decl`] - declarations, definitions, properties, modules

pub mod ast;

pub use ast::{
    Arg, Binding, Branch, Clause, Decl, Defn, Ellipsis, Guard, Item, Link, Module, Op, Pattern,
    Property, Qual, Rational, Side, Term, TyOp, Type, UOp,
};
