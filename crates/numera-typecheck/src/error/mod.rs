//! Type checking errors.
//!
//! Checking is fail-fast: every fallible operation returns the first
//! [`TypeError`] it meets and the module checker hands it to the caller
//! unchanged. Types inside errors render with the [`Ty`] printer; names are
//! resolved through the interner before the error is built.

use crate::types::Ty;
use thiserror::Error;

/// Type checking errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypeError {
    /// A variable is not in scope.
    #[error("unbound variable: {name}")]
    UnboundVariable {
        /// Name of the variable
        name: String,
    },

    /// A term was applied (or a lambda checked) against a non-arrow type.
    #[error("expected a function type, found {ty}")]
    NotAFunction {
        /// The offending type
        ty: Ty,
    },

    /// An injection was checked or matched against a non-sum type.
    #[error("expected a sum type, found {ty}")]
    NotASum {
        /// The offending type
        ty: Ty,
    },

    /// A tuple does not fit the nested pairs of its type.
    #[error("a tuple with {arity} components does not fit the type {ty}")]
    NotATuple {
        /// The offending type
        ty: Ty,
        /// Number of components in the tuple
        arity: usize,
    },

    /// A list term was used at a non-list type.
    #[error("expected a list type, found {ty}")]
    NotAList {
        /// The offending type
        ty: Ty,
    },

    /// A term's type is not a subtype of the type it was checked against.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// The checking type
        expected: Ty,
        /// The inferred type
        found: Ty,
    },

    /// A term needs a checking type and none was available.
    #[error("cannot infer the type of a {what}; add a type annotation")]
    CannotInfer {
        /// Kind of term
        what: &'static str,
    },

    /// An arithmetic operation was used at a non-numeric type.
    #[error("type {ty} is not numeric")]
    NotNumeric {
        /// The offending type
        ty: Ty,
    },

    /// Division was used at a type without it.
    #[error("type {ty} does not support division")]
    NotFractional {
        /// The offending type
        ty: Ty,
    },

    /// Negation or subtraction was used at a type without it.
    #[error("type {ty} does not support subtraction")]
    NotSubtractive {
        /// The offending type
        ty: Ty,
    },

    /// `mod` was used at a non-integral type.
    #[error("type {ty} is not integral")]
    NotIntegral {
        /// The offending type
        ty: Ty,
    },

    /// `enumerate` or `count` was used on an infinite type.
    #[error("type {ty} is not finite")]
    InfiniteType {
        /// The offending type
        ty: Ty,
    },

    /// Equality was used at a type without decidable equality.
    #[error("type {ty} does not have decidable equality")]
    NotDecidable {
        /// The offending type
        ty: Ty,
    },

    /// A comparison was used at a type without a total order.
    #[error("type {ty} is not ordered")]
    NotOrdered {
        /// The offending type
        ty: Ty,
    },

    /// Two types have no common supertype.
    #[error("types {left} and {right} have no common supertype")]
    NoLub {
        /// Left type
        left: Ty,
        /// Right type
        right: Ty,
    },

    /// A case expression has no branches.
    #[error("case expression has no branches")]
    EmptyCase,

    /// A pattern cannot match values of a type.
    #[error("{pattern} cannot match a value of type {ty}")]
    PatternTypeMismatch {
        /// Kind of pattern
        pattern: &'static str,
        /// The type it was matched against
        ty: Ty,
    },

    /// Clauses disagree on their number of patterns, or have more patterns
    /// than the declared type has arrows.
    #[error("definition of {name} expects {expected} patterns per clause, found {found}")]
    ArityMismatch {
        /// Defined name
        name: String,
        /// Expected pattern count
        expected: usize,
        /// Pattern count found
        found: usize,
    },

    /// A name was declared twice.
    #[error("duplicate type declaration for {name}")]
    DuplicateDeclaration {
        /// Declared name
        name: String,
    },

    /// A name was defined twice, or a constant was given several clauses.
    #[error("duplicate definition of {name}")]
    DuplicateDefinition {
        /// Defined name
        name: String,
    },

    /// A definition has no clauses.
    #[error("definition of {name} has no clauses")]
    EmptyDefinition {
        /// Defined name
        name: String,
    },

    /// One pattern (or one clause) binds the same variable twice.
    #[error("variable {name} is bound more than once in the same pattern")]
    DuplicatePatternVariable {
        /// Variable name
        name: String,
    },

    /// A rational was used as an exponent.
    #[error("exponent of type {ty} is not an integer")]
    RationalExponent {
        /// Type of the exponent
        ty: Ty,
    },

    /// A modular value was used as an exponent.
    #[error("values of type {ty} cannot be used as exponents")]
    NotAnExponent {
        /// Type of the exponent
        ty: Ty,
    },

    /// A comparison chain was linked by an operator that is not a relation.
    #[error("operator {op} cannot link a comparison chain")]
    NotARelation {
        /// Source spelling of the operator
        op: &'static str,
    },

    /// A type annotation names no valid type.
    #[error("invalid type: {reason}")]
    InvalidType {
        /// What is wrong with it
        reason: String,
    },
}

/// A result type for type checking operations.
pub type Result<T> = std::result::Result<T, TypeError>;
