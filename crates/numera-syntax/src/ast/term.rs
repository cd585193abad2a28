//! Term nodes.
//!
//! The surface term language: literals, functions, tuples and injections,
//! case analysis with guards, telescoping `let`, arithmetic and logical
//! operators, lists and comprehensions, ascriptions, and type-level queries.
//!
//! Several node shapes ([`Guard`], [`Branch`], [`Qual`], [`Link`],
//! [`Ellipsis`]) are generic over the term type so the type checker can
//! reuse them for its annotated terms.

use numera_mem::Symbol;

use crate::ast::pat::Pattern;
use crate::ast::ty::Type;

/// Which side of a sum an injection or injection pattern targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// `left`
    Left,
    /// `right`
    Right,
}

/// A non-negative rational literal such as `3.25`, kept as written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rational {
    /// Numerator
    pub numer: u64,
    /// Denominator (non-zero)
    pub denom: u64,
}

impl Rational {
    /// `numer / denom`
    pub const fn new(numer: u64, denom: u64) -> Self {
        Self { numer, denom }
    }
}

/// Unary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UOp {
    /// Arithmetic negation: `-t`
    Neg,
    /// Logical negation: `not t`
    Not,
    /// Factorial: `t!`
    Fact,
    /// `floor(t)`
    Floor,
    /// `ceiling(t)`
    Ceil,
    /// `abs(t)`
    Abs,
    /// Integer square root: `sqrt(t)`
    Sqrt,
    /// Integer base-2 logarithm: `lg(t)`
    Lg,
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `//`, integer division
    IDiv,
    /// `^`
    Exp,
    /// `mod`
    Mod,
    /// `|`, divisibility test
    Divides,
    /// `choose`, binomial or multinomial coefficient
    Choose,
    /// `::`
    Cons,
    /// `==`
    Eq,
    /// `/=`
    Neq,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Leq,
    /// `>=`
    Geq,
    /// `and`
    And,
    /// `or`
    Or,
    /// `implies`
    Implies,
}

impl Op {
    /// Source spelling, for diagnostics.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Div => "/",
            Op::IDiv => "//",
            Op::Exp => "^",
            Op::Mod => "mod",
            Op::Divides => "|",
            Op::Choose => "choose",
            Op::Cons => "::",
            Op::Eq => "==",
            Op::Neq => "/=",
            Op::Lt => "<",
            Op::Gt => ">",
            Op::Leq => "<=",
            Op::Geq => ">=",
            Op::And => "and",
            Op::Or => "or",
            Op::Implies => "implies",
        }
    }
}

/// Type-level queries over finite types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TyOp {
    /// `enumerate T`: the list of all values of `T`
    Enumerate,
    /// `count T`: the number of values of `T`
    Count,
}

/// A lambda argument, optionally annotated: `x` or `(x : T)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Arg {
    /// Bound name
    pub name: Symbol,
    /// Optional type annotation
    pub ann: Option<Type>,
}

/// One binding of a `let` telescope: `x = t` or `x : T = t`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Binding {
    /// Bound name, in scope for every later binding and the body
    pub name: Symbol,
    /// Optional type annotation
    pub ann: Option<Type>,
    /// Bound value
    pub value: Term,
}

/// A guard of a case branch.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Guard<T = Term> {
    /// `if t`, a boolean condition
    If(T),
    /// `when t is p`, a pattern match whose binders scope over later guards
    When(T, Pattern),
}

/// A case branch: a guard telescope and a body.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Branch<T = Term> {
    /// Guards, checked left to right
    pub guards: Vec<Guard<T>>,
    /// Result when every guard succeeds
    pub body: T,
}

/// A list comprehension qualifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Qual<T = Term> {
    /// `x in t`
    Bind(Symbol, T),
    /// A boolean filter
    Guard(T),
}

/// One step of a comparison chain: `< t`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Link<T = Term> {
    /// The relation linking the previous term to `term`
    pub op: Op,
    /// Right-hand side, also the left-hand side of the next link
    pub term: T,
}

/// The open end of a list literal such as `[1, 3 ..]` or `[1 .. n]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ellipsis<T = Box<Term>> {
    /// No upper bound
    Forever,
    /// Bounded by a term
    Until(T),
}

/// A surface term.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Term {
    /// Variable reference
    Var(Symbol),
    /// `()`
    Unit,
    /// `true`, `false`
    Bool(bool),
    /// Natural number literal
    Nat(u64),
    /// Non-negative rational literal
    Rational(Rational),
    /// `\x y (z : T). body`
    Lambda(Vec<Arg>, Box<Term>),
    /// Function application
    App(Box<Term>, Box<Term>),
    /// `(t1, ..., tn)`
    Tuple(Vec<Term>),
    /// `left t`, `right t`
    Inj(Side, Box<Term>),
    /// `{ body1 guards1; ...; bodyn guardsn }`
    Case(Vec<Branch>),
    /// `let x1 = t1, ..., xn = tn in body`
    Let(Vec<Binding>, Box<Term>),
    /// Unary operator application
    Unary(UOp, Box<Term>),
    /// Binary operator application
    Binary(Op, Box<Term>, Box<Term>),
    /// `t0 < t1 <= t2 ...`
    Chain(Box<Term>, Vec<Link>),
    /// `[t1, ..., tn]` with an optional ellipsis
    List(Vec<Term>, Option<Ellipsis>),
    /// `[ body | quals ]`
    ListComp(Box<Term>, Vec<Qual>),
    /// `(t : T)`
    Ascribe(Box<Term>, Type),
    /// `enumerate T`, `count T`
    TyOp(TyOp, Type),
}

impl Term {
    /// `f x`
    pub fn app(f: Term, x: Term) -> Term {
        Term::App(Box::new(f), Box::new(x))
    }

    /// `l op r`
    pub fn binary(op: Op, l: Term, r: Term) -> Term {
        Term::Binary(op, Box::new(l), Box::new(r))
    }

    /// `op t`
    pub fn unary(op: UOp, t: Term) -> Term {
        Term::Unary(op, Box::new(t))
    }

    /// `\args. body`
    pub fn lambda(args: Vec<Arg>, body: Term) -> Term {
        Term::Lambda(args, Box::new(body))
    }

    /// `left t` / `right t`
    pub fn inj(side: Side, t: Term) -> Term {
        Term::Inj(side, Box::new(t))
    }

    /// `(t : ty)`
    pub fn ascribe(t: Term, ty: Type) -> Term {
        Term::Ascribe(Box::new(t), ty)
    }

    /// `let bindings in body`
    pub fn let_in(bindings: Vec<Binding>, body: Term) -> Term {
        Term::Let(bindings, Box::new(body))
    }

    /// `[body | quals]`
    pub fn list_comp(body: Term, quals: Vec<Qual>) -> Term {
        Term::ListComp(Box::new(body), quals)
    }

    /// Short description used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Term::Var(_) => "variable",
            Term::Unit => "unit",
            Term::Bool(_) => "boolean literal",
            Term::Nat(_) => "natural number literal",
            Term::Rational(_) => "rational literal",
            Term::Lambda(..) => "lambda",
            Term::App(..) => "application",
            Term::Tuple(_) => "tuple",
            Term::Inj(..) => "injection",
            Term::Case(_) => "case expression",
            Term::Let(..) => "let expression",
            Term::Unary(..) => "unary operation",
            Term::Binary(..) => "binary operation",
            Term::Chain(..) => "comparison chain",
            Term::List(..) => "list literal",
            Term::ListComp(..) => "list comprehension",
            Term::Ascribe(..) => "ascription",
            Term::TyOp(..) => "type operator",
        }
    }
}

impl Arg {
    /// An unannotated argument.
    pub fn bare(name: Symbol) -> Self {
        Self { name, ann: None }
    }

    /// An annotated argument.
    pub fn typed(name: Symbol, ty: Type) -> Self {
        Self { name, ann: Some(ty) }
    }
}
