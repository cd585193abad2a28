//! Core type representation for type checking.
//!
//! This module defines the `Ty` enum, the checker's view of a type. It is
//! distinct from `ast::Type`, which represents source-level annotations;
//! [`ast_to_ty`](crate::check::ast_to_ty) converts between the two.
//!
//! # Design
//!
//! - **Primitives** are the atomic types, including the numeric tower
//! - **Modular types** `Zn` are numeric and finite but unrelated to the tower
//! - **Composite types** are arrows, pairs, sums, and lists
//!
//! Equality is structural. Type predicates (numeric, finite, ordered, ...)
//! live here; subtyping and joins live in [`lattice`](super::lattice).

/// Internal type representation for type checking.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Ty {
    /// Primitive type: Void, Unit, Bool, or one of the four tower types
    Primitive(PrimTy),

    /// Integers modulo `n` (`n > 0`).
    Finite(u64),

    /// Function type: `dom -> cod`.
    Arrow(Box<Ty>, Box<Ty>),

    /// Product type: `a * b`. Longer tuples nest to the right.
    Pair(Box<Ty>, Box<Ty>),

    /// Sum type: `a + b`.
    Sum(Box<Ty>, Box<Ty>),

    /// List type: `List(a)`.
    List(Box<Ty>),
}

/// Primitive (built-in) types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimTy {
    /// The empty type, bottom of the lattice
    Void,
    /// The one-value type
    Unit,
    /// Booleans
    Bool,
    /// Natural numbers `N`
    Nat,
    /// Integers `Z`
    Int,
    /// Non-negative rationals `Q+`
    PosRational,
    /// Rationals `Q`
    Rational,
}

impl PrimTy {
    /// Check if this is one of the four tower types.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            PrimTy::Nat | PrimTy::Int | PrimTy::PosRational | PrimTy::Rational
        )
    }
}

impl Ty {
    /// `Void`
    pub const VOID: Ty = Ty::Primitive(PrimTy::Void);
    /// `Unit`
    pub const UNIT: Ty = Ty::Primitive(PrimTy::Unit);
    /// `Bool`
    pub const BOOL: Ty = Ty::Primitive(PrimTy::Bool);
    /// `N`
    pub const NAT: Ty = Ty::Primitive(PrimTy::Nat);
    /// `Z`
    pub const INT: Ty = Ty::Primitive(PrimTy::Int);
    /// `Q+`
    pub const POS_RATIONAL: Ty = Ty::Primitive(PrimTy::PosRational);
    /// `Q`
    pub const RATIONAL: Ty = Ty::Primitive(PrimTy::Rational);

    /// `dom -> cod`
    pub fn arrow(dom: Ty, cod: Ty) -> Ty {
        Ty::Arrow(Box::new(dom), Box::new(cod))
    }

    /// `a * b`
    pub fn pair(a: Ty, b: Ty) -> Ty {
        Ty::Pair(Box::new(a), Box::new(b))
    }

    /// `a + b`
    pub fn sum(a: Ty, b: Ty) -> Ty {
        Ty::Sum(Box::new(a), Box::new(b))
    }

    /// `List(elem)`
    pub fn list(elem: Ty) -> Ty {
        Ty::List(Box::new(elem))
    }

    /// Right-nested product of `tys`: `a * (b * c)`. Empty is `Unit`.
    pub fn tuple(mut tys: Vec<Ty>) -> Ty {
        let Some(mut acc) = tys.pop() else {
            return Ty::UNIT;
        };
        while let Some(ty) = tys.pop() {
            acc = Ty::pair(ty, acc);
        }
        acc
    }

    /// Number of arrows along the codomain spine.
    pub fn arity(&self) -> usize {
        let mut n = 0;
        let mut ty = self;
        while let Ty::Arrow(_, cod) = ty {
            n += 1;
            ty = &**cod;
        }
        n
    }

    /// Element type of a list type.
    pub fn list_elem(&self) -> Option<&Ty> {
        match self {
            Ty::List(elem) => Some(elem),
            _ => None,
        }
    }

    /// Numeric types: `N`, `Z`, `Q+`, `Q`, `Zn`.
    pub fn is_numeric(&self) -> bool {
        match self {
            Ty::Primitive(prim) => prim.is_numeric(),
            Ty::Finite(_) => true,
            _ => false,
        }
    }

    /// Types with division: `Q+`, `Q`.
    pub fn is_fractional(&self) -> bool {
        matches!(self, Ty::Primitive(PrimTy::PosRational | PrimTy::Rational))
    }

    /// Types where subtraction needs no non-negativity proof: `Z`, `Q`, `Zn`.
    pub fn is_subtractive(&self) -> bool {
        matches!(
            self,
            Ty::Primitive(PrimTy::Int | PrimTy::Rational) | Ty::Finite(_)
        )
    }

    /// Types that `enumerate` and `count` accept.
    pub fn is_finite(&self) -> bool {
        match self {
            Ty::Primitive(PrimTy::Void | PrimTy::Unit | PrimTy::Bool) => true,
            Ty::Primitive(_) => false,
            Ty::Finite(_) => true,
            Ty::Arrow(..) => false,
            Ty::Pair(a, b) | Ty::Sum(a, b) => a.is_finite() && b.is_finite(),
            Ty::List(elem) => elem.is_finite(),
        }
    }

    /// Types with decidable equality: anything without a function inside.
    pub fn is_decidable(&self) -> bool {
        self.is_first_order()
    }

    /// Types with a total order: anything without a function inside.
    pub fn is_ordered(&self) -> bool {
        self.is_first_order()
    }

    fn is_first_order(&self) -> bool {
        match self {
            Ty::Primitive(_) | Ty::Finite(_) => true,
            Ty::Arrow(..) => false,
            Ty::Pair(a, b) | Ty::Sum(a, b) => a.is_first_order() && b.is_first_order(),
            Ty::List(elem) => elem.is_first_order(),
        }
    }

    /// `Q -> Z`, `Q+ -> N`, identity elsewhere.
    pub fn integralize(&self) -> Ty {
        match self {
            Ty::Primitive(PrimTy::Rational) => Ty::INT,
            Ty::Primitive(PrimTy::PosRational) => Ty::NAT,
            other => other.clone(),
        }
    }

    /// `Z -> N`, `Q -> Q+`, identity elsewhere.
    pub fn positivize(&self) -> Ty {
        match self {
            Ty::Primitive(PrimTy::Int) => Ty::NAT,
            Ty::Primitive(PrimTy::Rational) => Ty::POS_RATIONAL,
            other => other.clone(),
        }
    }
}
