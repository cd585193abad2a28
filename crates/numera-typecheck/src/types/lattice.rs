//! Subtyping and joins.
//!
//! The numeric tower is `N <: Z <: Q` and `N <: Q+ <: Q`. `Void` sits below
//! every type. Arrows are contravariant in the domain and covariant in the
//! codomain; pairs, sums and lists are covariant and only relate to the same
//! constructor. Modular types relate only to themselves.

use crate::error::{Result, TypeError};
use crate::types::{PrimTy, Ty};

/// `a <: b`
pub fn is_subtype(a: &Ty, b: &Ty) -> bool {
    if a == b {
        return true;
    }
    match (a, b) {
        (Ty::Primitive(PrimTy::Void), _) => true,
        (Ty::Primitive(p), Ty::Primitive(q)) => numeric_below(*p, *q),
        (Ty::Arrow(d1, c1), Ty::Arrow(d2, c2)) => is_subtype(d2, d1) && is_subtype(c1, c2),
        (Ty::Pair(a1, b1), Ty::Pair(a2, b2)) | (Ty::Sum(a1, b1), Ty::Sum(a2, b2)) => {
            is_subtype(a1, a2) && is_subtype(b1, b2)
        }
        (Ty::List(e1), Ty::List(e2)) => is_subtype(e1, e2),
        _ => false,
    }
}

/// Strict inclusions of the tower.
fn numeric_below(p: PrimTy, q: PrimTy) -> bool {
    use PrimTy::*;
    matches!(
        (p, q),
        (Nat, Int) | (Nat, PosRational) | (Nat, Rational) | (Int, Rational) | (PosRational, Rational)
    )
}

/// Least upper bound of `a` and `b`.
///
/// When one side is a subtype of the other the larger one is returned, so
/// the result is always an upper bound of both. `Q+` and `Z` join at `Q`.
/// Arrows join only when their domains are equal.
pub fn lub(a: &Ty, b: &Ty) -> Result<Ty> {
    if is_subtype(a, b) {
        return Ok(b.clone());
    }
    if is_subtype(b, a) {
        return Ok(a.clone());
    }
    match (a, b) {
        (Ty::Primitive(PrimTy::PosRational), Ty::Primitive(PrimTy::Int))
        | (Ty::Primitive(PrimTy::Int), Ty::Primitive(PrimTy::PosRational)) => Ok(Ty::RATIONAL),
        (Ty::Arrow(d1, c1), Ty::Arrow(d2, c2)) if d1 == d2 => {
            Ok(Ty::arrow((**d1).clone(), lub(c1, c2)?))
        }
        (Ty::Pair(a1, b1), Ty::Pair(a2, b2)) => Ok(Ty::pair(lub(a1, a2)?, lub(b1, b2)?)),
        (Ty::Sum(a1, b1), Ty::Sum(a2, b2)) => Ok(Ty::sum(lub(a1, a2)?, lub(b1, b2)?)),
        (Ty::List(e1), Ty::List(e2)) => Ok(Ty::list(lub(e1, e2)?)),
        _ => Err(TypeError::NoLub {
            left: a.clone(),
            right: b.clone(),
        }),
    }
}

/// Left-to-right fold of [`lub`].
///
/// Callers must pass a non-empty sequence.
pub fn lub_all<'a, I>(tys: I) -> Result<Ty>
where
    I: IntoIterator<Item = &'a Ty>,
{
    let mut iter = tys.into_iter();
    let first = iter.next();
    debug_assert!(first.is_some(), "lub_all of an empty sequence");
    let mut acc = first.cloned().unwrap_or(Ty::VOID);
    for ty in iter {
        acc = lub(&acc, ty)?;
    }
    Ok(acc)
}
