//! Pattern type checking.
//!
//! A pattern is checked against the type of the value it will match and
//! yields the variables it binds. Patterns never consult the environment;
//! the context is only needed to name duplicate binders.
//!
//! - Variables bind the whole type; wildcards match anything
//! - `()` and `true`/`false` need `Unit` and `Bool`
//! - Tuple patterns peel nested pairs, the last component taking the rest
//! - `left p`/`right p` need a sum
//! - Natural literals match any supertype of `N` and any `Zn`
//! - `S p` needs `N`
//! - Cons and list patterns need a list

use crate::context::Bindings;
use crate::error::{Result, TypeError};
use crate::infer::Context;
use crate::types::{Ty, is_subtype};
use numera_syntax::ast::{Pattern, Side};

/// Check a pattern against the type of its scrutinee.
pub fn check_pattern(ctx: &Context<'_>, pat: &Pattern, ty: &Ty) -> Result<Bindings> {
    let mismatch = || TypeError::PatternTypeMismatch {
        pattern: pat.describe(),
        ty: ty.clone(),
    };

    match pat {
        Pattern::Var(x) => {
            let mut bindings = Bindings::with_capacity(1);
            bindings.insert(*x, ty.clone());
            Ok(bindings)
        }

        Pattern::Wild => Ok(Bindings::new()),

        Pattern::Unit if *ty == Ty::UNIT => Ok(Bindings::new()),
        Pattern::Bool(_) if *ty == Ty::BOOL => Ok(Bindings::new()),

        Pattern::Tuple(ps) => check_tuple_pattern(ctx, ps, ty, ty),

        Pattern::Inj(side, p) => match ty {
            Ty::Sum(a, b) => match side {
                Side::Left => check_pattern(ctx, p, a),
                Side::Right => check_pattern(ctx, p, b),
            },
            _ => Err(mismatch()),
        },

        Pattern::Nat(_) if is_subtype(&Ty::NAT, ty) || matches!(ty, Ty::Finite(_)) => {
            Ok(Bindings::new())
        }

        Pattern::Succ(p) if *ty == Ty::NAT => check_pattern(ctx, p, ty),

        Pattern::Cons(head, tail) => match ty {
            Ty::List(elem) => {
                let head = check_pattern(ctx, head, elem)?;
                let tail = check_pattern(ctx, tail, ty)?;
                ctx.merge(head, tail)
            }
            _ => Err(mismatch()),
        },

        Pattern::List(ps) => match ty {
            Ty::List(elem) => {
                let mut bindings = Bindings::new();
                for p in ps {
                    let next = check_pattern(ctx, p, elem)?;
                    bindings = ctx.merge(bindings, next)?;
                }
                Ok(bindings)
            }
            _ => Err(mismatch()),
        },

        Pattern::Unit | Pattern::Bool(_) | Pattern::Nat(_) | Pattern::Succ(_) => Err(mismatch()),
    }
}

/// `(p1, ..., pn)` against `a1 * (a2 * ... an)`. `whole` is the type the
/// tuple pattern was matched against, for errors.
fn check_tuple_pattern(ctx: &Context<'_>, ps: &[Pattern], ty: &Ty, whole: &Ty) -> Result<Bindings> {
    match (ps, ty) {
        ([], _) if *ty == Ty::UNIT => Ok(Bindings::new()),
        ([p], _) => check_pattern(ctx, p, ty),
        ([p, rest @ ..], Ty::Pair(a, b)) => {
            let first = check_pattern(ctx, p, a)?;
            let rest = check_tuple_pattern(ctx, rest, b, whole)?;
            ctx.merge(first, rest)
        }
        _ => Err(TypeError::PatternTypeMismatch {
            pattern: "tuple pattern",
            ty: whole.clone(),
        }),
    }
}
