//! Checking terms against a type.
//!
//! `check` has a dedicated rule wherever the checking type tells it
//! something the term does not: lambdas, tuples, injections, lists, and the
//! arithmetic operators, which are checked at the target type directly so
//! that e.g. `x + 1` can be checked at `Z7`. Every other term is inferred
//! and then subsumed: its inferred type must be a subtype of the target.
//!
//! The telescope helpers for `let` bindings, case guards, and comprehension
//! qualifiers also live here; inference shares them.

use crate::check::pat::check_pattern;
use crate::check::ty::ast_to_ty;
use crate::context::Bindings;
use crate::error::{Result, TypeError};
use crate::infer::Context;
use crate::infer::expr::{infer, infer_binary};
use crate::typed::{Typed, TypedArg, TypedBinding, TypedKind};
use crate::types::{Ty, is_subtype, lub};
use numera_log::trace;
use numera_syntax::ast::{Arg, Binding, Branch, Ellipsis, Guard, Op, Qual, Side, Term, UOp};

/// Check a term against a type.
///
/// On success the returned node's type is exactly `ty`.
pub fn check(ctx: &Context<'_>, term: &Term, ty: &Ty) -> Result<Typed> {
    crate::with_stack(|| check_term(ctx, term, ty))
}

fn check_term(ctx: &Context<'_>, term: &Term, ty: &Ty) -> Result<Typed> {
    match term {
        Term::Tuple(ts) if !ts.is_empty() => {
            let typed = check_tuple(ctx, ts, ty, ty)?;
            Ok(Typed::new(TypedKind::Tuple(typed), ty.clone()))
        }

        Term::Lambda(args, body) => check_lambda(ctx, args, body, ty),

        Term::Inj(side, t) => {
            let Ty::Sum(a, b) = ty else {
                return Err(TypeError::NotASum { ty: ty.clone() });
            };
            let t = match side {
                Side::Left => check(ctx, t, a)?,
                Side::Right => check(ctx, t, b)?,
            };
            Ok(Typed::new(TypedKind::Inj(*side, Box::new(t)), ty.clone()))
        }

        Term::List(ts, ellipsis) => {
            let elem = list_elem(ty)?;
            let ts = ts.iter().map(|t| check(ctx, t, elem)).collect::<Result<Vec<_>>>()?;
            let ellipsis = match ellipsis {
                None => None,
                Some(Ellipsis::Forever) => Some(Ellipsis::Forever),
                Some(Ellipsis::Until(bound)) => {
                    Some(Ellipsis::Until(Box::new(check(ctx, bound, elem)?)))
                }
            };
            Ok(Typed::new(TypedKind::List(ts, ellipsis), ty.clone()))
        }

        Term::ListComp(body, quals) => {
            let elem = list_elem(ty)?;
            let (inner, quals) = check_quals(ctx, quals)?;
            let body = check(&inner, body, elem)?;
            Ok(Typed::new(TypedKind::ListComp(Box::new(body), quals), ty.clone()))
        }

        Term::Let(bindings, body) => {
            let (inner, bindings) = check_bindings(ctx, bindings)?;
            let body = check(&inner, body, ty)?;
            Ok(Typed::new(TypedKind::Let(bindings, Box::new(body)), ty.clone()))
        }

        Term::Case(branches) => {
            if branches.is_empty() {
                return Err(TypeError::EmptyCase);
            }
            let branches = branches
                .iter()
                .map(|branch| -> Result<Branch<Typed>> {
                    let (inner, guards) = check_guards(ctx, &branch.guards)?;
                    let body = check(&inner, &branch.body, ty)?;
                    Ok(Branch { guards, body })
                })
                .collect::<Result<Vec<_>>>()?;
            Ok(Typed::new(TypedKind::Case(branches), ty.clone()))
        }

        Term::Binary(op, l, r) => check_binary(ctx, *op, l, r, ty),

        Term::Unary(UOp::Neg, t) => {
            if !ty.is_subtractive() {
                return Err(TypeError::NotSubtractive { ty: ty.clone() });
            }
            let t = check(ctx, t, ty)?;
            Ok(Typed::new(TypedKind::Unary(UOp::Neg, Box::new(t)), ty.clone()))
        }

        // No range check: the literal is reduced modulo n at run time.
        Term::Nat(n) if matches!(ty, Ty::Finite(_)) => Ok(Typed::new(TypedKind::Nat(*n), ty.clone())),

        _ => subsume(ctx, term, ty),
    }
}

/// Infer, then widen the result to `ty`.
fn subsume(ctx: &Context<'_>, term: &Term, ty: &Ty) -> Result<Typed> {
    let typed = infer(ctx, term)?;
    if !is_subtype(&typed.ty, ty) {
        return Err(TypeError::TypeMismatch {
            expected: ty.clone(),
            found: typed.ty,
        });
    }
    if typed.ty != *ty {
        trace!("subsuming {} at {} into {}", term.describe(), typed.ty, ty);
    }
    Ok(typed.subsume(ty.clone()))
}

fn list_elem(ty: &Ty) -> Result<&Ty> {
    ty.list_elem().ok_or_else(|| TypeError::NotAList { ty: ty.clone() })
}

/// `(t1, ..., tn)` against `a1 * (a2 * ... an)`.
fn check_tuple(ctx: &Context<'_>, ts: &[Term], ty: &Ty, whole: &Ty) -> Result<Vec<Typed>> {
    match (ts, ty) {
        ([t], _) => Ok(vec![check(ctx, t, ty)?]),
        ([t, rest @ ..], Ty::Pair(a, b)) => {
            let mut out = Vec::with_capacity(ts.len());
            out.push(check(ctx, t, a)?);
            out.extend(check_tuple(ctx, rest, b, whole)?);
            Ok(out)
        }
        _ => Err(TypeError::NotATuple {
            ty: whole.clone(),
            arity: ts.len(),
        }),
    }
}

fn check_lambda(ctx: &Context<'_>, args: &[Arg], body: &Term, ty: &Ty) -> Result<Typed> {
    let mut inner = ctx.clone();
    let mut residual = ty.clone();
    let mut typed_args = Vec::with_capacity(args.len());

    for arg in args {
        let (dom, cod) = match residual {
            Ty::Arrow(dom, cod) => (*dom, *cod),
            other => return Err(TypeError::NotAFunction { ty: other }),
        };
        let ann = arg.ann.as_ref().map(ast_to_ty).transpose()?;
        let arg_ty = match &ann {
            // The argument may accept more than the function type promises.
            Some(ann) if is_subtype(&dom, ann) => ann.clone(),
            Some(ann) => {
                return Err(TypeError::TypeMismatch {
                    expected: dom,
                    found: ann.clone(),
                });
            }
            None => dom,
        };
        inner = inner.bind(arg.name, arg_ty.clone());
        typed_args.push(TypedArg {
            name: arg.name,
            ann,
            ty: arg_ty,
        });
        residual = cod;
    }

    let body = check(&inner, body, &residual)?;
    Ok(Typed::new(TypedKind::Lambda(typed_args, Box::new(body)), ty.clone()))
}

fn check_binary(ctx: &Context<'_>, op: Op, l: &Term, r: &Term, ty: &Ty) -> Result<Typed> {
    let (l, r) = match op {
        Op::Add | Op::Mul | Op::Sub if ty.is_numeric() => (check(ctx, l, ty)?, check(ctx, r, ty)?),
        Op::Sub => return Err(TypeError::NotNumeric { ty: ty.clone() }),

        Op::Div => {
            if !ty.is_fractional() {
                return Err(TypeError::NotFractional { ty: ty.clone() });
            }
            (check(ctx, l, ty)?, check(ctx, r, ty)?)
        }

        Op::IDiv => {
            if !ty.is_numeric() {
                return Err(TypeError::NotNumeric { ty: ty.clone() });
            }
            let operand = lub(ty, &Ty::POS_RATIONAL).unwrap_or_else(|_| ty.clone());
            (check(ctx, l, &operand)?, check(ctx, r, &operand)?)
        }

        Op::Exp => {
            if !ty.is_numeric() {
                return Err(TypeError::NotNumeric { ty: ty.clone() });
            }
            let exp = if ty.is_fractional() { Ty::INT } else { Ty::NAT };
            (check(ctx, l, ty)?, check(ctx, r, &exp)?)
        }

        Op::Cons => {
            let elem = list_elem(ty)?;
            (check(ctx, l, elem)?, check(ctx, r, ty)?)
        }

        _ => return subsume_binary(ctx, op, l, r, ty),
    };
    Ok(Typed::new(TypedKind::Binary(op, Box::new(l), Box::new(r)), ty.clone()))
}

fn subsume_binary(ctx: &Context<'_>, op: Op, l: &Term, r: &Term, ty: &Ty) -> Result<Typed> {
    let typed = infer_binary(ctx, op, l, r)?;
    if !is_subtype(&typed.ty, ty) {
        return Err(TypeError::TypeMismatch {
            expected: ty.clone(),
            found: typed.ty,
        });
    }
    if typed.ty != *ty {
        trace!("subsuming {} at {} into {}", op.symbol(), typed.ty, ty);
    }
    Ok(typed.subsume(ty.clone()))
}

/// Check a `let` telescope. Each binding is inferred, or checked at its
/// annotation, in the context of the bindings before it.
pub(crate) fn check_bindings<'c>(
    ctx: &Context<'c>,
    bindings: &[Binding],
) -> Result<(Context<'c>, Vec<TypedBinding>)> {
    ctx.telescope(bindings, |ctx, binding| {
        let (ann, value) = match &binding.ann {
            Some(ann) => {
                let ann = ast_to_ty(ann)?;
                let value = check(ctx, &binding.value, &ann)?;
                (Some(ann), value)
            }
            None => (None, infer(ctx, &binding.value)?),
        };
        let mut scope = Bindings::with_capacity(1);
        scope.insert(binding.name, value.ty.clone());
        Ok((
            TypedBinding {
                name: binding.name,
                ann,
                value,
            },
            scope,
        ))
    })
}

/// Check a case branch's guards left to right. `when t is p` infers `t` and
/// brings the pattern's variables into scope for the remaining guards.
pub(crate) fn check_guards<'c>(
    ctx: &Context<'c>,
    guards: &[Guard],
) -> Result<(Context<'c>, Vec<Guard<Typed>>)> {
    ctx.telescope(guards, |ctx, guard| match guard {
        Guard::If(t) => Ok((Guard::If(check(ctx, t, &Ty::BOOL)?), Default::default())),
        Guard::When(t, pat) => {
            let t = infer(ctx, t)?;
            let bindings = check_pattern(ctx, pat, &t.ty)?;
            Ok((Guard::When(t, pat.clone()), bindings))
        }
    })
}

/// Check list comprehension qualifiers left to right. `x in t` binds `x` at
/// the element type of `t`.
pub(crate) fn check_quals<'c>(
    ctx: &Context<'c>,
    quals: &[Qual],
) -> Result<(Context<'c>, Vec<Qual<Typed>>)> {
    ctx.telescope(quals, |ctx, qual| match qual {
        Qual::Bind(x, t) => {
            let t = infer(ctx, t)?;
            let elem = list_elem(&t.ty)?.clone();
            let mut scope = Bindings::with_capacity(1);
            scope.insert(*x, elem);
            Ok((Qual::Bind(*x, t), scope))
        }
        Qual::Guard(t) => Ok((Qual::Guard(check(ctx, t, &Ty::BOOL)?), Default::default())),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use numera_mem::StringInterner;
    use numera_syntax::ast::{Pattern, Rational, Type};

    fn check_in(interner: &StringInterner, term: &Term, ty: &Ty) -> Result<Typed> {
        check(&Context::new(interner), term, ty)
    }

    #[test]
    fn test_lambda_checks_against_arrow() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");
        let lam = Term::lambda(vec![Arg::bare(x)], Term::binary(Op::Add, Term::Var(x), Term::Nat(1)));

        let typed = check_in(&interner, &lam, &Ty::arrow(Ty::NAT, Ty::NAT)).unwrap();
        assert_eq!(typed.ty, Ty::arrow(Ty::NAT, Ty::NAT));
        match typed.kind {
            TypedKind::Lambda(args, _) => assert_eq!(args[0].ty, Ty::NAT),
            other => panic!("expected lambda, got {other:?}"),
        }
    }

    #[test]
    fn test_lambda_annotation_must_accept_domain() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");

        let wide = Term::lambda(vec![Arg::typed(x, Type::Int)], Term::Bool(true));
        assert!(check_in(&interner, &wide, &Ty::arrow(Ty::NAT, Ty::BOOL)).is_ok());

        let narrow = Term::lambda(vec![Arg::typed(x, Type::Nat)], Term::Bool(true));
        assert_eq!(
            check_in(&interner, &narrow, &Ty::arrow(Ty::INT, Ty::BOOL)).map(|t| t.ty),
            Err(TypeError::TypeMismatch { expected: Ty::INT, found: Ty::NAT })
        );
    }

    #[test]
    fn test_lambda_with_too_many_arguments() {
        let mut interner = StringInterner::new();
        let (x, y) = (interner.intern("x"), interner.intern("y"));
        let lam = Term::lambda(vec![Arg::bare(x), Arg::bare(y)], Term::Var(x));
        assert_eq!(
            check_in(&interner, &lam, &Ty::arrow(Ty::NAT, Ty::NAT)).map(|t| t.ty),
            Err(TypeError::NotAFunction { ty: Ty::NAT })
        );
    }

    #[test]
    fn test_addition_at_modular_type() {
        let interner = StringInterner::new();
        let t = Term::binary(Op::Add, Term::Nat(4), Term::Nat(5));
        let typed = check_in(&interner, &t, &Ty::Finite(7)).unwrap();
        assert_eq!(typed.ty, Ty::Finite(7));
        match typed.kind {
            TypedKind::Binary(Op::Add, l, r) => {
                assert_eq!(l.ty, Ty::Finite(7));
                assert_eq!(r.ty, Ty::Finite(7));
            }
            other => panic!("expected addition, got {other:?}"),
        }
    }

    #[test]
    fn test_subtraction_allowed_at_nat() {
        let interner = StringInterner::new();
        let t = Term::binary(Op::Sub, Term::Nat(5), Term::Nat(3));
        assert!(check_in(&interner, &t, &Ty::NAT).is_ok());
    }

    #[test]
    fn test_negation_rejected_at_nat() {
        let interner = StringInterner::new();
        let t = Term::unary(UOp::Neg, Term::Nat(3));
        assert_eq!(
            check_in(&interner, &t, &Ty::NAT).map(|t| t.ty),
            Err(TypeError::NotSubtractive { ty: Ty::NAT })
        );
        assert!(check_in(&interner, &t, &Ty::Finite(5)).is_ok());
    }

    #[test]
    fn test_division_needs_fractional_type() {
        let interner = StringInterner::new();
        let t = Term::binary(Op::Div, Term::Nat(1), Term::Nat(2));
        assert!(check_in(&interner, &t, &Ty::RATIONAL).is_ok());
        assert_eq!(
            check_in(&interner, &t, &Ty::INT).map(|t| t.ty),
            Err(TypeError::NotFractional { ty: Ty::INT })
        );
    }

    #[test]
    fn test_integer_division_operands() {
        let interner = StringInterner::new();
        let t = Term::binary(Op::IDiv, Term::Rational(Rational::new(7, 2)), Term::Nat(2));
        let typed = check_in(&interner, &t, &Ty::NAT).unwrap();
        match typed.kind {
            TypedKind::Binary(Op::IDiv, l, _) => assert_eq!(l.ty, Ty::POS_RATIONAL),
            other => panic!("expected integer division, got {other:?}"),
        }

        let z5 = Term::binary(Op::IDiv, Term::Nat(4), Term::Nat(2));
        assert!(check_in(&interner, &z5, &Ty::Finite(5)).is_ok());
    }

    #[test]
    fn test_exponent_at_fractional_type() {
        let interner = StringInterner::new();
        let neg = Term::unary(UOp::Neg, Term::Nat(2));
        let t = Term::binary(Op::Exp, Term::Nat(2), neg);
        assert!(check_in(&interner, &t, &Ty::POS_RATIONAL).is_ok());
        assert!(check_in(&interner, &t, &Ty::INT).is_err());
    }

    #[test]
    fn test_tuple_against_pairs() {
        let interner = StringInterner::new();
        let t = Term::Tuple(vec![Term::Nat(1), Term::Bool(true), Term::Unit]);
        let ty = Ty::pair(Ty::INT, Ty::pair(Ty::BOOL, Ty::UNIT));
        assert_eq!(check_in(&interner, &t, &ty).map(|t| t.ty), Ok(ty));

        assert_eq!(
            check_in(&interner, &t, &Ty::pair(Ty::INT, Ty::BOOL)).map(|t| t.ty),
            Err(TypeError::NotATuple { ty: Ty::pair(Ty::INT, Ty::BOOL), arity: 2 })
        );
    }

    #[test]
    fn test_injection() {
        let interner = StringInterner::new();
        let ty = Ty::sum(Ty::BOOL, Ty::INT);
        let t = Term::inj(Side::Right, Term::Nat(3));
        assert!(check_in(&interner, &t, &ty).is_ok());
        assert_eq!(
            check_in(&interner, &t, &Ty::INT).map(|t| t.ty),
            Err(TypeError::NotASum { ty: Ty::INT })
        );
        let left = Term::inj(Side::Left, Term::Nat(3));
        assert!(check_in(&interner, &left, &ty).is_err());
    }

    #[test]
    fn test_lists() {
        let interner = StringInterner::new();
        assert!(check_in(&interner, &Term::List(vec![], None), &Ty::list(Ty::BOOL)).is_ok());

        let xs = Term::List(vec![Term::Nat(1)], Some(Ellipsis::Until(Box::new(Term::Nat(4)))));
        assert!(check_in(&interner, &xs, &Ty::list(Ty::Finite(5))).is_ok());
        assert_eq!(
            check_in(&interner, &xs, &Ty::NAT).map(|t| t.ty),
            Err(TypeError::NotAList { ty: Ty::NAT })
        );

        let cons = Term::binary(Op::Cons, Term::Nat(1), Term::List(vec![], None));
        assert!(check_in(&interner, &cons, &Ty::list(Ty::RATIONAL)).is_ok());
    }

    #[test]
    fn test_empty_case() {
        let interner = StringInterner::new();
        for ty in [Ty::NAT, Ty::VOID, Ty::arrow(Ty::BOOL, Ty::BOOL)] {
            assert_eq!(
                check_in(&interner, &Term::Case(vec![]), &ty).map(|t| t.ty),
                Err(TypeError::EmptyCase)
            );
        }
    }

    #[test]
    fn test_case_guards_scope_over_body() {
        let mut interner = StringInterner::new();
        let (p, x) = (interner.intern("p"), interner.intern("x"));
        let ctx = Context::new(&interner).bind(p, Ty::sum(Ty::NAT, Ty::UNIT));

        let case = Term::Case(vec![
            Branch {
                guards: vec![Guard::When(Term::Var(p), Pattern::inj(Side::Left, Pattern::Var(x)))],
                body: Term::Var(x),
            },
            Branch { guards: vec![], body: Term::Nat(0) },
        ]);
        assert!(check(&ctx, &case, &Ty::INT).is_ok());

        // `x` is not visible in a sibling branch.
        let leak = Term::Case(vec![
            Branch {
                guards: vec![Guard::When(Term::Var(p), Pattern::inj(Side::Left, Pattern::Var(x)))],
                body: Term::Nat(1),
            },
            Branch { guards: vec![], body: Term::Var(x) },
        ]);
        assert_eq!(
            check(&ctx, &leak, &Ty::INT).map(|t| t.ty),
            Err(TypeError::UnboundVariable { name: "x".to_string() })
        );
    }

    #[test]
    fn test_subsumption_node() {
        let interner = StringInterner::new();
        let typed = check_in(&interner, &Term::Bool(true), &Ty::BOOL).unwrap();
        assert_eq!(typed.kind, TypedKind::Bool(true));

        let typed = check_in(&interner, &Term::Rational(Rational::new(1, 2)), &Ty::RATIONAL).unwrap();
        assert!(matches!(typed.kind, TypedKind::Sub(_)));

        assert_eq!(
            check_in(&interner, &Term::Bool(true), &Ty::NAT).map(|t| t.ty),
            Err(TypeError::TypeMismatch { expected: Ty::NAT, found: Ty::BOOL })
        );
    }

    #[test]
    fn test_literal_at_modular_type() {
        let interner = StringInterner::new();
        let typed = check_in(&interner, &Term::Nat(12), &Ty::Finite(5)).unwrap();
        assert_eq!(typed, Typed::new(TypedKind::Nat(12), Ty::Finite(5)));
    }

    #[test]
    fn test_comprehension_checked_at_list() {
        let mut interner = StringInterner::new();
        let x = interner.intern("x");
        let t = Term::list_comp(
            Term::binary(Op::Mul, Term::Var(x), Term::Var(x)),
            vec![Qual::Bind(x, Term::List(vec![Term::Nat(1), Term::Nat(2)], None))],
        );
        assert!(check_in(&interner, &t, &Ty::list(Ty::INT)).is_ok());
        assert_eq!(
            check_in(&interner, &t, &Ty::INT).map(|t| t.ty),
            Err(TypeError::NotAList { ty: Ty::INT })
        );
    }
}
