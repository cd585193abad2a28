//! Type inference for terms.
//!
//! `infer` discovers a term's type from the term alone. Terms whose type
//! depends on context they do not carry (unannotated lambdas, injections,
//! empty lists) fail with `CannotInfer`; an ascription switches them into
//! checking mode.

use crate::check::expr::{check, check_bindings, check_guards, check_quals};
use crate::check::ty::ast_to_ty;
use crate::error::{Result, TypeError};
use crate::infer::Context;
use crate::typed::{Typed, TypedArg, TypedKind};
use crate::types::{PrimTy, Ty, is_subtype, lub, lub_all};
use numera_syntax::ast::{Arg, Branch, Ellipsis, Link, Op, Term, TyOp, UOp};

/// Infer the type of a term.
pub fn infer(ctx: &Context<'_>, term: &Term) -> Result<Typed> {
    crate::with_stack(|| infer_term(ctx, term))
}

fn infer_term(ctx: &Context<'_>, term: &Term) -> Result<Typed> {
    match term {
        Term::Var(x) => Ok(Typed::new(TypedKind::Var(*x), ctx.lookup(*x)?)),
        Term::Unit => Ok(Typed::new(TypedKind::Unit, Ty::UNIT)),
        Term::Bool(b) => Ok(Typed::new(TypedKind::Bool(*b), Ty::BOOL)),
        Term::Nat(n) => Ok(Typed::new(TypedKind::Nat(*n), Ty::NAT)),
        Term::Rational(q) => Ok(Typed::new(TypedKind::Rational(*q), Ty::POS_RATIONAL)),

        Term::Lambda(args, body) => infer_lambda(ctx, args, body),

        Term::App(f, x) => {
            let f = infer(ctx, f)?;
            let (dom, cod) = match &f.ty {
                Ty::Arrow(dom, cod) => ((**dom).clone(), (**cod).clone()),
                other => return Err(TypeError::NotAFunction { ty: other.clone() }),
            };
            let x = check(ctx, x, &dom)?;
            Ok(Typed::new(TypedKind::App(Box::new(f), Box::new(x)), cod))
        }

        Term::Tuple(ts) => {
            let ts = ts.iter().map(|t| infer(ctx, t)).collect::<Result<Vec<_>>>()?;
            let ty = Ty::tuple(ts.iter().map(|t| t.ty.clone()).collect());
            Ok(Typed::new(TypedKind::Tuple(ts), ty))
        }

        Term::Case(branches) => infer_case(ctx, branches),

        Term::Let(bindings, body) => {
            let (inner, bindings) = check_bindings(ctx, bindings)?;
            let body = infer(&inner, body)?;
            let ty = body.ty.clone();
            Ok(Typed::new(TypedKind::Let(bindings, Box::new(body)), ty))
        }

        Term::Unary(op, t) => infer_unary(ctx, *op, t),
        Term::Binary(op, l, r) => infer_binary(ctx, *op, l, r),
        Term::Chain(first, links) => infer_chain(ctx, first, links),

        Term::List(ts, ellipsis) if !ts.is_empty() => infer_list(ctx, ts, ellipsis.as_ref()),

        Term::ListComp(body, quals) => {
            let (inner, quals) = check_quals(ctx, quals)?;
            let body = infer(&inner, body)?;
            let ty = Ty::list(body.ty.clone());
            Ok(Typed::new(TypedKind::ListComp(Box::new(body), quals), ty))
        }

        Term::Ascribe(t, ann) => {
            let ty = ast_to_ty(ann)?;
            let t = check(ctx, t, &ty)?;
            Ok(Typed::new(TypedKind::Ascribe(Box::new(t), ty.clone()), ty))
        }

        Term::TyOp(op, ann) => {
            let ty = ast_to_ty(ann)?;
            if !ty.is_finite() {
                return Err(TypeError::InfiniteType { ty });
            }
            let result = match op {
                TyOp::Enumerate => Ty::list(ty.clone()),
                TyOp::Count => Ty::NAT,
            };
            Ok(Typed::new(TypedKind::TyOp(*op, ty), result))
        }

        Term::Inj(..) | Term::List(..) => Err(TypeError::CannotInfer {
            what: term.describe(),
        }),
    }
}

fn infer_lambda(ctx: &Context<'_>, args: &[Arg], body: &Term) -> Result<Typed> {
    let mut inner = ctx.clone();
    let mut typed_args = Vec::with_capacity(args.len());
    for arg in args {
        let Some(ann) = &arg.ann else {
            return Err(TypeError::CannotInfer { what: "lambda with an unannotated argument" });
        };
        let ty = ast_to_ty(ann)?;
        inner = inner.bind(arg.name, ty.clone());
        typed_args.push(TypedArg {
            name: arg.name,
            ann: Some(ty.clone()),
            ty,
        });
    }

    let body = infer(&inner, body)?;
    let ty = typed_args
        .iter()
        .rev()
        .fold(body.ty.clone(), |cod, arg| Ty::arrow(arg.ty.clone(), cod));
    Ok(Typed::new(TypedKind::Lambda(typed_args, Box::new(body)), ty))
}

fn infer_case(ctx: &Context<'_>, branches: &[Branch]) -> Result<Typed> {
    if branches.is_empty() {
        return Err(TypeError::EmptyCase);
    }

    let mut typed = Vec::with_capacity(branches.len());
    let mut ty = Ty::VOID;
    for branch in branches {
        let (inner, guards) = check_guards(ctx, &branch.guards)?;
        let body = infer(&inner, &branch.body)?;
        ty = lub(&ty, &body.ty)?;
        typed.push(Branch { guards, body });
    }

    // Bodies are widened to the join so every branch has the case's type.
    let typed = typed
        .into_iter()
        .map(|b| Branch {
            guards: b.guards,
            body: b.body.subsume(ty.clone()),
        })
        .collect();
    Ok(Typed::new(TypedKind::Case(typed), ty))
}

/// `ts` is non-empty; an empty literal has no element type to infer.
fn infer_list(ctx: &Context<'_>, ts: &[Term], ellipsis: Option<&Ellipsis>) -> Result<Typed> {
    let ts = ts.iter().map(|t| infer(ctx, t)).collect::<Result<Vec<_>>>()?;
    let ellipsis = match ellipsis {
        None => None,
        Some(Ellipsis::Forever) => Some(Ellipsis::Forever),
        Some(Ellipsis::Until(bound)) => Some(Ellipsis::Until(Box::new(infer(ctx, bound)?))),
    };

    let bound = match &ellipsis {
        Some(Ellipsis::Until(bound)) => Some(&bound.ty),
        _ => None,
    };
    let elem = lub_all(ts.iter().map(|t| &t.ty).chain(bound))?;

    let ts = ts.into_iter().map(|t| t.subsume(elem.clone())).collect();
    let ellipsis = ellipsis.map(|e| match e {
        Ellipsis::Forever => Ellipsis::Forever,
        Ellipsis::Until(bound) => Ellipsis::Until(Box::new(bound.subsume(elem.clone()))),
    });
    Ok(Typed::new(TypedKind::List(ts, ellipsis), Ty::list(elem)))
}

fn infer_chain(ctx: &Context<'_>, first: &Term, links: &[Link]) -> Result<Typed> {
    let first = infer(ctx, first)?;
    let mut prev = first.ty.clone();
    let mut typed = Vec::with_capacity(links.len());
    for link in links {
        let term = infer(ctx, &link.term)?;
        relate(link.op, &prev, &term.ty)?;
        prev = term.ty.clone();
        typed.push(Link { op: link.op, term });
    }
    Ok(Typed::new(TypedKind::Chain(Box::new(first), typed), Ty::BOOL))
}

/// Validate a relation between operands of the given types.
fn relate(op: Op, l: &Ty, r: &Ty) -> Result<()> {
    match op {
        Op::Eq | Op::Neq => {
            let ty = lub(l, r)?;
            if !ty.is_decidable() {
                return Err(TypeError::NotDecidable { ty });
            }
            Ok(())
        }
        Op::Lt | Op::Gt | Op::Leq | Op::Geq => {
            let ty = lub(l, r)?;
            if !ty.is_ordered() {
                return Err(TypeError::NotOrdered { ty });
            }
            Ok(())
        }
        Op::Divides => lub(l, r).map(|_| ()),
        other => Err(TypeError::NotARelation { op: other.symbol() }),
    }
}

fn require_numeric(ty: &Ty) -> Result<()> {
    if ty.is_numeric() {
        Ok(())
    } else {
        Err(TypeError::NotNumeric { ty: ty.clone() })
    }
}

fn infer_unary(ctx: &Context<'_>, op: UOp, t: &Term) -> Result<Typed> {
    let (t, ty) = match op {
        UOp::Not => (check(ctx, t, &Ty::BOOL)?, Ty::BOOL),
        UOp::Fact | UOp::Sqrt | UOp::Lg => (check(ctx, t, &Ty::NAT)?, Ty::NAT),
        UOp::Neg => {
            let t = infer(ctx, t)?;
            require_numeric(&t.ty)?;
            let ty = match lub(&t.ty, &Ty::INT) {
                Ok(ty) => ty,
                Err(_) if t.ty.is_subtractive() => t.ty.clone(),
                Err(_) => return Err(TypeError::NotSubtractive { ty: t.ty }),
            };
            (t, ty)
        }
        UOp::Floor | UOp::Ceil => {
            let t = infer(ctx, t)?;
            require_numeric(&t.ty)?;
            let ty = t.ty.integralize();
            (t, ty)
        }
        UOp::Abs => {
            let t = infer(ctx, t)?;
            require_numeric(&t.ty)?;
            let ty = t.ty.positivize();
            (t, ty)
        }
    };
    Ok(Typed::new(TypedKind::Unary(op, Box::new(t)), ty))
}

/// Infer both operands and join them, widening each to the join.
fn infer_joined(ctx: &Context<'_>, l: &Term, r: &Term) -> Result<(Typed, Typed, Ty)> {
    let l = infer(ctx, l)?;
    let r = infer(ctx, r)?;
    let ty = lub(&l.ty, &r.ty)?;
    Ok((l.subsume(ty.clone()), r.subsume(ty.clone()), ty))
}

/// Operands of a binary node, each already at the type its parent uses.
type Operands = (Typed, Typed, Ty);

/// Infer the type of `l op r`.
pub(crate) fn infer_binary(ctx: &Context<'_>, op: Op, l: &Term, r: &Term) -> Result<Typed> {
    let (l, r, ty) = match op {
        Op::Add | Op::Mul => infer_additive(ctx, l, r)?,
        Op::Sub => infer_sub(ctx, l, r)?,
        Op::Div => infer_div(ctx, l, r)?,
        Op::IDiv => infer_idiv(ctx, l, r)?,
        Op::Exp => infer_exp(ctx, l, r)?,
        Op::Mod => infer_mod(ctx, l, r)?,
        Op::Choose => infer_choose(ctx, l, r)?,
        Op::Cons => infer_cons(ctx, l, r)?,
        Op::Eq | Op::Neq | Op::Lt | Op::Gt | Op::Leq | Op::Geq | Op::Divides => {
            infer_relation(ctx, op, l, r)?
        }
        Op::And | Op::Or | Op::Implies => {
            (check(ctx, l, &Ty::BOOL)?, check(ctx, r, &Ty::BOOL)?, Ty::BOOL)
        }
    };
    Ok(Typed::new(TypedKind::Binary(op, Box::new(l), Box::new(r)), ty))
}

fn infer_additive(ctx: &Context<'_>, l: &Term, r: &Term) -> Result<Operands> {
    let l = infer(ctx, l)?;
    let r = infer(ctx, r)?;
    require_numeric(&l.ty)?;
    require_numeric(&r.ty)?;
    let ty = lub(&l.ty, &r.ty)?;
    Ok((l.subsume(ty.clone()), r.subsume(ty.clone()), ty))
}

/// Subtraction promotes to `Z` where it can.
fn infer_sub(ctx: &Context<'_>, l: &Term, r: &Term) -> Result<Operands> {
    let (l, r, joined) = infer_joined(ctx, l, r)?;
    require_numeric(&joined)?;
    let ty = match lub(&joined, &Ty::INT) {
        Ok(ty) => ty,
        Err(_) if joined.is_subtractive() => joined,
        Err(_) => return Err(TypeError::NotSubtractive { ty: joined }),
    };
    Ok((l.subsume(ty.clone()), r.subsume(ty.clone()), ty))
}

/// Division promotes to `Q+` where it can.
fn infer_div(ctx: &Context<'_>, l: &Term, r: &Term) -> Result<Operands> {
    let (l, r, joined) = infer_joined(ctx, l, r)?;
    require_numeric(&joined)?;
    let ty = match lub(&joined, &Ty::POS_RATIONAL) {
        Ok(ty) => ty,
        Err(_) if joined.is_fractional() => joined,
        Err(_) => return Err(TypeError::NotFractional { ty: joined }),
    };
    Ok((l.subsume(ty.clone()), r.subsume(ty.clone()), ty))
}

fn infer_idiv(ctx: &Context<'_>, l: &Term, r: &Term) -> Result<Operands> {
    let (l, r, joined) = infer_joined(ctx, l, r)?;
    require_numeric(&joined)?;
    let ty = joined.integralize();
    Ok((l, r, ty))
}

fn infer_exp(ctx: &Context<'_>, l: &Term, r: &Term) -> Result<Operands> {
    let base = infer(ctx, l)?;
    let exp = infer(ctx, r)?;
    require_numeric(&base.ty)?;
    require_numeric(&exp.ty)?;
    let ty = exp_result(&base.ty, &exp.ty)?;
    Ok((base, exp, ty))
}

fn infer_mod(ctx: &Context<'_>, l: &Term, r: &Term) -> Result<Operands> {
    let (l, r, ty) = infer_joined(ctx, l, r)?;
    if !is_subtype(&ty, &Ty::INT) {
        return Err(TypeError::NotIntegral { ty });
    }
    Ok((l, r, ty))
}

/// `n choose k` is binomial for `k : N` and multinomial for `k : List(N)`.
fn infer_choose(ctx: &Context<'_>, l: &Term, r: &Term) -> Result<Operands> {
    let n = check(ctx, l, &Ty::NAT)?;
    let k = match check(ctx, r, &Ty::NAT) {
        Ok(k) => k,
        Err(_) => check(ctx, r, &Ty::list(Ty::NAT))?,
    };
    Ok((n, k, Ty::NAT))
}

fn infer_cons(ctx: &Context<'_>, l: &Term, r: &Term) -> Result<Operands> {
    let head = infer(ctx, l)?;
    if matches!(r, Term::List(ts, None) if ts.is_empty()) {
        let ty = Ty::list(head.ty.clone());
        let tail = Typed::new(TypedKind::List(Vec::new(), None), ty.clone());
        return Ok((head, tail, ty));
    }

    let tail = infer(ctx, r)?;
    let elem = match tail.ty.list_elem() {
        Some(elem) => lub(&head.ty, elem)?,
        None => return Err(TypeError::NotAList { ty: tail.ty.clone() }),
    };
    let ty = Ty::list(elem.clone());
    Ok((head.subsume(elem), tail.subsume(ty.clone()), ty))
}

fn infer_relation(ctx: &Context<'_>, op: Op, l: &Term, r: &Term) -> Result<Operands> {
    let l = infer(ctx, l)?;
    let r = infer(ctx, r)?;
    relate(op, &l.ty, &r.ty)?;
    Ok((l, r, Ty::BOOL))
}

/// Result type of `base ^ exp`.
fn exp_result(base: &Ty, exp: &Ty) -> Result<Ty> {
    match exp {
        Ty::Primitive(PrimTy::Nat) => Ok(base.clone()),
        Ty::Primitive(PrimTy::Int) => match lub(base, &Ty::POS_RATIONAL) {
            Ok(ty) => Ok(ty),
            Err(_) if base.is_fractional() => Ok(base.clone()),
            Err(_) => Err(TypeError::NotFractional { ty: base.clone() }),
        },
        Ty::Finite(_) => Err(TypeError::NotAnExponent { ty: exp.clone() }),
        _ => Err(TypeError::RationalExponent { ty: exp.clone() }),
    }
}
