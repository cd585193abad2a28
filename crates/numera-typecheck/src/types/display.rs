//! Type pretty-printing for error messages.
//!
//! Arrows bind loosest, then sums, then products; all three associate to
//! the right. Parentheses appear only where precedence requires them.

use crate::types::{PrimTy, Ty};
use std::fmt;

const PREC_ARROW: u8 = 0;
const PREC_SUM: u8 = 1;
const PREC_PAIR: u8 = 2;
const PREC_ATOM: u8 = 3;

impl fmt::Display for PrimTy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PrimTy::Void => "Void",
            PrimTy::Unit => "Unit",
            PrimTy::Bool => "Bool",
            PrimTy::Nat => "N",
            PrimTy::Int => "Z",
            PrimTy::PosRational => "Q+",
            PrimTy::Rational => "Q",
        };
        f.write_str(s)
    }
}

impl fmt::Display for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        format_type(self, PREC_ARROW, f)
    }
}

fn precedence(ty: &Ty) -> u8 {
    match ty {
        Ty::Arrow(..) => PREC_ARROW,
        Ty::Sum(..) => PREC_SUM,
        Ty::Pair(..) => PREC_PAIR,
        Ty::Primitive(_) | Ty::Finite(_) | Ty::List(_) => PREC_ATOM,
    }
}

fn format_type(ty: &Ty, min: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let prec = precedence(ty);
    if prec < min {
        f.write_str("(")?;
        format_type(ty, PREC_ARROW, f)?;
        return f.write_str(")");
    }

    match ty {
        Ty::Primitive(prim) => write!(f, "{}", prim),
        Ty::Finite(n) => write!(f, "Z{}", n),
        Ty::List(elem) => {
            f.write_str("List(")?;
            format_type(elem, PREC_ARROW, f)?;
            f.write_str(")")
        }
        Ty::Arrow(l, r) => format_infix(l, " -> ", r, prec, f),
        Ty::Sum(l, r) => format_infix(l, " + ", r, prec, f),
        Ty::Pair(l, r) => format_infix(l, " * ", r, prec, f),
    }
}

fn format_infix(l: &Ty, op: &str, r: &Ty, prec: u8, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    format_type(l, prec + 1, f)?;
    f.write_str(op)?;
    format_type(r, prec, f)
}
