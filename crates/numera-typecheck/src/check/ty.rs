//! Type annotation conversion.
//!
//! Converts source-level type annotations (`ast::Type`) to checker types
//! (`Ty`) and back. The two are isomorphic apart from `Z0`, which names no
//! type and is rejected.

use crate::error::{Result, TypeError};
use crate::types::{PrimTy, Ty};
use numera_syntax::ast::Type;

/// Convert an annotation to a checker type.
pub fn ast_to_ty(ty: &Type) -> Result<Ty> {
    Ok(match ty {
        Type::Void => Ty::VOID,
        Type::Unit => Ty::UNIT,
        Type::Bool => Ty::BOOL,
        Type::Nat => Ty::NAT,
        Type::Int => Ty::INT,
        Type::PosRational => Ty::POS_RATIONAL,
        Type::Rational => Ty::RATIONAL,
        Type::Finite(0) => {
            return Err(TypeError::InvalidType {
                reason: "Z0 has no modulus".to_string(),
            });
        }
        Type::Finite(n) => Ty::Finite(*n),
        Type::Arrow(dom, cod) => Ty::arrow(ast_to_ty(dom)?, ast_to_ty(cod)?),
        Type::Pair(a, b) => Ty::pair(ast_to_ty(a)?, ast_to_ty(b)?),
        Type::Sum(a, b) => Ty::sum(ast_to_ty(a)?, ast_to_ty(b)?),
        Type::List(elem) => Ty::list(ast_to_ty(elem)?),
    })
}

/// Convert a checker type back to an annotation.
pub fn ty_to_ast(ty: &Ty) -> Type {
    match ty {
        Ty::Primitive(prim) => match prim {
            PrimTy::Void => Type::Void,
            PrimTy::Unit => Type::Unit,
            PrimTy::Bool => Type::Bool,
            PrimTy::Nat => Type::Nat,
            PrimTy::Int => Type::Int,
            PrimTy::PosRational => Type::PosRational,
            PrimTy::Rational => Type::Rational,
        },
        Ty::Finite(n) => Type::Finite(*n),
        Ty::Arrow(dom, cod) => Type::arrow(ty_to_ast(dom), ty_to_ast(cod)),
        Ty::Pair(a, b) => Type::pair(ty_to_ast(a), ty_to_ast(b)),
        Ty::Sum(a, b) => Type::sum(ty_to_ast(a), ty_to_ast(b)),
        Ty::List(elem) => Type::list(ty_to_ast(elem)),
    }
}
