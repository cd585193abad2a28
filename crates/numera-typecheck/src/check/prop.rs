//! Property checking.

use crate::check::expr::check;
use crate::check::ty::ast_to_ty;
use crate::context::Bindings;
use crate::error::Result;
use crate::infer::Context;
use crate::typed::TypedProperty;
use crate::types::Ty;
use numera_syntax::ast::Property;

/// Check `forall x1 : T1, ..., xn : Tn. body`: the binders scope over the
/// body, which must be a `Bool`. A repeated binder shadows the earlier one.
pub fn check_property(ctx: &Context<'_>, prop: &Property) -> Result<TypedProperty> {
    let binders = prop
        .binders
        .iter()
        .map(|(name, ann)| Ok((*name, ast_to_ty(ann)?)))
        .collect::<Result<Vec<_>>>()?;

    let scope: Bindings = binders.iter().cloned().collect();
    let body = check(&ctx.extend(scope), &prop.body, &Ty::BOOL)?;

    Ok(TypedProperty { binders, body })
}
