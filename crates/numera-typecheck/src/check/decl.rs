//! Definition and module checking.
//!
//! Module checking runs in three passes:
//!
//! 1. Collect every type declaration, rejecting duplicates, so each
//!    definition may refer to any declared name
//! 2. Check definitions in source order against their declared types,
//!    recording each in the definition table
//! 3. Check the properties attached to each declaration
//!
//! The definition table is the only state that accumulates; `check` and
//! `infer` never see it.

use crate::check::expr::check;
use crate::check::pat::check_pattern;
use crate::check::prop::check_property;
use crate::check::ty::ast_to_ty;
use crate::context::{Bindings, DefnTable, TypeEnv};
use crate::error::{Result, TypeError};
use crate::infer::Context;
use crate::typed::{ModuleInfo, TypedClause, TypedDefn};
use crate::types::Ty;
use indexmap::IndexMap;
use numera_log::debug;
use numera_mem::StringInterner;
use numera_syntax::ast::{Clause, Defn, Module};

/// Check a whole module.
pub fn check_module(interner: &StringInterner, module: &Module) -> Result<ModuleInfo> {
    debug!("checking module with {} items", module.items.len());

    let mut decls = Bindings::new();
    for decl in module.decls() {
        if decls.contains_key(&decl.name) {
            return Err(TypeError::DuplicateDeclaration {
                name: interner.display(decl.name),
            });
        }
        decls.insert(decl.name, ast_to_ty(&decl.ty)?);
    }
    let ctx = Context::with_env(interner, TypeEnv::new().extend(decls));

    let mut table = DefnTable::new();
    for defn in module.defns() {
        if table.contains(defn.name) {
            return Err(TypeError::DuplicateDefinition {
                name: ctx.name(defn.name),
            });
        }
        table.insert(check_defn(&ctx, defn)?);
    }

    let mut props = IndexMap::new();
    for decl in module.decls() {
        if decl.props.is_empty() {
            continue;
        }
        debug!("checking {} properties of {}", decl.props.len(), ctx.name(decl.name));
        let checked = decl
            .props
            .iter()
            .map(|prop| check_property(&ctx, prop))
            .collect::<Result<Vec<_>>>()?;
        props.insert(decl.name, checked);
    }

    Ok(ModuleInfo {
        defns: table.into_inner(),
        props,
        ctx: ctx.env,
    })
}

/// Check one definition against its declared type.
///
/// The declared type must already be in `ctx`.
pub fn check_defn(ctx: &Context<'_>, defn: &Defn) -> Result<TypedDefn> {
    let name = ctx.name(defn.name);
    debug!("checking definition {}", name);

    let ty = ctx.lookup(defn.name)?;

    let Some(first) = defn.clauses.first() else {
        return Err(TypeError::EmptyDefinition { name });
    };
    let arity = first.patterns.len();
    if let Some(clause) = defn.clauses.iter().find(|c| c.patterns.len() != arity) {
        return Err(TypeError::ArityMismatch {
            name,
            expected: arity,
            found: clause.patterns.len(),
        });
    }
    if arity == 0 && defn.clauses.len() > 1 {
        return Err(TypeError::DuplicateDefinition { name });
    }

    let clauses = defn
        .clauses
        .iter()
        .map(|clause| check_clause(ctx, &name, &ty, clause))
        .collect::<Result<Vec<_>>>()?;

    Ok(TypedDefn {
        name: defn.name,
        ty,
        clauses,
    })
}

/// Peel one arrow per pattern, check the patterns against the domains, then
/// check the body at what is left.
fn check_clause(ctx: &Context<'_>, name: &str, ty: &Ty, clause: &Clause) -> Result<TypedClause> {
    let mut residual = ty;
    let mut bindings = Bindings::new();
    for pat in &clause.patterns {
        let Ty::Arrow(dom, cod) = residual else {
            return Err(TypeError::ArityMismatch {
                name: name.to_string(),
                expected: ty.arity(),
                found: clause.patterns.len(),
            });
        };
        let pat_bindings = check_pattern(ctx, pat, dom)?;
        bindings = ctx.merge(bindings, pat_bindings)?;
        residual = &**cod;
    }

    let body = check(&ctx.extend(bindings.clone()), &clause.body, residual)?;
    Ok(TypedClause {
        patterns: clause.patterns.clone(),
        bindings,
        body,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use numera_syntax::ast::{Decl, Item, Op, Pattern, Term, Type};

    fn module(items: Vec<Item>) -> Module {
        Module { items }
    }

    #[test]
    fn test_simple_definition() {
        let mut interner = StringInterner::new();
        let (f, n) = (interner.intern("f"), interner.intern("n"));

        let m = module(vec![
            Item::Decl(Decl::new(f, Type::arrow(Type::Nat, Type::Int))),
            Item::Defn(Defn {
                name: f,
                clauses: vec![
                    Clause::new(vec![Pattern::Nat(0)], Term::Nat(1)),
                    Clause::new(
                        vec![Pattern::succ(Pattern::Var(n))],
                        Term::binary(Op::Sub, Term::Var(n), Term::Nat(2)),
                    ),
                ],
            }),
        ]);

        let info = check_module(&interner, &m).unwrap();
        let defn = &info.defns[&f];
        assert_eq!(defn.ty, Ty::arrow(Ty::NAT, Ty::INT));
        assert_eq!(defn.clauses[1].bindings.get(&n), Some(&Ty::NAT));
        assert_eq!(info.ctx.lookup(f), Some(&Ty::arrow(Ty::NAT, Ty::INT)));
    }

    #[test]
    fn test_definitions_see_each_other() {
        let mut interner = StringInterner::new();
        let (a, b) = (interner.intern("a"), interner.intern("b"));

        // `a` refers to `b`, which is declared and defined later.
        let m = module(vec![
            Item::Decl(Decl::new(a, Type::Int)),
            Item::Defn(Defn {
                name: a,
                clauses: vec![Clause::new(vec![], Term::binary(Op::Add, Term::Var(b), Term::Nat(1)))],
            }),
            Item::Decl(Decl::new(b, Type::Nat)),
            Item::Defn(Defn { name: b, clauses: vec![Clause::new(vec![], Term::Nat(2))] }),
        ]);
        let info = check_module(&interner, &m).unwrap();
        let names: Vec<_> = info.defns.keys().copied().collect();
        assert_eq!(names, vec![a, b]);
    }

    #[test]
    fn test_arity_mismatch_between_clauses() {
        let mut interner = StringInterner::new();
        let f = interner.intern("f");
        let ty = Type::arrow(Type::Nat, Type::arrow(Type::Nat, Type::Nat));

        let m = module(vec![
            Item::Decl(Decl::new(f, ty)),
            Item::Defn(Defn {
                name: f,
                clauses: vec![
                    Clause::new(vec![Pattern::Wild], Term::Var(f)),
                    Clause::new(vec![Pattern::Wild, Pattern::Wild], Term::Nat(0)),
                ],
            }),
        ]);
        assert_eq!(
            check_module(&interner, &m).map(|_| ()),
            Err(TypeError::ArityMismatch { name: "f".to_string(), expected: 1, found: 2 })
        );
    }

    #[test]
    fn test_too_many_patterns() {
        let mut interner = StringInterner::new();
        let f = interner.intern("f");

        let m = module(vec![
            Item::Decl(Decl::new(f, Type::arrow(Type::Nat, Type::Nat))),
            Item::Defn(Defn {
                name: f,
                clauses: vec![Clause::new(vec![Pattern::Wild, Pattern::Wild], Term::Nat(0))],
            }),
        ]);
        assert_eq!(
            check_module(&interner, &m).map(|_| ()),
            Err(TypeError::ArityMismatch { name: "f".to_string(), expected: 1, found: 2 })
        );
    }

    #[test]
    fn test_fewer_patterns_than_arrows() {
        let mut interner = StringInterner::new();
        let (f, x) = (interner.intern("f"), interner.intern("x"));

        let m = module(vec![
            Item::Decl(Decl::new(f, Type::arrow(Type::Nat, Type::arrow(Type::Nat, Type::Nat)))),
            Item::Defn(Defn {
                name: f,
                clauses: vec![Clause::new(
                    vec![Pattern::Var(x)],
                    Term::lambda(vec![numera_syntax::ast::Arg::bare(x)], Term::Var(x)),
                )],
            }),
        ]);
        assert!(check_module(&interner, &m).is_ok());
    }

    #[test]
    fn test_duplicates() {
        let mut interner = StringInterner::new();
        let c = interner.intern("c");

        let twice_declared = module(vec![
            Item::Decl(Decl::new(c, Type::Nat)),
            Item::Decl(Decl::new(c, Type::Int)),
        ]);
        assert_eq!(
            check_module(&interner, &twice_declared).map(|_| ()),
            Err(TypeError::DuplicateDeclaration { name: "c".to_string() })
        );

        let defn = Defn { name: c, clauses: vec![Clause::new(vec![], Term::Nat(1))] };
        let twice_defined = module(vec![
            Item::Decl(Decl::new(c, Type::Nat)),
            Item::Defn(defn.clone()),
            Item::Defn(defn),
        ]);
        assert_eq!(
            check_module(&interner, &twice_defined).map(|_| ()),
            Err(TypeError::DuplicateDefinition { name: "c".to_string() })
        );

        let two_constant_clauses = module(vec![
            Item::Decl(Decl::new(c, Type::Nat)),
            Item::Defn(Defn {
                name: c,
                clauses: vec![Clause::new(vec![], Term::Nat(1)), Clause::new(vec![], Term::Nat(2))],
            }),
        ]);
        assert_eq!(
            check_module(&interner, &two_constant_clauses).map(|_| ()),
            Err(TypeError::DuplicateDefinition { name: "c".to_string() })
        );
    }

    #[test]
    fn test_duplicate_reported_before_body_is_checked() {
        let mut interner = StringInterner::new();
        let c = interner.intern("c");

        // The second body is ill-typed; the repeated name wins.
        let m = module(vec![
            Item::Decl(Decl::new(c, Type::Nat)),
            Item::Defn(Defn { name: c, clauses: vec![Clause::new(vec![], Term::Nat(1))] }),
            Item::Defn(Defn { name: c, clauses: vec![Clause::new(vec![], Term::Bool(true))] }),
        ]);
        assert_eq!(
            check_module(&interner, &m).map(|_| ()),
            Err(TypeError::DuplicateDefinition { name: "c".to_string() })
        );
    }

    #[test]
    fn test_definition_without_declaration() {
        let mut interner = StringInterner::new();
        let g = interner.intern("g");
        let m = module(vec![Item::Defn(Defn { name: g, clauses: vec![Clause::new(vec![], Term::Unit)] })]);
        assert_eq!(
            check_module(&interner, &m).map(|_| ()),
            Err(TypeError::UnboundVariable { name: "g".to_string() })
        );
    }

    #[test]
    fn test_empty_definition() {
        let mut interner = StringInterner::new();
        let g = interner.intern("g");
        let m = module(vec![
            Item::Decl(Decl::new(g, Type::Unit)),
            Item::Defn(Defn { name: g, clauses: vec![] }),
        ]);
        assert_eq!(
            check_module(&interner, &m).map(|_| ()),
            Err(TypeError::EmptyDefinition { name: "g".to_string() })
        );
    }

    #[test]
    fn test_repeated_variable_across_clause_patterns() {
        let mut interner = StringInterner::new();
        let (f, x) = (interner.intern("f"), interner.intern("x"));
        let m = module(vec![
            Item::Decl(Decl::new(f, Type::arrow(Type::Nat, Type::arrow(Type::Nat, Type::Nat)))),
            Item::Defn(Defn {
                name: f,
                clauses: vec![Clause::new(vec![Pattern::Var(x), Pattern::Var(x)], Term::Var(x))],
            }),
        ]);
        assert_eq!(
            check_module(&interner, &m).map(|_| ()),
            Err(TypeError::DuplicatePatternVariable { name: "x".to_string() })
        );
    }
}
