//! Erasure of annotated terms.
//!
//! Erasure drops every type the checker attached and removes subsumption
//! nodes, leaving the surface term that was checked. Annotations the user
//! wrote (argument and binding annotations, ascriptions, type operators) are
//! part of the surface term and survive.

use crate::check::ty_to_ast;
use crate::typed::{Typed, TypedClause, TypedDefn, TypedKind, TypedProperty};
use numera_syntax::ast::{
    Arg, Binding, Branch, Clause, Defn, Ellipsis, Guard, Link, Property, Qual, Term,
};

/// Recover the surface term of an annotated term.
pub fn erase(typed: &Typed) -> Term {
    crate::with_stack(|| erase_node(typed))
}

fn erase_node(typed: &Typed) -> Term {
    match &typed.kind {
        TypedKind::Var(x) => Term::Var(*x),
        TypedKind::Unit => Term::Unit,
        TypedKind::Bool(b) => Term::Bool(*b),
        TypedKind::Nat(n) => Term::Nat(*n),
        TypedKind::Rational(q) => Term::Rational(*q),
        TypedKind::Lambda(args, body) => {
            let args = args
                .iter()
                .map(|arg| Arg {
                    name: arg.name,
                    ann: arg.ann.as_ref().map(ty_to_ast),
                })
                .collect();
            Term::lambda(args, erase(body))
        }
        TypedKind::App(f, x) => Term::app(erase(f), erase(x)),
        TypedKind::Tuple(ts) => Term::Tuple(ts.iter().map(erase).collect()),
        TypedKind::Inj(side, t) => Term::inj(*side, erase(t)),
        TypedKind::Case(branches) => Term::Case(branches.iter().map(erase_branch).collect()),
        TypedKind::Let(bindings, body) => {
            let bindings = bindings
                .iter()
                .map(|b| Binding {
                    name: b.name,
                    ann: b.ann.as_ref().map(ty_to_ast),
                    value: erase(&b.value),
                })
                .collect();
            Term::let_in(bindings, erase(body))
        }
        TypedKind::Unary(op, t) => Term::unary(*op, erase(t)),
        TypedKind::Binary(op, l, r) => Term::binary(*op, erase(l), erase(r)),
        TypedKind::Chain(first, links) => {
            let links = links
                .iter()
                .map(|link| Link {
                    op: link.op,
                    term: erase(&link.term),
                })
                .collect();
            Term::Chain(Box::new(erase(first)), links)
        }
        TypedKind::List(ts, ellipsis) => {
            let ellipsis = ellipsis.as_ref().map(|e| match e {
                Ellipsis::Forever => Ellipsis::Forever,
                Ellipsis::Until(t) => Ellipsis::Until(Box::new(erase(t))),
            });
            Term::List(ts.iter().map(erase).collect(), ellipsis)
        }
        TypedKind::ListComp(body, quals) => {
            let quals = quals
                .iter()
                .map(|q| match q {
                    Qual::Bind(x, t) => Qual::Bind(*x, erase(t)),
                    Qual::Guard(t) => Qual::Guard(erase(t)),
                })
                .collect();
            Term::list_comp(erase(body), quals)
        }
        TypedKind::Ascribe(t, ty) => Term::ascribe(erase(t), ty_to_ast(ty)),
        TypedKind::TyOp(op, ty) => Term::TyOp(*op, ty_to_ast(ty)),
        TypedKind::Sub(t) => erase(t),
    }
}

fn erase_branch(branch: &Branch<Typed>) -> Branch {
    let guards = branch
        .guards
        .iter()
        .map(|g| match g {
            Guard::If(t) => Guard::If(erase(t)),
            Guard::When(t, p) => Guard::When(erase(t), p.clone()),
        })
        .collect();
    Branch {
        guards,
        body: erase(&branch.body),
    }
}

/// Recover the surface clause of a checked clause.
pub fn erase_clause(clause: &TypedClause) -> Clause {
    Clause::new(clause.patterns.clone(), erase(&clause.body))
}

/// Recover the surface definition of a checked definition.
pub fn erase_defn(defn: &TypedDefn) -> Defn {
    Defn {
        name: defn.name,
        clauses: defn.clauses.iter().map(erase_clause).collect(),
    }
}

/// Recover the surface property of a checked property.
pub fn erase_property(prop: &TypedProperty) -> Property {
    Property {
        binders: prop.binders.iter().map(|(x, ty)| (*x, ty_to_ast(ty))).collect(),
        body: erase(&prop.body),
    }
}
