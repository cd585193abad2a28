//! Pattern nodes.
//!
//! Patterns appear in `when` guards of case branches and as the argument
//! patterns of definition clauses. They carry no type annotations; the
//! checker assigns types to the variables they bind.

use numera_mem::Symbol;

use crate::ast::term::Side;

/// A pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Pattern {
    /// Variable binding pattern: `x`
    Var(Symbol),

    /// Wildcard pattern: `_`
    Wild,

    /// Unit pattern: `()`
    Unit,

    /// Boolean literal pattern: `true`, `false`
    Bool(bool),

    /// Tuple pattern: `(p1, p2, ..., pn)`, right-nested like tuple types
    Tuple(Vec<Pattern>),

    /// Injection pattern: `left p`, `right p`
    Inj(Side, Box<Pattern>),

    /// Natural number literal pattern: `3`
    Nat(u64),

    /// Successor pattern: `S p`
    Succ(Box<Pattern>),

    /// Cons pattern: `p :: ps`
    Cons(Box<Pattern>, Box<Pattern>),

    /// List pattern: `[p1, ..., pn]`
    List(Vec<Pattern>),
}

impl Pattern {
    /// Short description used in diagnostics.
    pub fn describe(&self) -> &'static str {
        match self {
            Pattern::Var(_) => "variable pattern",
            Pattern::Wild => "wildcard pattern",
            Pattern::Unit => "unit pattern",
            Pattern::Bool(_) => "boolean pattern",
            Pattern::Tuple(_) => "tuple pattern",
            Pattern::Inj(Side::Left, _) => "left injection pattern",
            Pattern::Inj(Side::Right, _) => "right injection pattern",
            Pattern::Nat(_) => "natural number pattern",
            Pattern::Succ(_) => "successor pattern",
            Pattern::Cons(_, _) => "cons pattern",
            Pattern::List(_) => "list pattern",
        }
    }

    /// `p :: ps`
    pub fn cons(head: Pattern, tail: Pattern) -> Pattern {
        Pattern::Cons(Box::new(head), Box::new(tail))
    }

    /// `S p`
    pub fn succ(pat: Pattern) -> Pattern {
        Pattern::Succ(Box::new(pat))
    }

    /// `left p` / `right p`
    pub fn inj(side: Side, pat: Pattern) -> Pattern {
        Pattern::Inj(side, Box::new(pat))
    }

    /// Variables bound by this pattern, left to right, duplicates included.
    pub fn binders(&self) -> Vec<Symbol> {
        let mut out = Vec::new();
        self.collect_binders(&mut out);
        out
    }

    fn collect_binders(&self, out: &mut Vec<Symbol>) {
        match self {
            Pattern::Var(x) => out.push(*x),
            Pattern::Wild | Pattern::Unit | Pattern::Bool(_) | Pattern::Nat(_) => {}
            Pattern::Inj(_, p) | Pattern::Succ(p) => p.collect_binders(out),
            Pattern::Cons(h, t) => {
                h.collect_binders(out);
                t.collect_binders(out);
            }
            Pattern::Tuple(ps) | Pattern::List(ps) => {
                for p in ps {
                    p.collect_binders(out);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binders_in_order() {
        let (x, y, z) = (Symbol::new(0), Symbol::new(1), Symbol::new(2));
        let pat = Pattern::Tuple(vec![
            Pattern::Var(x),
            Pattern::cons(Pattern::Var(y), Pattern::Wild),
            Pattern::inj(Side::Right, Pattern::succ(Pattern::Var(z))),
        ]);
        assert_eq!(pat.binders(), vec![x, y, z]);
    }

    #[test]
    fn test_binders_keep_duplicates() {
        let x = Symbol::new(3);
        let pat = Pattern::List(vec![Pattern::Var(x), Pattern::Var(x)]);
        assert_eq!(pat.binders(), vec![x, x]);
    }

    #[test]
    fn test_describe() {
        assert_eq!(Pattern::Wild.describe(), "wildcard pattern");
        assert_eq!(Pattern::inj(Side::Left, Pattern::Unit).describe(), "left injection pattern");
    }
}
