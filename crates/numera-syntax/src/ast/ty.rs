//! Type annotation nodes.
//!
//! Annotations appear on lambda arguments, let bindings, ascriptions,
//! type-level queries, quantified property binders, and top-level type
//! declarations.

/// A type as written in source.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// `Void`, the empty type
    Void,
    /// `Unit`
    Unit,
    /// `Bool`
    Bool,
    /// `N`, natural numbers
    Nat,
    /// `Z`, integers
    Int,
    /// `Q+`, non-negative rationals
    PosRational,
    /// `Q`, rationals
    Rational,
    /// `Zn`, integers modulo `n`
    Finite(u64),
    /// `a -> b`
    Arrow(Box<Type>, Box<Type>),
    /// `a * b`
    Pair(Box<Type>, Box<Type>),
    /// `a + b`
    Sum(Box<Type>, Box<Type>),
    /// `List(a)`
    List(Box<Type>),
}

impl Type {
    /// `a -> b`
    pub fn arrow(dom: Type, cod: Type) -> Type {
        Type::Arrow(Box::new(dom), Box::new(cod))
    }

    /// `a * b`
    pub fn pair(a: Type, b: Type) -> Type {
        Type::Pair(Box::new(a), Box::new(b))
    }

    /// `a + b`
    pub fn sum(a: Type, b: Type) -> Type {
        Type::Sum(Box::new(a), Box::new(b))
    }

    /// `List(a)`
    pub fn list(elem: Type) -> Type {
        Type::List(Box::new(elem))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors_box_children() {
        let ty = Type::arrow(Type::Nat, Type::list(Type::pair(Type::Bool, Type::Unit)));
        match ty {
            Type::Arrow(dom, cod) => {
                assert_eq!(*dom, Type::Nat);
                assert_eq!(
                    *cod,
                    Type::List(Box::new(Type::Pair(Box::new(Type::Bool), Box::new(Type::Unit))))
                );
            }
            other => panic!("expected arrow, got {other:?}"),
        }
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Type::sum(Type::Nat, Type::Int), Type::sum(Type::Nat, Type::Int));
        assert_ne!(Type::Finite(5), Type::Finite(7));
    }
}
