//! Boolean terms.
//!
//! A [`Term`] is an immutable expression tree over constants, variables,
//! negation, conjunction and disjunction. Children are reference counted, so
//! cloning a term is shallow and a rewrite only rebuilds the path from the
//! root down to the node it changes.

use std::collections::BTreeSet;
use std::ops::{BitAnd, BitOr, Not};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Name of a variable occurring in a term.
pub type VariableName = Arc<str>;

#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Term {
    Constant(bool),
    Variable(VariableName),
    Not(Arc<Term>),
    And(Arc<Term>, Arc<Term>),
    Or(Arc<Term>, Arc<Term>),
}

impl Term {
    pub fn constant(value: bool) -> Self {
        Term::Constant(value)
    }

    pub fn var(name: &str) -> Self {
        Term::Variable(Arc::from(name))
    }

    pub fn not(operand: impl Into<Arc<Term>>) -> Self {
        Term::Not(operand.into())
    }

    pub fn and(left: impl Into<Arc<Term>>, right: impl Into<Arc<Term>>) -> Self {
        Term::And(left.into(), right.into())
    }

    pub fn or(left: impl Into<Arc<Term>>, right: impl Into<Arc<Term>>) -> Self {
        Term::Or(left.into(), right.into())
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Term::Constant(_) | Term::Variable(_))
    }

    /// Children in order, empty for leaves.
    pub fn children(&self) -> Vec<&Arc<Term>> {
        match self {
            Term::Constant(_) | Term::Variable(_) => vec![],
            Term::Not(operand) => vec![operand],
            Term::And(left, right) | Term::Or(left, right) => vec![left, right],
        }
    }

    /// Returns a copy of `self` with the child at `index` replaced. The other
    /// children are shared with `self`.
    ///
    /// Panics if `index` is not a child position of `self`.
    pub fn with_child(&self, index: usize, child: Term) -> Term {
        let child = Arc::new(child);
        match (self, index) {
            (Term::Not(_), 0) => Term::Not(child),
            (Term::And(_, right), 0) => Term::And(child, right.clone()),
            (Term::And(left, _), 1) => Term::And(left.clone(), child),
            (Term::Or(_, right), 0) => Term::Or(child, right.clone()),
            (Term::Or(left, _), 1) => Term::Or(left.clone(), child),
            _ => panic!("{self} has no child at position {index}"),
        }
    }

    /// Node count: `1` for a leaf, one plus the children's cost otherwise.
    pub fn cost(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(|child| child.cost())
            .sum::<usize>()
    }

    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .into_iter()
            .map(|child| child.depth())
            .max()
            .unwrap_or(0)
    }

    /// All variable names occurring anywhere in the term, sorted.
    pub fn variables(&self) -> BTreeSet<VariableName> {
        let mut variables = BTreeSet::new();
        self.collect_variables(&mut variables);
        variables
    }

    fn collect_variables(&self, variables: &mut BTreeSet<VariableName>) {
        match self {
            Term::Constant(_) => {}
            Term::Variable(name) => {
                variables.insert(name.clone());
            }
            Term::Not(operand) => operand.collect_variables(variables),
            Term::And(left, right) | Term::Or(left, right) => {
                left.collect_variables(variables);
                right.collect_variables(variables);
            }
        }
    }
}

impl std::fmt::Display for Term {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Term::Constant(value) => write!(f, "{}", u8::from(*value)),
            Term::Variable(name) => write!(f, "{name}"),
            Term::Not(operand) => write!(f, "!{operand}"),
            Term::And(left, right) => write!(f, "({left} * {right})"),
            Term::Or(left, right) => write!(f, "({left} + {right})"),
        }
    }
}

impl From<bool> for Term {
    fn from(value: bool) -> Self {
        Term::Constant(value)
    }
}

impl Not for Term {
    type Output = Term;

    fn not(self) -> Term {
        Term::not(self)
    }
}

impl Not for &Term {
    type Output = Term;

    fn not(self) -> Term {
        Term::not(self.clone())
    }
}

impl BitAnd for Term {
    type Output = Term;

    fn bitand(self, rhs: Term) -> Term {
        Term::and(self, rhs)
    }
}

impl BitAnd for &Term {
    type Output = Term;

    fn bitand(self, rhs: &Term) -> Term {
        Term::and(self.clone(), rhs.clone())
    }
}

impl BitOr for Term {
    type Output = Term;

    fn bitor(self, rhs: Term) -> Term {
        Term::or(self, rhs)
    }
}

impl BitOr for &Term {
    type Output = Term;

    fn bitor(self, rhs: &Term) -> Term {
        Term::or(self.clone(), rhs.clone())
    }
}
