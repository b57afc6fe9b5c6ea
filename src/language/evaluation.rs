//! Evaluation of terms under variable assignments, truth tables and the
//! brute-force equivalence check.

use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use thiserror::Error;

use super::term::{Term, VariableName};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    #[error("variable `{0}` has no value in the supplied bindings")]
    UnboundVariable(String),
}

/// Source of variable values for [`Term::evaluate`].
pub trait Valuation {
    fn value(&self, name: &str) -> Option<bool>;
}

impl<K, S> Valuation for HashMap<K, bool, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl<K> Valuation for BTreeMap<K, bool>
where
    K: Borrow<str> + Ord,
{
    fn value(&self, name: &str) -> Option<bool> {
        self.get(name).copied()
    }
}

impl Term {
    /// Computes the value of the term. Both operands of a binary node are
    /// always evaluated, so a missing variable is reported even where it
    /// could not influence the result.
    pub fn evaluate(&self, bindings: &impl Valuation) -> Result<bool, EvalError> {
        Ok(match self {
            Term::Constant(value) => *value,
            Term::Variable(name) => bindings
                .value(name)
                .ok_or_else(|| EvalError::UnboundVariable(name.to_string()))?,
            Term::Not(operand) => !operand.evaluate(bindings)?,
            Term::And(left, right) => {
                let left = left.evaluate(bindings)?;
                let right = right.evaluate(bindings)?;
                left && right
            }
            Term::Or(left, right) => {
                let left = left.evaluate(bindings)?;
                let right = right.evaluate(bindings)?;
                left || right
            }
        })
    }

    /// Checks whether `self` and `other` agree on every assignment to the
    /// union of their variables.
    ///
    /// Panics if the union has more than [`Assignments::MAX_VARIABLES`]
    /// names.
    pub fn equivalent(&self, other: &Term) -> bool {
        let mut variables = self.variables();
        variables.extend(other.variables());
        let variables: Vec<VariableName> = variables.into_iter().collect();

        Assignments::new(&variables).all(|assignment| {
            // Every variable of either term is bound by construction.
            self.evaluate(&assignment) == other.evaluate(&assignment)
        })
    }
}

/// One row of an enumeration over sorted variable names. Bit `i` of `bits`,
/// counted from the most significant of `names.len()` bits, is the value of
/// `names[i]`.
#[derive(Clone, Copy, Debug)]
pub struct Assignment<'v> {
    names: &'v [VariableName],
    bits: u64,
}

impl<'v> Assignment<'v> {
    pub fn get(&self, index: usize) -> bool {
        let shift = self.names.len() - 1 - index;
        (self.bits >> shift) & 1 == 1
    }

    pub fn values(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.names.len()).map(move |index| self.get(index))
    }
}

impl Valuation for Assignment<'_> {
    fn value(&self, name: &str) -> Option<bool> {
        self.names
            .binary_search_by(|probe| (**probe).cmp(name))
            .ok()
            .map(|index| self.get(index))
    }
}

/// Iterates all `2^k` assignments to `k` sorted variables by binary counting
/// from all-false to all-true, the first variable being the most significant
/// bit.
#[derive(Clone, Debug)]
pub struct Assignments<'v> {
    names: &'v [VariableName],
    next: u64,
    end: u64,
}

impl<'v> Assignments<'v> {
    pub const MAX_VARIABLES: usize = 63;

    /// Panics if there are more than [`Self::MAX_VARIABLES`] names.
    pub fn new(names: &'v [VariableName]) -> Self {
        assert!(
            names.len() <= Self::MAX_VARIABLES,
            "cannot enumerate assignments to {} variables",
            names.len()
        );
        Self {
            names,
            next: 0,
            end: 1 << names.len(),
        }
    }
}

impl<'v> Iterator for Assignments<'v> {
    type Item = Assignment<'v>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next == self.end {
            return None;
        }
        let bits = self.next;
        self.next += 1;
        Some(Assignment {
            names: self.names,
            bits,
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTableRow {
    pub inputs: Vec<bool>,
    pub output: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TruthTable {
    pub variables: Vec<VariableName>,
    pub rows: Vec<TruthTableRow>,
}

impl TruthTable {
    pub fn of(term: &Term) -> Self {
        let variables: Vec<VariableName> = term.variables().into_iter().collect();
        let rows = Assignments::new(&variables)
            .map(|assignment| TruthTableRow {
                inputs: assignment.values().collect(),
                output: term
                    .evaluate(&assignment)
                    .expect("assignments bind every variable of the term"),
            })
            .collect();

        Self { variables, rows }
    }
}
