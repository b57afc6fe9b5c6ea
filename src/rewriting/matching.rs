//! Pattern matching of terms against rule patterns and instantiation of rule
//! templates.
//!
//! In a pattern every [`Term::Variable`] is a pattern variable which binds to
//! an arbitrary subterm. Repeated occurrences of one pattern variable must bind
//! structurally equal subterms. Variables of the matched term itself are
//! ordinary leaves.

use std::collections::HashMap;
use std::sync::Arc;

use crate::language::term::{Term, VariableName};

/// Substitutions for pattern variables produced by a successful match.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bindings {
    substitutions: HashMap<VariableName, Term>,
}

impl Bindings {
    /// Gets the subterm bound to a pattern variable.
    pub fn at(&self, variable: &str) -> Option<&Term> {
        self.substitutions.get(variable)
    }

    pub fn len(&self) -> usize {
        self.substitutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.substitutions.is_empty()
    }

    /// Binds `variable` to `term`, or checks `term` against the existing binding.
    fn bind(&mut self, variable: &VariableName, term: &Term) -> bool {
        match self.substitutions.get(variable) {
            Some(bound) => bound == term,
            None => {
                self.substitutions.insert(variable.clone(), term.clone());
                true
            }
        }
    }
}

/// Matches `term` against `pattern`, extending `bindings`.
///
/// Returns `false` on the first mismatch; `bindings` may then hold partial
/// substitutions and should be discarded.
pub fn pattern_match(term: &Term, pattern: &Term, bindings: &mut Bindings) -> bool {
    match (pattern, term) {
        (Term::Variable(variable), _) => bindings.bind(variable, term),
        (Term::Constant(expected), Term::Constant(value)) => expected == value,
        (Term::Not(pattern), Term::Not(operand)) => pattern_match(operand, pattern, bindings),
        (Term::And(pattern_left, pattern_right), Term::And(left, right))
        | (Term::Or(pattern_left, pattern_right), Term::Or(left, right)) => {
            pattern_match(left, pattern_left, bindings)
                && pattern_match(right, pattern_right, bindings)
        }
        _ => false,
    }
}

/// Builds a term from `template` by replacing every variable with its binding.
///
/// Bound subterms are shared with the matched term rather than copied.
///
/// Panics if `template` uses a variable `bindings` does not bind. Rules are
/// checked for this on construction, so it cannot happen for a template
/// instantiated with the bindings of its own rule's pattern.
pub fn instantiate(template: &Term, bindings: &Bindings) -> Term {
    match template {
        Term::Constant(value) => Term::Constant(*value),
        Term::Variable(variable) => bindings
            .at(variable)
            .cloned()
            .unwrap_or_else(|| panic!("template variable `{variable}` is not bound")),
        Term::Not(operand) => Term::Not(Arc::new(instantiate(operand, bindings))),
        Term::And(left, right) => Term::And(
            Arc::new(instantiate(left, bindings)),
            Arc::new(instantiate(right, bindings)),
        ),
        Term::Or(left, right) => Term::Or(
            Arc::new(instantiate(left, bindings)),
            Arc::new(instantiate(right, bindings)),
        ),
    }
}
