use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::language::term::Term;

use super::matching::{Bindings, instantiate, pattern_match};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("variable `{variable}` of `{to}` is not bound by `{from}`")]
    UnboundTemplateVariable {
        variable: String,
        from: String,
        to: String,
    },
}

/// A one-directional rewrite `from -> to`. Variables in `from` are pattern
/// variables; `to` may only use variables that occur in `from`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RuleParts")]
pub struct Rule {
    from: Term,
    to: Term,
}

#[derive(Deserialize)]
struct RuleParts {
    from: Term,
    to: Term,
}

impl TryFrom<RuleParts> for Rule {
    type Error = RuleError;

    fn try_from(parts: RuleParts) -> Result<Self, Self::Error> {
        Rule::new(parts.from, parts.to)
    }
}

impl Rule {
    pub fn new(from: Term, to: Term) -> Result<Self, RuleError> {
        let bound = from.variables();
        if let Some(variable) = to.variables().difference(&bound).next() {
            return Err(RuleError::UnboundTemplateVariable {
                variable: variable.to_string(),
                from: from.to_string(),
                to: to.to_string(),
            });
        }

        Ok(Self { from, to })
    }

    pub fn from(&self) -> &Term {
        &self.from
    }

    pub fn to(&self) -> &Term {
        &self.to
    }

    /// The rule read right to left, if that orientation is a valid rule.
    pub fn reversed(&self) -> Result<Self, RuleError> {
        Self::new(self.to.clone(), self.from.clone())
    }

    /// Rewrites `term` at its root. Returns `None` if the pattern does not match.
    pub fn apply(&self, term: &Term) -> Option<Term> {
        let mut bindings = Bindings::default();
        pattern_match(term, &self.from, &mut bindings).then(|| instantiate(&self.to, &bindings))
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}
