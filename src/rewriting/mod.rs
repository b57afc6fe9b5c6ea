//! Rewriting of terms with the laws of boolean algebra.
//!
//! Patterns and templates are plain [`Term`](crate::language::Term)s whose
//! variables act as placeholders. A [`RuleCatalog`] holds the rules, and the
//! [`Simplifier`] searches the rewrite graph for the cheapest equivalent term.

pub mod catalog;
pub mod cost;
pub mod matching;
pub mod neighbors;
pub mod random;
pub mod rule;
pub mod simplify;

pub use catalog::{Law, RuleCatalog};
pub use cost::{CostFunction, LiteralCount, NodeCount};
pub use neighbors::neighbors;
pub use random::scramble;
pub use rule::{Rule, RuleError};
pub use simplify::{Simplifier, SimplifyConfig, SimplifyOutcome, StopReason};
