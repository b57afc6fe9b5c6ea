//! Simplification of boolean circuits by rewriting with the laws of boolean
//! algebra.
//!
//! A circuit is a [`Term`] over `+` (or), `*` (and) and `!` (not). The
//! [`Simplifier`] explores terms reachable by applying the laws of a
//! [`RuleCatalog`] and returns the cheapest one found, which is always
//! equivalent to the input.
//!
//! ```
//! use gates::{Term, RuleCatalog, Simplifier};
//!
//! let a = Term::var("a");
//! let term = a.clone() | !a;
//! let simplified = Simplifier::new(RuleCatalog::standard()).simplify(&term);
//! assert_eq!(simplified, Term::constant(true));
//! ```

#[macro_use]
mod macros;

pub mod generation;
pub mod language;
pub mod report;
pub mod rewriting;
pub mod utils;

pub use language::{Circuit, Term, TruthTable};
pub use rewriting::{RuleCatalog, Simplifier, SimplifyConfig, SimplifyOutcome, StopReason};
