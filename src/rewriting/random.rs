//! Seeded random rewriting.
//!
//! Applies uniformly chosen one-step rewrites to a term. Every step applies a
//! law, so the result is always equivalent to the input. This is useful for
//! producing obfuscated but equivalent inputs for the simplifier.

use log::trace;
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::language::term::Term;

use super::catalog::RuleCatalog;
use super::neighbors::neighbors;

/// Applies `steps` random rewrites to `term`, picking uniformly among all
/// neighbors at each step. Stops early if a term has no neighbors.
///
/// The same seed always gives the same result.
pub fn scramble(term: &Term, catalog: &RuleCatalog, steps: usize, seed: u64) -> Term {
    let mut rng = StdRng::seed_from_u64(seed);
    random_rewrite(term, catalog, steps, &mut rng)
}

pub fn random_rewrite(
    term: &Term,
    catalog: &RuleCatalog,
    steps: usize,
    rng: &mut impl Rng,
) -> Term {
    let mut current = term.clone();
    for step in 0..steps {
        let mut candidates = neighbors(&current, catalog);
        if candidates.is_empty() {
            trace!("no rewrites left after {step} steps");
            break;
        }

        let index = rng.gen_range(0..candidates.len());
        current = candidates.swap_remove(index);
    }

    current
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn sample() -> Term {
        let a = Term::var("a");
        let b = Term::var("b");
        let c = Term::var("c");
        (a.clone() & b.clone()) | ((b.clone() & c.clone()) & (b | c))
    }

    #[test]
    fn scrambled_terms_are_equivalent() {
        let term = sample();
        for seed in 0..20 {
            let scrambled = scramble(&term, RuleCatalog::standard(), 10, seed);
            assert!(
                scrambled.equivalent(&term),
                "seed {seed}: {scrambled} is not equivalent to {term}"
            );
        }
    }

    #[test]
    fn same_seed_same_result() {
        let term = sample();
        let first = scramble(&term, RuleCatalog::standard(), 15, 42);
        let second = scramble(&term, RuleCatalog::standard(), 15, 42);
        assert_eq!(first, second);
    }

    #[test]
    fn zero_steps_is_identity() {
        let term = sample();
        assert_eq!(scramble(&term, RuleCatalog::standard(), 0, 7), term);
    }

    #[test]
    fn stops_without_rewrites() {
        let term = !Term::var("a");
        assert_eq!(scramble(&term, RuleCatalog::standard(), 5, 1), term);
    }
}
