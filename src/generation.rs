use rand::Rng;
use rand::seq::SliceRandom;

use crate::language::term::Term;

/// Probability of stopping early with a leaf above the depth limit.
const LEAF_PROBABILITY: f64 = 0.2;

/// Probability that a leaf is a constant rather than a variable.
const CONSTANT_PROBABILITY: f64 = 0.1;

/// Generates a random term over `variables` no deeper than `depth`.
///
/// With no variables only constants are generated.
pub fn random_term(variables: &[&str], depth: usize, rng: &mut impl Rng) -> Term {
    if depth <= 1 || rng.gen_bool(LEAF_PROBABILITY) {
        return random_leaf(variables, rng);
    }

    match rng.gen_range(0..5) {
        0 => !random_term(variables, depth - 1, rng),
        1 | 2 => random_term(variables, depth - 1, rng) & random_term(variables, depth - 1, rng),
        _ => random_term(variables, depth - 1, rng) | random_term(variables, depth - 1, rng),
    }
}

fn random_leaf(variables: &[&str], rng: &mut impl Rng) -> Term {
    match variables.choose(rng) {
        Some(name) if !rng.gen_bool(CONSTANT_PROBABILITY) => Term::var(name),
        _ => Term::constant(rng.gen_bool(0.5)),
    }
}
