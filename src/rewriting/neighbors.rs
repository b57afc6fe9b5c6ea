//! One-step rewrites.

use itertools::Itertools;

use crate::language::term::Term;

use super::catalog::RuleCatalog;

/// All terms reachable from `term` by applying one rule of `catalog` at one
/// node, at any depth.
///
/// Root rewrites come first in catalog order, followed by the rewrites of each
/// child in child order. Duplicates are removed keeping the first occurrence,
/// so the order is deterministic.
pub fn neighbors(term: &Term, catalog: &RuleCatalog) -> Vec<Term> {
    let mut result: Vec<Term> = catalog
        .rules()
        .iter()
        .filter_map(|rule| rule.apply(term))
        .collect();

    for (index, child) in term.children().into_iter().enumerate() {
        result.extend(
            neighbors(child, catalog)
                .into_iter()
                .map(|child_neighbor| term.with_child(index, child_neighbor)),
        );
    }

    result.into_iter().unique().collect()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn x() -> Term {
        Term::var("x")
    }

    fn y() -> Term {
        Term::var("y")
    }

    fn commutativity() -> RuleCatalog {
        let a = || Term::var("a");
        let b = || Term::var("b");
        RuleCatalog::from_laws(laws!["or commutativity": a() | b() => b() | a()]).unwrap()
    }

    #[test]
    fn leaf_has_no_neighbors_without_matching_rules() {
        assert!(neighbors(&x(), &commutativity()).is_empty());
        assert!(neighbors(&x(), RuleCatalog::standard()).is_empty());
    }

    #[test]
    fn rewrites_at_every_depth() {
        let term = !(x() | y()) | x();
        let result = neighbors(&term, &commutativity());
        assert_eq!(result, vec![x() | !(x() | y()), !(y() | x()) | x()]);
    }

    #[test]
    fn duplicates_are_removed() {
        // Both orientations of commutativity yield the same neighbor.
        let term = x() | y();
        let result = neighbors(&term, &commutativity());
        assert_eq!(result, vec![y() | x()]);
    }

    #[test]
    fn standard_neighbors_are_equivalent() {
        let term = (x() & (y() | !x())) | !(Term::constant(true) & y());
        let result = neighbors(&term, RuleCatalog::standard());
        assert!(!result.is_empty());
        for neighbor in &result {
            assert!(neighbor.equivalent(&term), "{neighbor} is not equivalent to {term}");
        }
    }

    #[test]
    fn standard_neighbors_include_known_rewrites() {
        let term = x() | !x();
        let result = neighbors(&term, RuleCatalog::standard());
        assert!(result.contains(&Term::constant(true)));
        assert!(result.contains(&(!x() | x())));

        let term = !!x() & y();
        let result = neighbors(&term, RuleCatalog::standard());
        assert!(result.contains(&(x() & y())));
        assert!(result.contains(&(y() & !!x())));

        let term = !x() & !y();
        let result = neighbors(&term, RuleCatalog::standard());
        assert!(result.contains(&!(x() | y())));
    }
}
