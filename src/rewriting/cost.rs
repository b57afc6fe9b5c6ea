use crate::language::term::Term;

/// A simplicity metric over terms. Lower is simpler.
pub trait CostFunction {
    fn cost(&self, term: &Term) -> usize;
}

/// Total number of nodes, see [`Term::cost`].
#[derive(Clone, Copy, Debug, Default)]
pub struct NodeCount;

impl CostFunction for NodeCount {
    fn cost(&self, term: &Term) -> usize {
        term.cost()
    }
}

/// Number of leaves, i.e. gate inputs fed by a variable or a constant.
#[derive(Clone, Copy, Debug, Default)]
pub struct LiteralCount;

impl CostFunction for LiteralCount {
    fn cost(&self, term: &Term) -> usize {
        if term.is_leaf() {
            1
        } else {
            term.children()
                .into_iter()
                .map(|child| self.cost(child))
                .sum()
        }
    }
}
