//! Cost-directed search for simpler equivalent terms.
//!
//! The search walks the neighbor relation of a [`RuleCatalog`], always
//! expanding the cheapest unexplored state first (ties go to the state that was
//! discovered first). Because the catalog contains size-increasing rewrites,
//! the state space is usually infinite and the search ends when the exploration
//! budget is spent. The result is the cheapest state seen, which is never more
//! expensive than the start and always equivalent to it, since every step
//! applies a law.

use std::cmp::Reverse;
use std::collections::HashSet;
use std::time::{Duration, Instant};

use log::{debug, trace};
use priority_queue::PriorityQueue;
use serde::{Deserialize, Serialize};

use crate::language::term::Term;

use super::catalog::RuleCatalog;
use super::cost::{CostFunction, NodeCount};
use super::neighbors::neighbors;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimplifyConfig {
    /// Maximum number of states a single search pass explores.
    pub max_explored: usize,
    /// Wall-clock limit of a single search pass. Searches without a time
    /// limit are deterministic.
    pub time_limit: Option<Duration>,
    /// Simplify the children of a term before searching from the term itself.
    pub bottom_up: bool,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            max_explored: 2000,
            time_limit: None,
            bottom_up: true,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StopReason {
    /// Every reachable state was explored.
    Exhausted,
    MaxExplored,
    Timeout,
}

impl std::fmt::Display for StopReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let reason = match self {
            StopReason::Exhausted => "exhausted",
            StopReason::MaxExplored => "max explored",
            StopReason::Timeout => "timeout",
        };
        write!(f, "{reason}")
    }
}

#[derive(Clone, Debug)]
pub struct SimplifyOutcome {
    pub original: Term,
    pub best: Term,
    pub start_cost: usize,
    pub best_cost: usize,
    /// States explored over all rounds and passes, children included.
    pub explored: usize,
    /// Why the search from the root stopped in the last round.
    pub reason: StopReason,
    pub duration: Duration,
}

struct Pass {
    best: Term,
    best_cost: usize,
    explored: usize,
    reason: StopReason,
}

fn check_limits(explored: usize, start: Instant, config: &SimplifyConfig) -> Option<StopReason> {
    if explored >= config.max_explored {
        return Some(StopReason::MaxExplored);
    }

    if let Some(limit) = config.time_limit && start.elapsed() >= limit {
        return Some(StopReason::Timeout);
    }

    None
}

pub struct Simplifier<'c, C: CostFunction = NodeCount> {
    catalog: &'c RuleCatalog,
    cost_function: C,
    config: SimplifyConfig,
}

impl<'c> Simplifier<'c> {
    pub fn new(catalog: &'c RuleCatalog) -> Self {
        Self {
            catalog,
            cost_function: NodeCount,
            config: SimplifyConfig::default(),
        }
    }
}

impl<'c, C: CostFunction> Simplifier<'c, C> {
    pub fn with_config(mut self, config: SimplifyConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_cost_function<D: CostFunction>(self, cost_function: D) -> Simplifier<'c, D> {
        Simplifier {
            catalog: self.catalog,
            cost_function,
            config: self.config,
        }
    }

    pub fn config(&self) -> &SimplifyConfig {
        &self.config
    }

    pub fn simplify(&self, term: &Term) -> Term {
        self.run(term).best
    }

    /// Runs rounds of a bottom-up pass followed by a search from the root,
    /// each round starting from the result of the previous one, until a
    /// round no longer lowers the cost. Without a time limit a round is a
    /// function of its input alone, so running again on the result finds
    /// nothing cheaper.
    pub fn run(&self, term: &Term) -> SimplifyOutcome {
        let start = Instant::now();
        let start_cost = self.cost_function.cost(term);
        let mut best = term.clone();
        let mut best_cost = start_cost;
        let mut explored = 0;
        let mut rounds = 0;

        let reason = loop {
            let pass = self.round(&best);
            explored += pass.explored;
            rounds += 1;

            if pass.best_cost >= best_cost {
                break pass.reason;
            }
            best = pass.best;
            best_cost = pass.best_cost;
        };

        if rounds > 1 {
            debug!("{term} converged to {best} (cost {best_cost}) after {rounds} rounds");
        }

        SimplifyOutcome {
            original: term.clone(),
            best,
            start_cost,
            best_cost,
            explored,
            reason,
            duration: start.elapsed(),
        }
    }

    fn round(&self, term: &Term) -> Pass {
        let mut explored = 0;
        let start_state = if self.config.bottom_up {
            self.simplify_children(term, &mut explored)
        } else {
            term.clone()
        };

        let mut pass = self.search(start_state);
        pass.explored += explored;
        pass
    }

    fn simplify_children(&self, term: &Term, explored: &mut usize) -> Term {
        let mut result = term.clone();
        for (index, child) in term.children().into_iter().enumerate() {
            let outcome = self.run(child);
            *explored += outcome.explored;
            if outcome.best != **child {
                result = result.with_child(index, outcome.best);
            }
        }
        result
    }

    fn search(&self, start_state: Term) -> Pass {
        let start = Instant::now();
        let mut best_cost = self.cost_function.cost(&start_state);
        let mut best = start_state.clone();
        debug!("search from {start_state} (cost {best_cost})");

        let mut explored: HashSet<Term> = HashSet::new();
        let mut frontier = PriorityQueue::new();
        let mut sequence: u64 = 0;
        frontier.push(start_state, Reverse((best_cost, sequence)));

        let reason = loop {
            if frontier.is_empty() {
                break StopReason::Exhausted;
            }
            if let Some(reason) = check_limits(explored.len(), start, &self.config) {
                break reason;
            }
            let Some((state, _)) = frontier.pop() else {
                break StopReason::Exhausted;
            };

            explored.insert(state.clone());
            for neighbor in neighbors(&state, self.catalog) {
                if explored.contains(&neighbor) || frontier.get(&neighbor).is_some() {
                    continue;
                }

                let cost = self.cost_function.cost(&neighbor);
                if cost < best_cost {
                    trace!("improved to {neighbor} (cost {cost}) after {} states", explored.len());
                    best = neighbor.clone();
                    best_cost = cost;
                }

                sequence += 1;
                frontier.push(neighbor, Reverse((cost, sequence)));
            }
        };

        debug!(
            "search ended ({reason}) after {} states: {best} (cost {best_cost})",
            explored.len()
        );

        Pass {
            best,
            best_cost,
            explored: explored.len(),
            reason,
        }
    }
}

impl Term {
    /// Simplifies the term with the standard catalog and default settings.
    pub fn simplify(&self) -> Term {
        Simplifier::new(RuleCatalog::standard()).simplify(self)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::rewriting::cost::LiteralCount;

    fn a() -> Term {
        Term::var("a")
    }

    fn b() -> Term {
        Term::var("b")
    }

    fn c() -> Term {
        Term::var("c")
    }

    fn d() -> Term {
        Term::var("d")
    }

    fn check(term: Term, max_cost: usize) -> Term {
        let simplified = term.simplify();
        assert!(
            simplified.equivalent(&term),
            "{simplified} is not equivalent to {term}"
        );
        assert!(
            simplified.cost() <= max_cost,
            "{term} simplified to {simplified} of cost {}, expected at most {max_cost}",
            simplified.cost()
        );
        simplified
    }

    #[test]
    fn product_of_sums() {
        check((a() | b()) & (a() | d()), 5);
    }

    #[test]
    fn repeated_sum() {
        check((a() | b()) | (a() | b()), 3);
    }

    #[test]
    fn textbook_circuit() {
        check((a() & b()) | ((b() & c()) & (b() | c())), 5);
    }

    #[test]
    fn complement_and_constants() {
        assert_eq!(check(a() | !a(), 1), Term::constant(true));
        assert_eq!(check(a() & !a(), 1), Term::constant(false));
        assert_eq!(check(!Term::constant(true), 1), Term::constant(false));
        assert_eq!(check(!!a() & Term::constant(true), 1), a());
    }

    #[test]
    fn absorption() {
        assert_eq!(check((a() & b()) | a(), 1), a());
        check(a() | (!a() & b()), 3);
    }

    #[test]
    fn de_morgan() {
        check(!a() & !b(), 4);
        check(!(!a() | !b()), 3);
    }

    #[test]
    fn leaves_stay() {
        assert_eq!(a().simplify(), a());
        assert_eq!(Term::constant(true).simplify(), Term::constant(true));
    }

    #[test]
    fn fixed_point() {
        for term in [
            (a() | b()) & (a() | d()),
            (a() | b()) | (a() | b()),
            (a() & b()) | ((b() & c()) & (b() | c())),
        ] {
            let once = term.simplify();
            let twice = once.simplify();
            assert_eq!(once.cost(), twice.cost());
            assert!(twice.equivalent(&term));
        }
    }

    #[test]
    fn rounds_continue_while_cost_drops() {
        // One bottom-up pass and one search only reach a term of cost 14 here,
        // while searching again from that term finds cost 6.
        let one = Term::constant(true);
        let term = (d() | ((!a() | c()) | (c() & (d() | a()))))
            | ((!d() | (!d() & (one & c()))) & (((d() | d()) | !a()) & !(b() & c())));

        let outcome = Simplifier::new(RuleCatalog::standard()).run(&term);
        assert!(outcome.best.equivalent(&term));
        assert!(outcome.best_cost <= 6, "{} has cost {}", outcome.best, outcome.best_cost);

        let again = outcome.best.simplify();
        assert_eq!(again.cost(), outcome.best_cost);
    }

    #[test]
    fn outcome_reports_costs() {
        let term = (a() | b()) | (a() | b());
        let outcome = Simplifier::new(RuleCatalog::standard()).run(&term);
        assert_eq!(outcome.original, term);
        assert_eq!(outcome.start_cost, 7);
        assert_eq!(outcome.best_cost, outcome.best.cost());
        assert!(outcome.best_cost <= 3);
        assert!(outcome.explored > 0);
    }

    #[test]
    fn exhausted_without_applicable_rules() {
        let outcome = Simplifier::new(RuleCatalog::standard()).run(&!a());
        assert_eq!(outcome.reason, StopReason::Exhausted);
        assert_eq!(outcome.best, !a());
        // One state for `a`, one for `!a`.
        assert_eq!(outcome.explored, 2);
    }

    #[test]
    fn budget_stops_search() {
        let config = SimplifyConfig {
            max_explored: 5,
            ..Default::default()
        };
        let outcome = Simplifier::new(RuleCatalog::standard())
            .with_config(config)
            .run(&(a() | b()));
        assert_eq!(outcome.reason, StopReason::MaxExplored);
        assert_eq!(outcome.explored, 1 + 1 + 5);
        assert_eq!(outcome.best, a() | b());
    }

    #[test]
    fn zero_budget_returns_input() {
        let config = SimplifyConfig {
            max_explored: 0,
            ..Default::default()
        };
        let term = a() | !a();
        let outcome = Simplifier::new(RuleCatalog::standard())
            .with_config(config)
            .run(&term);
        assert_eq!(outcome.best, term);
        assert_eq!(outcome.explored, 0);
    }

    #[test]
    fn timeout_returns_best_so_far() {
        let config = SimplifyConfig {
            time_limit: Some(Duration::ZERO),
            ..Default::default()
        };
        let term = (a() | b()) & (a() | d());
        let outcome = Simplifier::new(RuleCatalog::standard())
            .with_config(config)
            .run(&term);
        assert_eq!(outcome.reason, StopReason::Timeout);
        assert_eq!(outcome.best, term);
    }

    #[test]
    fn without_bottom_up_pass() {
        let config = SimplifyConfig {
            bottom_up: false,
            ..Default::default()
        };
        let term = !!(a() | !a());
        let simplified = Simplifier::new(RuleCatalog::standard())
            .with_config(config)
            .simplify(&term);
        assert_eq!(simplified, Term::constant(true));
    }

    #[test]
    fn search_is_deterministic() {
        let term = (a() & b()) | ((b() & c()) & (b() | c()));
        let simplifier = Simplifier::new(RuleCatalog::standard());
        let first = simplifier.run(&term);
        let second = simplifier.run(&term);
        assert_eq!(first.best, second.best);
        assert_eq!(first.explored, second.explored);
    }

    #[test]
    fn custom_catalog() {
        let x = || Term::var("x");
        let catalog = RuleCatalog::from_laws(laws!["double negation": !!x() => x()]).unwrap();
        let outcome = Simplifier::new(&catalog).run(&(!!!!a() | !!b()));
        assert_eq!(outcome.best, a() | b());
        assert_eq!(outcome.reason, StopReason::Exhausted);
    }

    #[test]
    fn literal_count_cost() {
        let term = (a() & b()) | (a() & c());
        let outcome = Simplifier::new(RuleCatalog::standard())
            .with_cost_function(LiteralCount)
            .run(&term);
        assert_eq!(outcome.start_cost, 4);
        assert!(outcome.best_cost <= 3);
        assert_eq!(outcome.best_cost, LiteralCount.cost(&outcome.best));
        assert!(outcome.best.equivalent(&term));
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: SimplifyConfig = serde_json::from_str(r#"{"max_explored": 10}"#).unwrap();
        assert_eq!(
            config,
            SimplifyConfig {
                max_explored: 10,
                ..Default::default()
            }
        );
    }
}
