//! The catalog of boolean laws used for rewriting.
//!
//! A [`Law`] is an equivalence `lhs = rhs`. The catalog turns every law into
//! the rule `lhs -> rhs` and, where it is a usable rule, into `rhs -> lhs`.
//! The reverse orientation is skipped when `rhs` is a leaf, since a bare
//! variable pattern matches every node and a constant pattern only ever grows
//! the term (`0 -> !1 -> !!0 -> ...`). It is also skipped when `lhs` uses
//! variables that `rhs` does not bind (`1 -> a + !a` has no way to choose
//! `a`).

use std::sync::LazyLock;

use log::debug;

use crate::language::term::Term;

use super::rule::{Rule, RuleError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Law {
    name: &'static str,
    lhs: Term,
    rhs: Term,
}

impl Law {
    pub fn new(name: &'static str, lhs: Term, rhs: Term) -> Self {
        Self { name, lhs, rhs }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn lhs(&self) -> &Term {
        &self.lhs
    }

    pub fn rhs(&self) -> &Term {
        &self.rhs
    }

    /// The rules this law contributes: `lhs -> rhs` first, then `rhs -> lhs`
    /// when that orientation is usable.
    ///
    /// Fails if `lhs -> rhs` itself is not a valid rule.
    pub fn orientations(&self) -> Result<Vec<Rule>, RuleError> {
        let forward = Rule::new(self.lhs.clone(), self.rhs.clone())?;
        let backward = if self.rhs.is_leaf() {
            None
        } else {
            forward.reversed().ok()
        };

        Ok(std::iter::once(forward).chain(backward).collect())
    }
}

impl std::fmt::Display for Law {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} = {}", self.name, self.lhs, self.rhs)
    }
}

/// An immutable set of rules built from laws. Construct it once and share it
/// by reference.
#[derive(Clone, Debug)]
pub struct RuleCatalog {
    laws: Vec<Law>,
    rules: Vec<Rule>,
}

static STANDARD: LazyLock<RuleCatalog> = LazyLock::new(|| {
    RuleCatalog::from_laws(standard_laws()).expect("standard laws are valid rules")
});

impl RuleCatalog {
    pub fn from_laws(laws: Vec<Law>) -> Result<Self, RuleError> {
        let mut rules = Vec::with_capacity(2 * laws.len());
        for law in &laws {
            rules.extend(law.orientations()?);
        }
        debug!("rule catalog: {} laws, {} rules", laws.len(), rules.len());

        Ok(Self { laws, rules })
    }

    /// The catalog of standard boolean algebra laws.
    pub fn standard() -> &'static RuleCatalog {
        &STANDARD
    }

    pub fn laws(&self) -> &[Law] {
        &self.laws
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Laws of boolean algebra over `+` (or), `*` (and) and `!` (not).
pub fn standard_laws() -> Vec<Law> {
    let a = || Term::var("a");
    let b = || Term::var("b");
    let c = || Term::var("c");
    let zero = || Term::constant(false);
    let one = || Term::constant(true);

    laws![
        "or commutativity": a() | b() => b() | a(),
        "and commutativity": a() & b() => b() & a(),
        "or associativity": a() | (b() | c()) => (a() | b()) | c(),
        "and associativity": a() & (b() & c()) => (a() & b()) & c(),
        "distributivity": a() & (b() | c()) => (a() & b()) | (a() & c()),
        "de morgan (or)": !(a() | b()) => !a() & !b(),
        "de morgan (and)": !(a() & b()) => !a() | !b(),
        "or idempotence": a() | a() => a(),
        "and idempotence": a() & a() => a(),
        "or identity": a() | zero() => a(),
        "or annihilator": a() | one() => one(),
        "and annihilator": a() & zero() => zero(),
        "and identity": a() & one() => a(),
        "or complement": a() | !a() => one(),
        "and complement": a() & !a() => zero(),
        "absorption": a() | (a() & b()) => a(),
        "absorption of negation": a() | (!a() & b()) => a() | b(),
        "absorption into negation": !a() | (a() & b()) => !a() | b(),
        "double negation": !!a() => a(),
        "negation of 0": !zero() => one(),
        "negation of 1": !one() => zero(),
    ]
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;

    fn a() -> Term {
        Term::var("a")
    }

    fn b() -> Term {
        Term::var("b")
    }

    #[test]
    fn bidirectional_law_gives_two_rules() {
        let law = Law::new("de morgan", !(a() | b()), !a() & !b());
        let rules = law.orientations().unwrap();
        assert_eq!(rules.len(), 2);
        assert_eq!(rules[0].from(), &!(a() | b()));
        assert_eq!(rules[1].from(), &(!a() & !b()));
    }

    #[test]
    fn bare_variable_pattern_is_not_reversed() {
        let law = Law::new("double negation", !!a(), a());
        assert_eq!(law.orientations().unwrap().len(), 1);
    }

    #[test]
    fn unbound_reverse_is_not_reversed() {
        let law = Law::new("complement", a() | !a(), Term::constant(true));
        let rules = law.orientations().unwrap();
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].to(), &Term::constant(true));
    }

    #[test]
    fn constant_pattern_is_not_reversed() {
        let law = Law::new("negation of 0", !Term::constant(false), Term::constant(true));
        assert_eq!(law.orientations().unwrap().len(), 1);
    }

    #[test]
    fn invalid_forward_rule_fails() {
        let laws = laws!["bogus": Term::constant(true) => a()];
        assert!(RuleCatalog::from_laws(laws).is_err());
    }

    #[test]
    fn standard_catalog() {
        let catalog = RuleCatalog::standard();
        assert_eq!(catalog.laws().len(), 21);
        // Reversed: the 2 commutativities, 2 associativities, distributivity,
        // 2 de Morgans and the last 2 absorptions.
        assert_eq!(catalog.len(), 21 + 9);
    }

    #[test]
    fn standard_rules_preserve_meaning() {
        for rule in RuleCatalog::standard().rules() {
            assert!(
                rule.from().equivalent(rule.to()),
                "rule {rule} is not an equivalence"
            );
        }
    }

    #[test]
    fn empty_catalog() {
        let catalog = RuleCatalog::from_laws(laws![]).unwrap();
        assert!(catalog.is_empty());
    }
}
