use crate::formula::{Clause, Formula, Literal, VarId};
use log::trace;
use std::collections::BTreeSet;
use std::fmt::{self, Debug, Display, Formatter};

/// What to do with a clause that has no literals left.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EmptyClausePolicy {
    /// An empty clause can never be satisfied, so it is a conflict.
    Conflict,
    /// Leave empty clauses in the formula. They never become unit and are never reported.
    Ignore,
}

impl Default for EmptyClausePolicy {
    fn default() -> Self {
        EmptyClausePolicy::Conflict
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Conflict<V> {
    /// The variable is unit in both polarities.
    Complementary(V),
    /// Every literal of some clause was eliminated.
    EmptyClause,
}

impl<V: Debug> Display for Conflict<V> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Conflict::Complementary(v) => write!(f, "variable {:?} forced both true and false", v),
            Conflict::EmptyClause => f.write_str("clause with no literals left"),
        }
    }
}

impl<V: Debug> std::error::Error for Conflict<V> {}

/// Result of propagating a formula to its fixpoint.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Propagation<V> {
    /// Literals resolved as true, in resolution order.
    pub resolved: Vec<Literal<V>>,
    /// The formula with every resolved literal applied. Contains no unit clauses.
    pub formula: Formula<V>,
}

/// Repeatedly resolves unit clauses until none remain.
///
/// When several literals are unit at once, the smallest one (by variable) is resolved first.
/// Resolving a literal drops every clause containing it and deletes its negation from the rest.
pub fn propagate<V: VarId>(formula: &Formula<V>, policy: EmptyClausePolicy) -> Result<Propagation<V>, Conflict<V>> {
    let mut resolved = vec![];
    let mut clauses = formula.clone().into_clauses();

    loop {
        if policy == EmptyClausePolicy::Conflict && clauses.iter().any(Clause::is_empty) {
            trace!("conflict: empty clause after resolving {:?}", resolved);
            return Err(Conflict::EmptyClause);
        }

        let units: BTreeSet<&Literal<V>> = clauses.iter().filter_map(Clause::unit).collect();
        if let Some(literal) = units.iter().find(|l| l.is_positive() && units.contains(&l.negated())) {
            trace!("conflict: {:?} is unit in both polarities", literal.variable());
            return Err(Conflict::Complementary(literal.variable().clone()));
        }

        let unit = match units.iter().next() {
            Some(&unit) => unit.clone(),
            None => break,
        };
        trace!("resolved {:?}", unit);

        let falsified = unit.negated();
        clauses = clauses
            .iter()
            .filter(|clause| !clause.contains(&unit))
            .map(|clause| clause.without(&falsified))
            .collect();
        resolved.push(unit);
    }

    Ok(Propagation {
        resolved,
        formula: Formula::new(clauses),
    })
}

/// Asserts `literal` on `formula` and propagates the result.
pub fn condition_and_propagate<V: VarId>(
    formula: &Formula<V>,
    literal: Literal<V>,
    policy: EmptyClausePolicy,
) -> Result<Propagation<V>, Conflict<V>> {
    propagate(&formula.condition(literal), policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{formula_3sat_strategy, n, p};
    use proptest::prelude::*;
    use std::collections::HashSet;
    use test_env_log::test;

    fn clause(literals: &[Literal<u32>]) -> Clause<u32> {
        Clause::new(literals.iter().cloned())
    }

    #[test]
    fn no_units_is_fixpoint() {
        let f = Formula::new(vec![clause(&[p(1), p(2)]), clause(&[n(1), n(2)])]);
        let r = propagate(&f, EmptyClausePolicy::Conflict).unwrap();
        assert!(r.resolved.is_empty());
        assert_eq!(r.formula, f);
    }

    #[test]
    fn cascade() {
        // 1 & (!1 | 2) & (!2 | 3) & (3 | 4)
        let f = Formula::new(vec![
            clause(&[p(1)]),
            clause(&[n(1), p(2)]),
            clause(&[n(2), p(3)]),
            clause(&[p(3), p(4)]),
        ]);
        let r = propagate(&f, EmptyClausePolicy::Conflict).unwrap();
        assert_eq!(r.resolved, vec![p(1), p(2), p(3)]);
        assert!(r.formula.is_empty());
    }

    #[test]
    fn smallest_unit_first() {
        let f = Formula::new(vec![clause(&[n(5)]), clause(&[p(3)]), clause(&[n(3), p(7), n(5)])]);
        let r = propagate(&f, EmptyClausePolicy::Conflict).unwrap();
        assert_eq!(r.resolved, vec![p(3), n(5)]);
        assert!(r.formula.is_empty());
    }

    #[test]
    fn complementary_units_conflict() {
        let f = Formula::new(vec![clause(&[p(1), p(2)]), clause(&[n(2)]), clause(&[p(2)])]);
        assert_eq!(propagate(&f, EmptyClausePolicy::Conflict), Err(Conflict::Complementary(2)));
        assert_eq!(propagate(&f, EmptyClausePolicy::Ignore), Err(Conflict::Complementary(2)));
    }

    #[test]
    fn conflict_found_after_resolution() {
        // 1 & (!1 | 2) & (!1 | !2)
        let f = Formula::new(vec![clause(&[p(1)]), clause(&[n(1), p(2)]), clause(&[n(1), n(2)])]);
        assert_eq!(propagate(&f, EmptyClausePolicy::Ignore), Err(Conflict::Complementary(2)));
    }

    #[test]
    fn clause_emptied_by_elimination() {
        // (!1 | !1) has nothing left once 1 is resolved
        let f = Formula::new(vec![clause(&[p(1)]), clause(&[n(1), n(1)]), clause(&[p(2), p(3)])]);
        assert_eq!(propagate(&f, EmptyClausePolicy::Conflict), Err(Conflict::EmptyClause));

        let r = propagate(&f, EmptyClausePolicy::Ignore).unwrap();
        assert_eq!(r.resolved, vec![p(1)]);
        assert_eq!(r.formula, Formula::new(vec![clause(&[]), clause(&[p(2), p(3)])]));
    }

    #[test]
    fn empty_input_clause() {
        let f = Formula::new(vec![clause(&[]), clause(&[p(1)])]);
        assert_eq!(propagate(&f, EmptyClausePolicy::Conflict), Err(Conflict::EmptyClause));
        let r = propagate(&f, EmptyClausePolicy::Ignore).unwrap();
        assert_eq!(r.resolved, vec![p(1)]);
        assert_eq!(r.formula.len(), 1);
    }

    #[test]
    fn conditioning_forced_literal() {
        // 1 & (1 | 2) & (!1 | 3 | 4), conditioned on 1 again
        let f = Formula::new(vec![clause(&[p(1)]), clause(&[p(1), p(2)]), clause(&[n(1), p(3), p(4)])]);
        let r = condition_and_propagate(&f, p(1), EmptyClausePolicy::Conflict).unwrap();
        assert_eq!(r.resolved, vec![p(1)]);
        assert_eq!(r.formula, Formula::new(vec![clause(&[p(3), p(4)])]));
        assert!(r.formula.clauses().all(|c| !c.contains(&p(1)) && !c.contains(&n(1))));
        assert_eq!(f.len(), 3);
    }

    #[test]
    fn conditioning_against_forced_literal() {
        let f = Formula::new(vec![clause(&[p(1)]), clause(&[p(1), p(2)])]);
        assert_eq!(
            condition_and_propagate(&f, n(1), EmptyClausePolicy::Conflict),
            Err(Conflict::Complementary(1))
        );
    }

    proptest! {
        #[test]
        fn proptest_resolved_is_consistent(f in formula_3sat_strategy()) {
            if let Ok(r) = propagate(&f, EmptyClausePolicy::Ignore) {
                let resolved: HashSet<_> = r.resolved.iter().collect();
                for l in &r.resolved {
                    prop_assert!(!resolved.contains(&l.negated()));
                }
            }
        }

        #[test]
        fn proptest_fixpoint_is_idempotent(f in formula_3sat_strategy()) {
            if let Ok(r) = propagate(&f, EmptyClausePolicy::Conflict) {
                prop_assert!(r.formula.clauses().all(|c| c.unit().is_none()));
                let again = propagate(&r.formula, EmptyClausePolicy::Conflict).unwrap();
                prop_assert!(again.resolved.is_empty());
                prop_assert_eq!(again.formula, r.formula);
            }
        }
    }
}
