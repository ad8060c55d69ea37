pub mod encoding;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

pub use encoding::{EncodingError, NEGATION_SYMBOL};

/// Identity of a propositional variable. Any comparable, hashable token works (integers for
/// the signed encoding, strings for named variables).
pub trait VarId: Clone + Eq + Hash + Ord + Debug {}

impl<T: Clone + Eq + Hash + Ord + Debug> VarId for T {}

#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum Literal<V> {
    Positive(V),
    Negative(V),
}

impl<V: VarId> Literal<V> {
    /// The positive and negative literal of `variable`, in that order.
    pub fn pair(variable: V) -> (Self, Self) {
        (Literal::Positive(variable.clone()), Literal::Negative(variable))
    }

    pub fn variable(&self) -> &V {
        match self {
            Literal::Positive(v) => v,
            Literal::Negative(v) => v,
        }
    }

    pub fn is_positive(&self) -> bool {
        match self {
            Literal::Positive(_) => true,
            Literal::Negative(_) => false,
        }
    }

    pub fn negated(&self) -> Self {
        match self {
            Literal::Positive(v) => Literal::Negative(v.clone()),
            Literal::Negative(v) => Literal::Positive(v.clone()),
        }
    }

    pub fn normal_form(&self) -> Self {
        Literal::Positive(self.variable().clone())
    }

    pub fn inverted_form(&self) -> Self {
        Literal::Negative(self.variable().clone())
    }
}

// Variable first, then positive before negative. Propagation relies on this to pick among
// several unit literals deterministically.
impl<V: VarId> Ord for Literal<V> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.variable()
            .cmp(other.variable())
            .then_with(|| other.is_positive().cmp(&self.is_positive()))
    }
}

impl<V: VarId> PartialOrd for Literal<V> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V: Display> Display for Literal<V> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Literal::Positive(v) => write!(f, "{}", v),
            Literal::Negative(v) => write!(f, "{}{}", NEGATION_SYMBOL, v),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Clause<V> {
    literals: Vec<Literal<V>>,
}

impl<V: VarId> Clause<V> {
    pub fn new(disjuncts: impl IntoIterator<Item = Literal<V>>) -> Self {
        Self {
            literals: disjuncts.into_iter().collect(),
        }
    }

    pub fn literals(&self) -> impl Iterator<Item = &Literal<V>> {
        self.literals.iter()
    }

    pub fn len(&self) -> usize {
        self.literals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// The single literal of a unit clause.
    pub fn unit(&self) -> Option<&Literal<V>> {
        match self.literals.as_slice() {
            [literal] => Some(literal),
            _ => None,
        }
    }

    pub fn contains(&self, literal: &Literal<V>) -> bool {
        self.literals.contains(literal)
    }

    /// A copy of this clause with every occurrence of `literal` removed.
    pub fn without(&self, literal: &Literal<V>) -> Self {
        Self {
            literals: self.literals.iter().filter(|l| *l != literal).cloned().collect(),
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Formula<V> {
    clauses: Vec<Clause<V>>,
}

impl<V: VarId> Formula<V> {
    pub fn new(conjuncts: impl IntoIterator<Item = Clause<V>>) -> Self {
        Self {
            clauses: conjuncts.into_iter().collect(),
        }
    }

    pub fn clauses(&self) -> impl Iterator<Item = &Clause<V>> {
        self.clauses.iter()
    }

    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Distinct variables in the order they first occur.
    pub fn variables(&self) -> Vec<V> {
        let mut seen = HashSet::new();
        self.clauses
            .iter()
            .flat_map(|clause| clause.literals())
            .map(|literal| literal.variable())
            .filter(|v| seen.insert(*v))
            .cloned()
            .collect()
    }

    /// Asserts `literal` by appending the unit clause `[literal]`. The receiver is left as is.
    pub fn condition(&self, literal: Literal<V>) -> Self {
        let mut clauses = self.clauses.clone();
        clauses.push(Clause::new(vec![literal]));
        Self { clauses }
    }

    pub(crate) fn into_clauses(self) -> Vec<Clause<V>> {
        self.clauses
    }
}

impl<V: Display> Display for Clause<V> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.literals.len() != 1 {
            f.write_str("(")?;
        }
        let mut first_literal = true;
        for literal in &self.literals {
            if first_literal {
                first_literal = false;
            } else {
                f.write_str(" | ")?;
            }
            write!(f, "{}", literal)?;
        }
        if self.literals.len() != 1 {
            f.write_str(")")?;
        }
        Ok(())
    }
}

impl<V: Display> Display for Formula<V> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let mut first_clause = true;
        for clause in &self.clauses {
            if first_clause {
                first_clause = false;
            } else {
                f.write_str(" & ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn p(x: u32) -> Literal<u32> {
    Literal::Positive(x)
}

#[cfg(test)]
pub(crate) fn n(x: u32) -> Literal<u32> {
    Literal::Negative(x)
}

/// Random formulas of up to 3 literals per clause over at most 8 variables, small enough for
/// brute-force checking.
#[cfg(test)]
pub(crate) fn formula_3sat_strategy() -> impl proptest::strategy::Strategy<Value = Formula<u32>> {
    use proptest::prelude::*;

    let literal = (1u32..=8, any::<bool>()).prop_map(|(x, positive)| if positive { p(x) } else { n(x) });
    let clause = proptest::collection::vec(literal, 1..=3).prop_map(|literals| Clause::new(literals));
    proptest::collection::vec(clause, 0..16).prop_map(|clauses| Formula::new(clauses))
}
