use crate::formula::{Formula, Literal, VarId};
use std::fmt::{self, Display, Formatter};

/// A consistent partial assignment: literals in the order they were decided or implied, each
/// variable present in at most one polarity.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Assignment<V> {
    literals: Vec<Literal<V>>,
}

impl<V: VarId> Assignment<V> {
    pub fn new() -> Self {
        Self { literals: vec![] }
    }

    /// Adds `literal` unless it, or its negation, is already present. Returns whether it was
    /// added.
    pub fn insert(&mut self, literal: Literal<V>) -> bool {
        if self.literals.iter().any(|l| l.variable() == literal.variable()) {
            return false;
        }
        self.literals.push(literal);
        true
    }

    pub fn contains(&self, literal: &Literal<V>) -> bool {
        self.literals.contains(literal)
    }

    /// The truth value given to `variable`, if any.
    pub fn value(&self, variable: &V) -> Option<bool> {
        self.literals
            .iter()
            .find(|literal| literal.variable() == variable)
            .map(|literal| literal.is_positive())
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

    /// True if every clause of `formula` has at least one literal in this assignment.
    pub fn satisfies(&self, formula: &Formula<V>) -> bool {
        formula
            .clauses()
            .all(|clause| clause.literals().any(|literal| self.contains(literal)))
    }
}

impl<V: VarId> Default for Assignment<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VarId> Extend<Literal<V>> for Assignment<V> {
    fn extend<I: IntoIterator<Item = Literal<V>>>(&mut self, iter: I) {
        for literal in iter {
            self.insert(literal);
        }
    }
}

impl<V: Display> Display for Assignment<V> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str("{")?;
        let mut first = true;
        for literal in &self.literals {
            if first {
                first = false;
            } else {
                f.write_str(", ")?;
            }
            write!(f, "{}", literal)?;
        }
        f.write_str("}")
    }
}
