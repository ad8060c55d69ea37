mod assignment;
pub mod formula;
mod propagate;
mod solver;

#[cfg(test)]
mod brute_force;

pub use assignment::Assignment;
pub use formula::{Clause, Formula, Literal, VarId};
pub use propagate::{condition_and_propagate, propagate, Conflict, EmptyClausePolicy, Propagation};
pub use solver::{solve, Solver, SolverConfig, Strategy};

/// Outcome of a search. `Failed` means every explored path conflicted; with
/// [`Strategy::SinglePass`] that is not a proof of unsatisfiability.
#[derive(PartialEq, Clone, Debug)]
pub enum SatResult<V> {
    Satisfiable(Assignment<V>),
    Failed,
}

impl<V> SatResult<V> {
    pub fn is_satisfiable(&self) -> bool {
        matches!(self, SatResult::Satisfiable(_))
    }

    pub fn assignment(&self) -> Option<&Assignment<V>> {
        match self {
            SatResult::Satisfiable(assignment) => Some(assignment),
            SatResult::Failed => None,
        }
    }
}
