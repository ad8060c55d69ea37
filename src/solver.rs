use crate::assignment::Assignment;
use crate::formula::{Formula, Literal, VarId};
use crate::propagate::{condition_and_propagate, EmptyClausePolicy, Propagation};
use crate::SatResult;
use log::{debug, trace};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Strategy {
    /// One pass over the candidate variables. Each variable is tried positive, then negative;
    /// if both conflict the search gives up without revisiting earlier choices.
    SinglePass,
    /// Like `SinglePass`, but a double conflict resumes the most recent untried branch.
    Backtracking,
}

impl Default for Strategy {
    fn default() -> Self {
        Strategy::SinglePass
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SolverConfig {
    pub strategy: Strategy,
    pub empty_clauses: EmptyClausePolicy,
}

impl SolverConfig {
    pub fn strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn empty_clauses(mut self, policy: EmptyClausePolicy) -> Self {
        self.empty_clauses = policy;
        self
    }
}

pub struct Solver<'a, V> {
    formula: &'a Formula<V>,
    /// (positive, negative) literal of every variable, in first-seen order
    candidates: Vec<(Literal<V>, Literal<V>)>,
    config: SolverConfig,
}

/// One pending branch of the search: the formula left after a decision, what has been
/// assigned so far, and the index of the next candidate to decide.
#[derive(Debug)]
struct Branch<V> {
    formula: Formula<V>,
    assignment: Assignment<V>,
    next: usize,
}

impl<'a, V: VarId> Solver<'a, V> {
    pub fn new(formula: &'a Formula<V>) -> Self {
        Self::with_config(formula, SolverConfig::default())
    }

    pub fn with_config(formula: &'a Formula<V>, config: SolverConfig) -> Self {
        let candidates = formula.variables().into_iter().map(Literal::pair).collect();
        Self {
            formula,
            candidates,
            config,
        }
    }

    pub fn solve(&self) -> SatResult<V> {
        debug!(
            "solving {} clauses over {} variables with {:?}",
            self.formula.len(),
            self.candidates.len(),
            self.config
        );

        if self.config.empty_clauses == EmptyClausePolicy::Conflict && self.formula.clauses().any(|c| c.is_empty()) {
            debug!("input contains an empty clause");
            return SatResult::Failed;
        }

        let root = Branch {
            formula: self.formula.clone(),
            assignment: Assignment::new(),
            next: 0,
        };
        let result = match self.config.strategy {
            Strategy::SinglePass => self.solve_single_pass(root),
            Strategy::Backtracking => self.solve_backtracking(root),
        };

        match &result {
            SatResult::Satisfiable(assignment) => debug!("satisfied by {} literals", assignment.len()),
            SatResult::Failed => debug!("failed"),
        }
        result
    }

    fn solve_single_pass(&self, mut branch: Branch<V>) -> SatResult<V> {
        loop {
            let (v, not_v) = match self.next_decision(&mut branch) {
                None => return SatResult::Satisfiable(branch.assignment),
                Some(pair) => pair,
            };

            // The negative branch is only needed if the positive one conflicts
            let decision = match self.decide(&branch.formula, &v) {
                Some(decision) => decision,
                None => match self.decide(&branch.formula, &not_v) {
                    Some(decision) => decision,
                    None => {
                        debug!("both polarities of {:?} conflict", v.variable());
                        return SatResult::Failed;
                    }
                },
            };
            branch = self.descend(&branch, decision);
        }
    }

    fn solve_backtracking(&self, root: Branch<V>) -> SatResult<V> {
        let mut pending = vec![root];
        while let Some(mut branch) = pending.pop() {
            let (v, not_v) = match self.next_decision(&mut branch) {
                None if branch.formula.is_empty() => return SatResult::Satisfiable(branch.assignment),
                None => {
                    trace!("out of candidates with {} clauses left", branch.formula.len());
                    continue;
                }
                Some(pair) => pair,
            };

            // Pushed in reverse so the positive branch is explored first
            if let Some(decision) = self.decide(&branch.formula, &not_v) {
                pending.push(self.descend(&branch, decision));
            }
            if let Some(decision) = self.decide(&branch.formula, &v) {
                pending.push(self.descend(&branch, decision));
            }
        }
        SatResult::Failed
    }

    /// Advances `branch` to the next candidate that still needs a decision. `None` means the
    /// branch is finished: either its formula is empty or no candidates remain.
    fn next_decision(&self, branch: &mut Branch<V>) -> Option<(Literal<V>, Literal<V>)> {
        if branch.formula.is_empty() {
            return None;
        }
        while let Some((v, not_v)) = self.candidates.get(branch.next) {
            branch.next += 1;
            // Already implied by an earlier propagation, so it no longer occurs in the formula
            if branch.assignment.value(v.variable()).is_some() {
                continue;
            }
            return Some((v.clone(), not_v.clone()));
        }
        None
    }

    /// Conditions `formula` on `literal`. `None` if that conflicts.
    fn decide(&self, formula: &Formula<V>, literal: &Literal<V>) -> Option<(Literal<V>, Propagation<V>)> {
        match condition_and_propagate(formula, literal.clone(), self.config.empty_clauses) {
            Ok(propagation) => {
                trace!("decision {:?} implies {:?}", literal, propagation.resolved);
                Some((literal.clone(), propagation))
            }
            Err(conflict) => {
                trace!("decision {:?} conflicts: {}", literal, conflict);
                None
            }
        }
    }

    fn descend(&self, branch: &Branch<V>, (literal, propagation): (Literal<V>, Propagation<V>)) -> Branch<V> {
        let mut assignment = branch.assignment.clone();
        assignment.insert(literal);
        assignment.extend(propagation.resolved);
        Branch {
            formula: propagation.formula,
            assignment,
            next: branch.next,
        }
    }
}

/// Solves `formula` with the default configuration.
pub fn solve<V: VarId>(formula: &Formula<V>) -> SatResult<V> {
    Solver::new(formula).solve()
}
