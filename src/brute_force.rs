use crate::formula::{Formula, VarId};

// Simple brute-force implementation for checking the solver in tests
pub(crate) fn solve_brute_force<V: VarId>(f: &Formula<V>) -> bool {
    let variables = f.variables();
    assert!(variables.len() <= 15); // just for safety

    fn assignment_for(assignment: u32, x: usize) -> bool {
        assignment & (1 << x) == 0
    }

    'search: for assignment in 0..2u32.pow(variables.len() as u32) {
        'clauses: for clause in f.clauses() {
            for literal in clause.literals() {
                let x = variables
                    .iter()
                    .position(|v| v == literal.variable())
                    .expect("variable comes from this formula");
                if assignment_for(assignment, x) == literal.is_positive() {
                    // this clause is satisfied, let's go to the next one
                    continue 'clauses;
                }
            }
            // if we got here, this clause was not satisfied, so this assignment is bogus
            continue 'search;
        }
        // if we got here, every clause was satisfied, so we're done and satisfiable
        return true;
    }
    // no assignment is valid
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::{n, p, Clause};

    #[test]
    fn brute_force_sat() {
        let c1 = Clause::new(vec![p(0), p(1)]);
        let c2 = Clause::new(vec![n(0)]);
        let f = Formula::new(vec![c1, c2]);

        assert!(solve_brute_force(&f));
    }

    #[test]
    fn brute_force_unsat() {
        let c1 = Clause::new(vec![p(0), p(1)]);
        let c2 = Clause::new(vec![n(0)]);
        let c3 = Clause::new(vec![n(1)]);
        let f = Formula::new(vec![c1, c2, c3]);

        assert!(!solve_brute_force(&f));
    }

    #[test]
    fn brute_force_empty() {
        assert!(solve_brute_force(&Formula::<u32>::new(vec![])));
        assert!(!solve_brute_force(&Formula::<u32>::new(vec![Clause::new(vec![])])));
    }
}
