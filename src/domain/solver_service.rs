// Domain service interface for the external ILP capability
// The exact dominating-set solver only talks to this trait, never to a concrete backend

use super::models::{OptimizationProblem, Solution};

/// Error types for the solver service
#[derive(Debug, thiserror::Error)]
pub enum SolverError {
    #[error("Invalid problem: {0}")]
    InvalidProblem(String),

    #[error("Solver not available: {0}")]
    SolverNotAvailable(String),

    #[error("Solver execution failed: {0}")]
    ExecutionFailed(String),
}

pub type Result<T> = std::result::Result<T, SolverError>;

/// Domain service interface for ILP solvers
///
/// Accepts a minimization objective over binary variables plus covering
/// rows (`Σ x_i ≥ bound`), and returns either an assignment or a status saying
/// why there is none. Infeasibility and time limits are reported through
/// [`Solution::status`]; `Err` is reserved for backend failures.
pub trait SolverService: Send + Sync {
    /// Solve an optimization problem
    fn solve(&self, problem: &OptimizationProblem) -> Result<Solution>;

    /// Validate a problem without solving it
    fn validate(&self, problem: &OptimizationProblem) -> Result<()> {
        let mut errors = Vec::new();

        let num_vars = problem.num_variables();
        if num_vars == 0 {
            errors.push("Problem must have at least one variable".to_string());
        }

        if problem.objective.num_variables() != num_vars {
            errors.push(format!(
                "Number of variables ({}) doesn't match objective coefficients ({})",
                num_vars,
                problem.objective.num_variables()
            ));
        }

        for (i, constraint) in problem.constraints.iter().enumerate() {
            if constraint.variables.is_empty() {
                errors.push(format!(
                    "Constraint {} '{}' covers no variables and can never be satisfied",
                    i, constraint.name
                ));
            }
            if let Some(&index) = constraint.variables.iter().find(|&&index| index >= num_vars) {
                errors.push(format!(
                    "Constraint {} '{}' references variable {} but problem has {} variables",
                    i, constraint.name, index, num_vars
                ));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SolverError::InvalidProblem(errors.join("; ")))
        }
    }

    /// Get the name of this solver backend
    fn name(&self) -> &str;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Constraint, ObjectiveFunction, Variable};

    struct NoopSolver;

    impl SolverService for NoopSolver {
        fn solve(&self, _problem: &OptimizationProblem) -> Result<Solution> {
            Err(SolverError::SolverNotAvailable("noop".to_string()))
        }

        fn name(&self) -> &str {
            "noop"
        }
    }

    fn two_var_problem() -> OptimizationProblem {
        OptimizationProblem::new(ObjectiveFunction::minimize(vec![1.0, 1.0]))
            .with_variables(vec![Variable::binary("a"), Variable::binary("b")])
    }

    #[test]
    fn accepts_well_formed_problem() {
        let problem = two_var_problem().add_constraint(Constraint::covering([0, 1]));
        assert!(NoopSolver.validate(&problem).is_ok());
    }

    #[test]
    fn rejects_empty_problem() {
        let problem = OptimizationProblem::new(ObjectiveFunction::minimize(Vec::new()));
        assert!(matches!(
            NoopSolver.validate(&problem),
            Err(SolverError::InvalidProblem(_))
        ));
    }

    #[test]
    fn rejects_constraint_on_unknown_variable() {
        let problem = two_var_problem().add_constraint(Constraint::covering([0, 2]).with_name("c"));
        let err = NoopSolver.validate(&problem).unwrap_err();
        assert!(err.to_string().contains("references variable 2"));
    }

    #[test]
    fn rejects_empty_covering_row() {
        let problem = two_var_problem().add_constraint(Constraint::covering([]).with_name("cover_9"));
        let err = NoopSolver.validate(&problem).unwrap_err();
        assert!(err.to_string().contains("'cover_9' covers no variables"));
    }
}
