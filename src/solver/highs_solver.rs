// HiGHS Solver Adapter
// Translates the domain ILP model to the HiGHS row-wise API

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::SolutionStatus as DomainSolutionStatus,
};
use highs::{HighsModelStatus, RowProblem, Sense};
use std::time::Instant;
use tracing::debug;

pub struct HighsSolver;

impl HighsSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for HighsSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for HighsSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        self.validate(problem)?;

        let start_time = Instant::now();

        // Variables first, then rows referencing them
        let mut pb = RowProblem::default();
        let mut cols = Vec::with_capacity(problem.num_variables());

        for &cost in &problem.objective.coefficients {
            cols.push(pb.add_integer_column(cost, 0.0..=1.0));
        }

        for constraint in &problem.constraints {
            let terms: Vec<_> = constraint.variables.iter().map(|&i| (cols[i], 1.0)).collect();
            pb.add_row(constraint.bound.., &terms);
        }

        // The model owns the native HiGHS handle; it is freed when `model`
        // (or the solved model it turns into) goes out of scope.
        let mut model = pb.optimise(Sense::Minimise);
        let config = &problem.solver_config;
        model.set_option("output_flag", config.verbose);
        model.set_option("mip_rel_gap", 0.0);
        if let Some(limit) = config.time_limit {
            model.set_option("time_limit", limit.as_secs_f64());
        }

        let solved = model.try_solve().map_err(|status| {
            SolverError::ExecutionFailed(format!("HiGHS failed to run: {:?}", status))
        })?;
        let solve_time = start_time.elapsed().as_secs_f64() * 1000.0;
        let statistics = SolverStatistics::for_problem(problem, solve_time);
        debug!(
            status = ?solved.status(),
            solve_time_ms = solve_time,
            "HiGHS finished"
        );

        match solved.status() {
            HighsModelStatus::Optimal => {
                let variable_values = solved.get_solution().columns().to_vec();
                let value = problem.evaluate(&variable_values);

                let mut solution = DomainSolution::optimal(value, variable_values);
                solution.statistics = statistics;
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                Ok(solution)
            }
            HighsModelStatus::Infeasible | HighsModelStatus::UnboundedOrInfeasible => {
                Ok(DomainSolution::new(
                    DomainSolutionStatus::Infeasible,
                    "Problem is infeasible: no solution satisfies all constraints",
                )
                .with_statistics(statistics))
            }
            HighsModelStatus::ReachedTimeLimit => Ok(DomainSolution::new(
                DomainSolutionStatus::TimeLimit,
                "Time limit reached before optimality was proven",
            )
            .with_statistics(statistics)),
            status => Err(SolverError::ExecutionFailed(format!(
                "HiGHS solver returned status: {:?}",
                status
            ))),
        }
    }

    fn name(&self) -> &str {
        "HiGHS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{Constraint, ObjectiveFunction, Variable};

    #[test]
    fn solves_small_covering_problem() {
        // x0 + x1 >= 1, x1 + x2 >= 1: picking x1 alone is optimal
        let problem = OptimizationProblem::new(ObjectiveFunction::minimize(vec![1.0; 3]))
            .with_variables((0..3).map(|i| Variable::binary(format!("x{}", i))).collect())
            .add_constraint(Constraint::covering([0, 1]))
            .add_constraint(Constraint::covering([1, 2]));

        let solution = HighsSolver::new().solve(&problem).unwrap();
        assert!(solution.is_optimal());
        assert_eq!(solution.optimal_value.map(f64::round), Some(1.0));
        assert!(solution.variable_values[1] > 0.5);
        assert_eq!(solution.statistics.num_variables, 3);
        assert_eq!(solution.statistics.num_constraints, 2);
    }

    #[test]
    fn disjoint_rows_need_one_pick_each() {
        // {x0, x1} and {x2, x3} share nothing
        let problem = OptimizationProblem::new(ObjectiveFunction::minimize(vec![1.0; 4]))
            .with_variables((0..4).map(|i| Variable::binary(format!("x{}", i))).collect())
            .add_constraint(Constraint::covering([0, 1]))
            .add_constraint(Constraint::covering([2, 3]));

        let solution = HighsSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.optimal_value.map(f64::round), Some(2.0));
        assert!(solution.variable_values[0] + solution.variable_values[1] > 0.5);
        assert!(solution.variable_values[2] + solution.variable_values[3] > 0.5);
    }

    #[test]
    fn singleton_row_forces_its_variable() {
        let problem = OptimizationProblem::new(ObjectiveFunction::minimize(vec![1.0; 3]))
            .with_variables((0..3).map(|i| Variable::binary(format!("x{}", i))).collect())
            .add_constraint(Constraint::covering([2]))
            .add_constraint(Constraint::covering([0, 2]));

        let solution = HighsSolver::new().solve(&problem).unwrap();
        assert_eq!(solution.optimal_value.map(f64::round), Some(1.0));
        assert_eq!(solution.variable_values[2].round(), 1.0);
        assert_eq!(solution.variable_values[0].round(), 0.0);
    }

    #[test]
    fn empty_row_is_rejected_before_solving() {
        let problem = OptimizationProblem::new(ObjectiveFunction::minimize(vec![1.0]))
            .with_variables(vec![Variable::binary("x0")])
            .add_constraint(Constraint::covering([]));

        assert!(matches!(
            HighsSolver::new().solve(&problem),
            Err(SolverError::InvalidProblem(_))
        ));
    }
}
