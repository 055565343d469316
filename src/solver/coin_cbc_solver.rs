// COIN-OR CBC Solver Adapter (through good_lp)

use crate::domain::{
    models::{OptimizationProblem, Solution as DomainSolution, SolverStatistics},
    solver_service::{Result, SolverError, SolverService},
    value_objects::SolutionStatus as DomainSolutionStatus,
};
use good_lp::{
    solvers::coin_cbc, variable, variables, Expression, ResolutionError,
    Solution as GoodLpSolutionTrait, SolverModel, Variable as GoodLpVariable,
};
use std::time::Instant;
use tracing::debug;

pub struct CoinCbcSolver;

impl CoinCbcSolver {
    pub fn new() -> Self {
        Self
    }
}

impl Default for CoinCbcSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SolverService for CoinCbcSolver {
    fn solve(&self, problem: &OptimizationProblem) -> Result<DomainSolution> {
        self.validate(problem)?;

        let start_time = Instant::now();

        let mut vars = variables!();
        let lp_variables: Vec<GoodLpVariable> = problem
            .variables
            .iter()
            .map(|var_def| vars.add(variable().binary().name(&var_def.name)))
            .collect();

        let mut obj_expr: Expression = 0.into();
        for (&coeff, &var) in problem.objective.coefficients.iter().zip(&lp_variables) {
            if coeff != 0.0 {
                obj_expr += coeff * var;
            }
        }

        // The CBC model handle lives in `lp_model` and is released on every
        // return path below.
        let mut lp_model = vars.minimise(obj_expr).using(coin_cbc::coin_cbc);
        let config = &problem.solver_config;
        if !config.verbose {
            lp_model.set_parameter("log", "0");
        }
        if let Some(limit) = config.time_limit {
            lp_model.set_parameter("seconds", &limit.as_secs_f64().to_string());
        }

        for constraint in &problem.constraints {
            let mut lhs: Expression = 0.into();
            for &i in &constraint.variables {
                lhs += lp_variables[i];
            }
            lp_model = lp_model.with(lhs.geq(constraint.bound));
        }

        let solution_result = lp_model.solve();
        let solve_time = start_time.elapsed().as_secs_f64() * 1000.0;
        let statistics = SolverStatistics::for_problem(problem, solve_time);
        debug!(solve_time_ms = solve_time, "CBC finished");

        match solution_result {
            Ok(sol) if !sol.model().is_proven_optimal() => Ok(DomainSolution::new(
                DomainSolutionStatus::TimeLimit,
                "CBC stopped before proving optimality",
            )
            .with_statistics(statistics)),
            Ok(sol) => {
                let variable_values: Vec<f64> =
                    lp_variables.iter().map(|&var| sol.value(var)).collect();
                let value = problem.evaluate(&variable_values);

                let mut solution = DomainSolution::optimal(value, variable_values);
                solution.statistics = statistics;
                solution.message = format!("Optimal solution found for '{}'", problem.name);
                Ok(solution)
            }
            Err(ResolutionError::Infeasible) => Ok(DomainSolution::new(
                DomainSolutionStatus::Infeasible,
                "Problem is infeasible: no solution satisfies all constraints",
            )
            .with_statistics(statistics)),
            Err(e) => Err(SolverError::ExecutionFailed(format!("{:?}", e))),
        }
    }

    fn name(&self) -> &str {
        "COIN-OR CBC"
    }
}
