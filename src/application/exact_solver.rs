use super::formulation;
use crate::domain::{
    DominatingSet, DominatingSetError, Graph, Result, SolutionStatus, SolverConfig, SolverError,
    SolverResult, SolverService,
};
use crate::solver::SolverFactory;
use std::fmt;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, instrument, warn};

/// Exact minimum dominating set through an ILP backend
///
/// Failures are surfaced to the caller unchanged; falling back to the greedy
/// result is the caller's decision.
#[derive(Clone)]
pub struct ExactSolver {
    config: SolverConfig,
    service: Arc<dyn SolverService>,
}

impl ExactSolver {
    /// Use the backend named in `config`
    pub fn new(config: SolverConfig) -> Result<Self> {
        let service = SolverFactory::create_from_backend(config.backend).map_err(unavailable)?;
        Ok(Self::with_service(config, service))
    }

    /// Use an explicit ILP backend
    pub fn with_service(config: SolverConfig, service: Arc<dyn SolverService>) -> Self {
        Self { config, service }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    pub fn backend_name(&self) -> &str {
        self.service.name()
    }

    #[instrument(
        name = "exact",
        skip_all,
        fields(vertices = graph.vertex_count(), backend = self.service.name())
    )]
    pub fn solve(&self, graph: &Graph) -> Result<DominatingSet> {
        if graph.is_empty() {
            return Ok(DominatingSet::new());
        }

        let problem = formulation::formulate(graph, &self.config);
        debug!(
            variables = problem.num_variables(),
            constraints = problem.constraints.len(),
            "covering model built"
        );

        let solution = self.service.solve(&problem).map_err(unavailable)?;

        match solution.status {
            SolutionStatus::Optimal => {
                let set = formulation::extract(graph, &solution)?;
                info!(
                    size = set.len(),
                    solve_time_ms = solution.statistics.solve_time_ms,
                    "exact solution found"
                );
                Ok(set)
            }
            SolutionStatus::Infeasible => {
                warn!(message = %solution.message, "covering model reported infeasible");
                Err(DominatingSetError::SolverInfeasible(solution.message))
            }
            SolutionStatus::TimeLimit => Err(DominatingSetError::SolverUnavailable(format!(
                "{} exceeded the time limit of {:?}: {}",
                self.service.name(),
                self.config.time_limit,
                solution.message
            ))),
        }
    }

    /// `solve` plus its wall-clock duration
    pub fn solve_timed(&self, graph: &Graph) -> Result<SolverResult> {
        let start = Instant::now();
        let set = self.solve(graph)?;
        Ok(SolverResult::new(set, start.elapsed()))
    }
}

impl fmt::Debug for ExactSolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExactSolver")
            .field("config", &self.config)
            .field("backend", &self.service.name())
            .finish()
    }
}

fn unavailable(err: SolverError) -> DominatingSetError {
    DominatingSetError::SolverUnavailable(err.to_string())
}
