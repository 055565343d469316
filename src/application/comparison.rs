use super::{ExactSolver, GreedySolver};
use crate::domain::{DominatingSetError, Graph, Result, SolverResult};
use std::sync::Arc;
use tokio::task::JoinError;
use tracing::{info, instrument};

/// Outcome of running both solvers on the same graph
#[derive(Debug, Clone)]
pub struct Comparison {
    pub greedy: SolverResult,
    pub exact: SolverResult,
}

impl Comparison {
    /// How many more vertices the greedy set uses than the minimum
    pub fn size_gap(&self) -> usize {
        self.greedy.len().saturating_sub(self.exact.len())
    }

    /// `|greedy| / |exact|`, or `None` when the exact set is empty
    pub fn approximation_ratio(&self) -> Option<f64> {
        if self.exact.is_empty() {
            None
        } else {
            Some(self.greedy.len() as f64 / self.exact.len() as f64)
        }
    }

    /// Whether the greedy set stays within the `1 + ln n` factor of the minimum
    pub fn within_ln_bound(&self, vertex_count: usize) -> bool {
        self.approximation_ratio()
            .map_or(true, |ratio| ratio <= ln_bound(vertex_count))
    }
}

/// Classic greedy approximation factor `1 + ln n` (1 for tiny graphs)
pub fn ln_bound(vertex_count: usize) -> f64 {
    1.0 + (vertex_count.max(1) as f64).ln()
}

/// Runs the greedy and exact solvers side by side, timing each call
#[derive(Debug, Clone)]
pub struct ComparisonHarness {
    greedy: GreedySolver,
    exact: ExactSolver,
}

impl ComparisonHarness {
    pub fn new(exact: ExactSolver) -> Self {
        Self {
            greedy: GreedySolver::new(),
            exact,
        }
    }

    pub fn exact(&self) -> &ExactSolver {
        &self.exact
    }

    /// Run greedy then exact on the same graph
    #[instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub fn compare(&self, graph: &Graph) -> Result<Comparison> {
        let greedy = self.greedy.solve_timed(graph);
        let exact = self.exact.solve_timed(graph)?;
        Ok(report(Comparison { greedy, exact }))
    }

    /// Run both solvers in parallel on blocking tasks sharing one graph
    #[instrument(skip_all, fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
    pub async fn compare_concurrently(&self, graph: Arc<Graph>) -> Result<Comparison> {
        let greedy_solver = self.greedy;
        let greedy_graph = Arc::clone(&graph);
        let greedy_task =
            tokio::task::spawn_blocking(move || greedy_solver.solve_timed(&greedy_graph));

        let exact_solver = self.exact.clone();
        let exact_task = tokio::task::spawn_blocking(move || exact_solver.solve_timed(&graph));

        let (greedy, exact) = tokio::join!(greedy_task, exact_task);
        let greedy = greedy.map_err(join_failure)?;
        let exact = exact.map_err(join_failure)??;
        Ok(report(Comparison { greedy, exact }))
    }
}

fn report(comparison: Comparison) -> Comparison {
    info!(
        greedy_size = comparison.greedy.len(),
        exact_size = comparison.exact.len(),
        greedy_ms = comparison.greedy.elapsed.as_secs_f64() * 1000.0,
        exact_ms = comparison.exact.elapsed.as_secs_f64() * 1000.0,
        "comparison finished"
    );
    comparison
}

fn join_failure(err: JoinError) -> DominatingSetError {
    if err.is_panic() {
        std::panic::resume_unwind(err.into_panic());
    }
    DominatingSetError::SolverUnavailable(format!("solver task cancelled: {}", err))
}
