// Domain layer: graphs, dominating sets and the ILP model
pub mod domain;

// Application layer: greedy and exact solvers, comparison harness
pub mod application;

// Infrastructure layer: graph generation, CLI, logging
pub mod infrastructure;

// Solver adapters: concrete implementations of SolverService
pub mod solver;

// Re-export commonly used types
pub use domain::{
    DominatingSet, DominatingSetError, Graph, SolverBackend, SolverConfig, SolverError,
    SolverResult, SolverService, Vertex,
};

pub use application::{Comparison, ComparisonHarness, ExactSolver, GreedySolver};

pub use infrastructure::GraphParameters;

pub use solver::SolverFactory;
#[cfg(feature = "cbc")]
pub use solver::CoinCbcSolver;
#[cfg(feature = "highs")]
pub use solver::HighsSolver;
