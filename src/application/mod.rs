// Application layer: the two dominating-set solvers and the harness comparing them

pub mod comparison;
pub mod exact_solver;
pub mod formulation;
pub mod greedy_solver;

pub use comparison::{ln_bound, Comparison, ComparisonHarness};
pub use exact_solver::ExactSolver;
pub use greedy_solver::GreedySolver;
