// Domain module: graphs, dominating sets and the ILP model

pub mod dominating_set;
pub mod graph;
pub mod models;
pub mod solver_service;
pub mod value_objects;

pub use dominating_set::*;
pub use graph::*;
pub use models::*;
pub use solver_service::{SolverError, SolverService};
pub use value_objects::*;
