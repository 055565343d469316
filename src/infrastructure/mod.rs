// Infrastructure: graph source, command line and logging

pub mod cli;
pub mod generator;
pub mod logging;

pub use cli::Cli;
pub use generator::{gnm_random_graph, GraphParameters};
pub use logging::setup_logging;
