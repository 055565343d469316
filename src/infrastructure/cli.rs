use crate::domain::{SolverBackend, SolverConfig};
use crate::infrastructure::generator::{GraphParameters, DEFAULT_EDGES, DEFAULT_VERTICES};
use clap::{ArgAction, Parser};
use std::time::Duration;

/// Compare a greedy and an exact (ILP) minimum dominating set on a random graph
#[derive(Parser, Debug)]
#[command(name = "domset", version, about)]
pub struct Cli {
    /// Number of vertices of the random graph
    #[arg(short = 'n', long, default_value_t = DEFAULT_VERTICES)]
    pub vertices: usize,

    /// Number of edges of the random graph
    #[arg(short = 'm', long, default_value_t = DEFAULT_EDGES)]
    pub edges: usize,

    /// Seed for reproducible graphs
    #[arg(long)]
    pub seed: Option<u64>,

    /// ILP backend for the exact solver
    #[arg(long, value_enum, default_value_t = SolverBackend::Auto)]
    pub backend: SolverBackend,

    /// Give up on the exact solver after this many seconds
    #[arg(long, value_name = "SECONDS", value_parser = parse_seconds)]
    pub time_limit: Option<Duration>,

    /// Run both solvers at the same time
    #[arg(long)]
    pub parallel: bool,

    /// Show the ILP backend's own log
    #[arg(long)]
    pub solver_output: bool,

    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short = 'd', long = "debug", action = ArgAction::Count)]
    pub debug: u8,
}

impl Cli {
    pub fn graph_parameters(&self) -> GraphParameters {
        GraphParameters {
            vertices: self.vertices,
            edges: self.edges,
            seed: self.seed,
        }
    }

    pub fn solver_config(&self) -> SolverConfig {
        let config = SolverConfig::default()
            .with_backend(self.backend)
            .with_verbose(self.solver_output);
        match self.time_limit {
            Some(limit) => config.with_time_limit(limit),
            None => config,
        }
    }
}

fn parse_seconds(value: &str) -> Result<Duration, String> {
    let seconds: f64 = value
        .parse()
        .map_err(|e| format!("`{}` is not a number: {}", value, e))?;
    if seconds <= 0.0 {
        return Err(format!("time limit must be positive, got {}", seconds));
    }
    Duration::try_from_secs_f64(seconds).map_err(|e| e.to_string())
}
