use clap::Parser;
use domset::application::ln_bound;
use domset::infrastructure::{setup_logging, Cli};
use domset::{
    Comparison, ComparisonHarness, DominatingSetError, ExactSolver, Graph, GreedySolver,
    SolverResult,
};
use std::sync::Arc;
use tracing::warn;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let graph = Arc::new(cli.graph_parameters().generate()?);
    println!(
        "Random graph: {} vertices, {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    // Exact failures fall back to the greedy result here, not inside the solvers
    let harness = match ExactSolver::new(cli.solver_config()) {
        Ok(exact) => ComparisonHarness::new(exact),
        Err(e) => {
            warn!("exact solver unavailable: {}", e);
            print_fallback(&GreedySolver::new().solve_timed(&graph), &e);
            return Ok(());
        }
    };

    let comparison = if cli.parallel {
        harness.compare_concurrently(Arc::clone(&graph)).await
    } else {
        harness.compare(&graph)
    };

    match comparison {
        Ok(comparison) => print_comparison(&graph, &comparison, harness.exact().backend_name()),
        Err(e) => {
            warn!("exact solver failed: {}", e);
            print_fallback(&GreedySolver::new().solve_timed(&graph), &e);
        }
    }

    Ok(())
}

fn print_result(label: &str, result: &SolverResult) {
    println!("{} Dominating Set: {}", label, result.set);
    println!("Size of {} Dominating Set: {}", label, result.len());
    println!(
        "{} Time: {:.4} seconds",
        label,
        result.elapsed.as_secs_f64()
    );
}

fn print_comparison(graph: &Graph, comparison: &Comparison, backend: &str) {
    print_result("Greedy", &comparison.greedy);
    print_result(&format!("ILP ({})", backend), &comparison.exact);

    if let Some(ratio) = comparison.approximation_ratio() {
        println!(
            "Greedy/ILP size ratio: {:.3} (1 + ln n = {:.3})",
            ratio,
            ln_bound(graph.vertex_count())
        );
    }
    if !comparison.within_ln_bound(graph.vertex_count()) {
        warn!("greedy set exceeds the 1 + ln n approximation bound");
    }
}

fn print_fallback(greedy: &SolverResult, error: &DominatingSetError) {
    print_result("Greedy", greedy);
    println!("ILP Dominating Set: unavailable ({})", error);
}
