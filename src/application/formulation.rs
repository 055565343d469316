// Formulation: converts between graphs and the covering ILP
// x_v = 1 iff v is in the set; minimize Σ x_v subject to x_v + Σ_{u ∈ N(v)} x_u ≥ 1

use crate::domain::{
    Constraint, DominatingSet, DominatingSetError, Graph, ObjectiveFunction, OptimizationProblem,
    Result, Solution, SolverConfig, Variable,
};

/// Values above this count as "selected"; solvers may return near-binary floats
pub const SELECTION_THRESHOLD: f64 = 0.5;

/// Build the minimum dominating set ILP: one binary variable and one covering
/// constraint per vertex, variable `i` standing for vertex `i`
pub fn formulate(graph: &Graph, config: &SolverConfig) -> OptimizationProblem {
    let n = graph.vertex_count();
    let variables = graph
        .vertices()
        .map(|v| Variable::binary(format!("x_{}", v)))
        .collect();

    let mut problem = OptimizationProblem::new(ObjectiveFunction::minimize(vec![1.0; n]))
        .with_name(format!("dominating_set_{}v_{}e", n, graph.edge_count()))
        .with_variables(variables)
        .with_config(config.clone());

    for v in graph.vertices() {
        let closed_neighborhood = std::iter::once(v).chain(graph.neighbors(v));
        problem = problem.add_constraint(
            Constraint::covering(closed_neighborhood).with_name(format!("cover_{}", v)),
        );
    }

    problem
}

/// Read the dominating set out of an optimal assignment
///
/// A wrong-sized assignment or one that leaves a vertex undominated means
/// the backend broke the model's contract and is reported as
/// [`DominatingSetError::SolverInfeasible`].
pub fn extract(graph: &Graph, solution: &Solution) -> Result<DominatingSet> {
    let values = &solution.variable_values;
    if values.len() != graph.vertex_count() {
        return Err(DominatingSetError::SolverInfeasible(format!(
            "assignment has {} values for {} vertices",
            values.len(),
            graph.vertex_count()
        )));
    }

    let set: DominatingSet = values
        .iter()
        .enumerate()
        .filter(|(_, &value)| value > SELECTION_THRESHOLD)
        .map(|(v, _)| v)
        .collect();

    let undominated = graph.undominated(&set);
    if !undominated.is_empty() {
        return Err(DominatingSetError::SolverInfeasible(format!(
            "assignment leaves vertices {:?} undominated",
            undominated
        )));
    }

    Ok(set)
}
