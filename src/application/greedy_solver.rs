use crate::domain::{DominatingSet, Graph, SolverResult, Vertex};
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::{debug, instrument};

/// Greedy maximum-coverage heuristic for dominating sets
///
/// Repeatedly picks the undominated vertex with the most undominated
/// neighbors, adds it to the set, and marks it and its neighbors as
/// dominated. Ties go to the lowest vertex id, so the output is a pure
/// function of the graph. Gives the usual `1 + ln n` approximation bound.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver;

impl GreedySolver {
    pub fn new() -> Self {
        Self
    }

    #[instrument(name = "greedy", skip_all, fields(vertices = graph.vertex_count()))]
    pub fn solve(&self, graph: &Graph) -> DominatingSet {
        let mut remaining: BTreeSet<Vertex> = graph.vertices().collect();
        let mut dominating = DominatingSet::new();

        while let Some(v) = Self::best_candidate(graph, &remaining) {
            dominating.insert(v);
            remaining.remove(&v);
            for u in graph.neighbors(v) {
                remaining.remove(&u);
            }
        }

        debug!(size = dominating.len(), "greedy selection done");
        dominating
    }

    /// `solve` plus its wall-clock duration
    pub fn solve_timed(&self, graph: &Graph) -> SolverResult {
        let start = Instant::now();
        let set = self.solve(graph);
        SolverResult::new(set, start.elapsed())
    }

    /// Vertex of `remaining` covering the most other `remaining` vertices;
    /// `None` once everything is dominated
    fn best_candidate(graph: &Graph, remaining: &BTreeSet<Vertex>) -> Option<Vertex> {
        let mut best: Option<(Vertex, usize)> = None;
        for &v in remaining {
            let coverage = graph.neighbors(v).filter(|u| remaining.contains(u)).count();
            // strict comparison keeps the lowest id on ties
            if best.map_or(true, |(_, best_coverage)| coverage > best_coverage) {
                best = Some((v, coverage));
            }
        }
        best.map(|(v, _)| v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solve(n: usize, edges: &[(Vertex, Vertex)]) -> (Graph, DominatingSet) {
        let graph = Graph::from_edges(n, edges.iter().copied()).unwrap();
        let set = GreedySolver::new().solve(&graph);
        (graph, set)
    }

    #[test]
    fn empty_graph_gives_empty_set() {
        let (_, set) = solve(0, &[]);
        assert!(set.is_empty());
    }

    #[test]
    fn single_vertex() {
        let (_, set) = solve(1, &[]);
        assert_eq!(set.into_vec(), vec![0]);
    }

    #[test]
    fn edgeless_graph_needs_every_vertex() {
        let (graph, set) = solve(5, &[]);
        assert_eq!(set.into_vec(), graph.vertices().collect::<Vec<_>>());
    }

    #[test]
    fn path_of_three_picks_middle() {
        let (_, set) = solve(3, &[(0, 1), (1, 2)]);
        assert_eq!(set.into_vec(), vec![1]);
    }

    #[test]
    fn two_disjoint_edges_take_lowest_endpoints() {
        let (graph, set) = solve(4, &[(0, 1), (2, 3)]);
        assert!(graph.is_dominating_set(&set));
        assert_eq!(set.into_vec(), vec![0, 2]);
    }

    #[test]
    fn complete_graph_needs_one_vertex() {
        let edges: Vec<_> = (0..6)
            .flat_map(|u| (u + 1..6).map(move |v| (u, v)))
            .collect();
        let (_, set) = solve(6, &edges);
        assert_eq!(set.into_vec(), vec![0]);
    }

    #[test]
    fn star_picks_center() {
        let (_, set) = solve(6, &[(4, 0), (4, 1), (4, 2), (4, 3), (4, 5)]);
        assert_eq!(set.into_vec(), vec![4]);
    }

    #[test]
    fn coverage_is_recomputed_against_remaining_vertices() {
        // 0 has the highest static degree; afterwards 5 and 6 only cover
        // themselves plus each other, so exactly one of them is picked.
        let (graph, set) = solve(
            7,
            &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 5), (5, 6)],
        );
        assert!(graph.is_dominating_set(&set));
        assert_eq!(set.into_vec(), vec![0, 5]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let edges = [(0, 1), (1, 2), (2, 3), (3, 4), (4, 0), (0, 5)];
        let (graph, first) = solve(6, &edges);
        assert_eq!(GreedySolver::new().solve(&graph), first);
    }
}
