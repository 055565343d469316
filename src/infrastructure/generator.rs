// Infrastructure: random graph source
// Uniform G(n, m) graphs: exactly m distinct edges drawn from all n(n-1)/2 pairs

use crate::domain::{DominatingSetError, Graph, Result};
use rand::rngs::StdRng;
use rand::seq::index;
use rand::{Rng, SeedableRng};

pub const DEFAULT_VERTICES: usize = 250;
pub const DEFAULT_EDGES: usize = 760;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphParameters {
    pub vertices: usize,
    pub edges: usize,
    pub seed: Option<u64>,
}

impl Default for GraphParameters {
    fn default() -> Self {
        Self {
            vertices: DEFAULT_VERTICES,
            edges: DEFAULT_EDGES,
            seed: None,
        }
    }
}

impl GraphParameters {
    pub fn new(vertices: usize, edges: usize) -> Self {
        Self {
            vertices,
            edges,
            seed: None,
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Build the graph; a fixed seed gives the same graph every time
    pub fn generate(&self) -> Result<Graph> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        gnm_random_graph(self.vertices, self.edges, &mut rng)
    }
}

/// n(n-1)/2, or `None` when that count does not fit in a `usize`
pub fn max_edges(vertices: usize) -> Option<usize> {
    let others = vertices.saturating_sub(1);
    if vertices % 2 == 0 {
        (vertices / 2).checked_mul(others)
    } else {
        vertices.checked_mul(others / 2)
    }
}

pub fn gnm_random_graph(vertices: usize, edges: usize, rng: &mut impl Rng) -> Result<Graph> {
    let pair_count = max_edges(vertices).ok_or_else(|| {
        DominatingSetError::InvalidGraph(format!(
            "{} vertices have more vertex pairs than can be counted",
            vertices
        ))
    })?;
    if edges > pair_count {
        return Err(DominatingSetError::InvalidGraph(format!(
            "{} edges requested but a simple graph on {} vertices has at most {}",
            edges, vertices, pair_count
        )));
    }

    let mut picks = index::sample(rng, pair_count, edges).into_vec();
    picks.sort_unstable();

    // Pair k enumerates (u, v), u < v, row by row; row u holds n-1-u pairs.
    let mut graph = Graph::new(vertices);
    let mut u = 0;
    let mut row_start = 0;
    for k in picks {
        while k >= row_start + (vertices - 1 - u) {
            row_start += vertices - 1 - u;
            u += 1;
        }
        graph.add_edge(u, u + 1 + (k - row_start))?;
    }

    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn produces_exact_edge_count() {
        let graph = GraphParameters::new(40, 100).with_seed(7).generate().unwrap();
        assert_eq!(graph.vertex_count(), 40);
        assert_eq!(graph.edge_count(), 100);
    }

    #[test]
    fn same_seed_same_graph() {
        let params = GraphParameters::new(30, 45).with_seed(42);
        assert_eq!(params.generate().unwrap(), params.generate().unwrap());
    }

    #[test]
    fn complete_graph_when_all_pairs_requested() {
        let graph = GraphParameters::new(6, 15).with_seed(1).generate().unwrap();
        assert!(graph.vertices().all(|v| graph.degree(v) == 5));
    }

    #[test]
    fn too_many_edges_is_invalid() {
        let err = GraphParameters::new(4, 7).generate().unwrap_err();
        assert!(matches!(err, DominatingSetError::InvalidGraph(_)));
    }

    #[test]
    fn pair_count_overflow_is_invalid() {
        assert_eq!(max_edges(usize::MAX), None);
        let err = GraphParameters::new(usize::MAX, 1).generate().unwrap_err();
        assert!(matches!(err, DominatingSetError::InvalidGraph(_)));
    }

    #[test]
    fn pair_count_of_small_graphs() {
        assert_eq!(max_edges(0), Some(0));
        assert_eq!(max_edges(1), Some(0));
        assert_eq!(max_edges(250), Some(31_125));
        assert_eq!(max_edges(7), Some(21));
    }

    #[test]
    fn trivial_sizes() {
        assert!(GraphParameters::new(0, 0).generate().unwrap().is_empty());
        assert_eq!(GraphParameters::new(1, 0).generate().unwrap().edge_count(), 0);
    }

    #[test]
    fn defaults_match_reference_run() {
        let params = GraphParameters::default();
        assert_eq!((params.vertices, params.edges), (250, 760));
    }
}
