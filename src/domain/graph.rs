use std::collections::BTreeSet;

use super::dominating_set::{DominatingSet, DominatingSetError, Result};

/// Vertex identifier, always in `0..graph.vertex_count()`
pub type Vertex = usize;

/// Simple undirected graph on the vertices `0..n`
///
/// Every edge is checked on insertion, so a `Graph` value never holds a
/// self-loop, a multi-edge or an endpoint outside the vertex range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    adjacency: Vec<BTreeSet<Vertex>>,
    edge_count: usize,
}

impl Graph {
    /// Graph with `n` isolated vertices
    pub fn new(n: usize) -> Self {
        Self {
            adjacency: vec![BTreeSet::new(); n],
            edge_count: 0,
        }
    }

    pub fn from_edges<I>(n: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (Vertex, Vertex)>,
    {
        let mut graph = Self::new(n);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Add the undirected edge `u-v`. Repeated edges are ignored.
    pub fn add_edge(&mut self, u: Vertex, v: Vertex) -> Result<()> {
        let n = self.vertex_count();
        if u >= n || v >= n {
            return Err(DominatingSetError::InvalidGraph(format!(
                "edge ({}, {}) references a vertex outside 0..{}",
                u, v, n
            )));
        }
        if u == v {
            return Err(DominatingSetError::InvalidGraph(format!(
                "self-loop on vertex {}",
                u
            )));
        }

        if self.adjacency[u].insert(v) {
            self.adjacency[v].insert(u);
            self.edge_count += 1;
        }
        Ok(())
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn contains_vertex(&self, v: Vertex) -> bool {
        v < self.vertex_count()
    }

    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        0..self.vertex_count()
    }

    /// Neighbors of `v` in ascending order; empty for an unknown vertex
    pub fn neighbors(&self, v: Vertex) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency
            .get(v)
            .into_iter()
            .flat_map(|neighbors| neighbors.iter().copied())
    }

    pub fn degree(&self, v: Vertex) -> usize {
        self.adjacency.get(v).map_or(0, BTreeSet::len)
    }

    /// Each edge once, as `(u, v)` with `u < v`, in ascending order
    pub fn edges(&self) -> impl Iterator<Item = (Vertex, Vertex)> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, neighbors)| neighbors.range(u + 1..).map(move |&v| (u, v)))
    }

    /// Vertices neither in `set` nor adjacent to a member of it
    pub fn undominated(&self, set: &DominatingSet) -> Vec<Vertex> {
        self.vertices()
            .filter(|&v| !set.contains(v) && !self.neighbors(v).any(|u| set.contains(u)))
            .collect()
    }

    pub fn is_dominating_set(&self, set: &DominatingSet) -> bool {
        set.iter().all(|v| self.contains_vertex(v)) && self.undominated(set).is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn path3() -> Graph {
        Graph::from_edges(3, [(0, 1), (1, 2)]).unwrap()
    }

    #[test]
    fn rejects_out_of_range_endpoint() {
        let err = Graph::from_edges(3, [(0, 3)]).unwrap_err();
        assert!(matches!(err, DominatingSetError::InvalidGraph(_)));
    }

    #[test]
    fn rejects_self_loop() {
        let mut graph = Graph::new(2);
        assert!(matches!(
            graph.add_edge(1, 1),
            Err(DominatingSetError::InvalidGraph(_))
        ));
    }

    #[test]
    fn repeated_edges_are_collapsed() {
        let graph = Graph::from_edges(2, [(0, 1), (1, 0), (0, 1)]).unwrap();
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.degree(0), 1);
        assert_eq!(graph.edges().collect::<Vec<_>>(), vec![(0, 1)]);
    }

    #[test]
    fn neighbors_are_sorted_and_symmetric() {
        let graph = Graph::from_edges(4, [(3, 0), (0, 2), (1, 0)]).unwrap();
        assert_eq!(graph.neighbors(0).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(graph.neighbors(3).collect::<Vec<_>>(), vec![0]);
        assert_eq!(graph.neighbors(9).count(), 0);
    }

    #[test]
    fn domination_check() {
        let graph = path3();
        assert!(graph.is_dominating_set(&[1].into_iter().collect()));
        assert!(graph.is_dominating_set(&[0, 2].into_iter().collect()));
        assert!(!graph.is_dominating_set(&[0].into_iter().collect()));
        assert_eq!(graph.undominated(&[0].into_iter().collect()), vec![2]);
    }

    #[test]
    fn foreign_vertex_never_dominates() {
        let graph = path3();
        assert!(!graph.is_dominating_set(&[1, 7].into_iter().collect()));
    }

    #[test]
    fn empty_set_dominates_empty_graph() {
        assert!(Graph::new(0).is_dominating_set(&DominatingSet::default()));
    }
}
