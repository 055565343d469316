// Result types shared by both dominating-set solvers

use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

use super::graph::Vertex;

/// Error types for dominating-set solving
#[derive(Debug, thiserror::Error)]
pub enum DominatingSetError {
    #[error("Invalid graph: {0}")]
    InvalidGraph(String),

    /// The covering model came back infeasible or inconsistent. Selecting every
    /// vertex is always feasible, so this points at a defect.
    #[error("ILP solver reported an infeasible model: {0}")]
    SolverInfeasible(String),

    #[error("ILP solver unavailable: {0}")]
    SolverUnavailable(String),
}

pub type Result<T> = std::result::Result<T, DominatingSetError>;

/// Set of vertices, iterated in ascending order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DominatingSet {
    vertices: BTreeSet<Vertex>,
}

impl DominatingSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, v: Vertex) -> bool {
        self.vertices.insert(v)
    }

    pub fn contains(&self, v: Vertex) -> bool {
        self.vertices.contains(&v)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    pub fn into_vec(self) -> Vec<Vertex> {
        self.vertices.into_iter().collect()
    }
}

impl FromIterator<Vertex> for DominatingSet {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        Self {
            vertices: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for DominatingSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.vertices.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", v)?;
        }
        write!(f, "}}")
    }
}

/// A dominating set together with the wall-clock time spent computing it
#[derive(Debug, Clone)]
pub struct SolverResult {
    pub set: DominatingSet,
    pub elapsed: Duration,
}

impl SolverResult {
    pub fn new(set: DominatingSet, elapsed: Duration) -> Self {
        Self { set, elapsed }
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_lists_vertices_in_order() {
        let set: DominatingSet = [7, 0, 4].into_iter().collect();
        assert_eq!(set.to_string(), "{0, 4, 7}");
        assert_eq!(DominatingSet::new().to_string(), "{}");
    }

    #[test]
    fn insert_reports_new_members() {
        let mut set = DominatingSet::new();
        assert!(set.insert(3));
        assert!(!set.insert(3));
        assert_eq!(set.into_vec(), vec![3]);
    }
}
