/*!
# Adjacency Matrix

[`AdjacencyMatrixGraph`] stores a square `capacity x capacity` grid of booleans where cell
`(i, j)` is set iff there is an edge from the vertex in slot `i` to the vertex in slot `j`.
Vertex ids are translated into slots by a [`VertexIndex`]; the grid only knows about edges, so
its diagonal holds self-loops and nothing else.

The capacity follows a [`CapacityPolicy`]: it doubles once all slots are taken and halves once
less than a quarter (by default) of them is used. Both operations allocate a new grid.
*/

use std::{
    fmt::{self, Display},
    io::BufRead,
};

use fxhash::FxHashSet;
use itertools::{iproduct, Itertools};
use tracing::debug;

use crate::{
    error::Result,
    io::MatrixReader,
    ops::macros::impl_structural_eq,
    testing::test_graph_contract,
    utils::{compact_index, CapacityPolicy, Grid, VertexIndex},
};

use super::*;

/// Directed graph backed by a square boolean matrix.
///
/// # Example
/// ```
/// use digraphs::prelude::*;
///
/// let mut graph = AdjacencyMatrixGraph::new();
/// graph.add_edge(1, 0);
/// graph.add_edge(1, 1);
///
/// assert_eq!(graph.neighbors_of(1).unwrap(), vec![1, 0]);
/// assert!(graph.neighbors_of(3).is_err());
/// assert_eq!(graph.capacity(), 16);
/// assert_eq!(graph.to_string(), "1 1\n0 0\n");
/// ```
#[derive(Debug, Clone)]
pub struct AdjacencyMatrixGraph {
    matrix: Grid<bool>,
    index: VertexIndex,
    policy: CapacityPolicy,
}

impl Default for AdjacencyMatrixGraph {
    fn default() -> Self {
        Self::with_policy(CapacityPolicy::default())
    }
}

impl AdjacencyMatrixGraph {
    /// Creates an empty graph with the default [`CapacityPolicy`]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph whose capacity follows `policy`
    pub fn with_policy(policy: CapacityPolicy) -> Self {
        let capacity = policy.initial_for(0);
        Self {
            matrix: Grid::new(capacity, capacity),
            index: VertexIndex::new(),
            policy,
        }
    }

    /// Returns the number of vertices the graph can hold without growing
    pub fn capacity(&self) -> usize {
        self.matrix.rows()
    }

    /// Returns the capacity policy
    pub fn policy(&self) -> CapacityPolicy {
        self.policy
    }

    /// Returns the slot of `u` and registers `u` first if necessary
    fn register(&mut self, u: Vertex) -> usize {
        let (slot, is_new) = self.index.insert(u);
        if is_new {
            self.reserve(self.index.len());
        }
        slot
    }

    /// Grows the matrix to hold at least `len` vertices
    fn reserve(&mut self, len: NumVertices) {
        let capacity = self.policy.grown(self.capacity(), len);
        if capacity != self.capacity() {
            debug!(from = self.capacity(), to = capacity, "growing adjacency matrix");
            self.matrix = self.matrix.resized(capacity, capacity);
        }
    }

    fn slot(&self, u: Vertex) -> Result<usize> {
        self.index.slot_of(u).ok_or(GraphError::VertexNotFound(u))
    }
}

impl Graph for AdjacencyMatrixGraph {
    fn add_vertex(&mut self, u: Vertex) {
        self.register(u);
    }

    fn remove_vertex(&mut self, u: Vertex) {
        let Some(removed) = self.index.remove(u) else {
            return;
        };

        let capacity = self.policy.shrunk(self.capacity(), self.index.len());
        if capacity != self.capacity() {
            debug!(from = self.capacity(), to = capacity, "shrinking adjacency matrix");
        }

        let compact = |slot| compact_index(slot, removed);
        self.matrix = self.matrix.remapped(capacity, capacity, compact, compact);
    }

    fn add_edge(&mut self, u: Vertex, v: Vertex) {
        let i = self.register(u);
        let j = self.register(v);
        self.matrix.set(i, j, true);
    }

    fn remove_edge(&mut self, u: Vertex, v: Vertex) {
        if let (Some(i), Some(j)) = (self.index.slot_of(u), self.index.slot_of(v)) {
            self.matrix.set(i, j, false);
        }
    }

    fn neighbors_of(&self, u: Vertex) -> Result<Vec<Vertex>> {
        let i = self.slot(u)?;
        Ok(self.matrix.row(i)[..self.index.len()]
            .iter()
            .enumerate()
            .filter_map(|(j, &is_edge)| is_edge.then(|| self.index.vertex_at(j)))
            .collect())
    }

    fn vertices(&self) -> Vec<Vertex> {
        self.index.vertices().to_vec()
    }

    fn edges(&self) -> FxHashSet<Edge> {
        let n = self.index.len();
        iproduct!(0..n, 0..n)
            .filter(|&(i, j)| self.matrix.get(i, j))
            .map(|(i, j)| Edge(self.index.vertex_at(i), self.index.vertex_at(j)))
            .collect()
    }

    fn read_from_reader(&mut self, reader: &mut dyn BufRead) -> Result<()> {
        let raw = MatrixReader::square().read_matrix(reader)?;
        let n = raw.height();
        let capacity = self.policy.initial_for(n);

        let mut matrix = Grid::new(capacity, capacity);
        for (i, j) in iproduct!(0..n, 0..n) {
            if raw.get(i, j) != 0 {
                matrix.set(i, j, true);
            }
        }

        self.matrix = matrix;
        self.index = VertexIndex::identity(n);
        debug!(vertices = n, capacity, "loaded adjacency matrix");
        Ok(())
    }

    fn number_of_vertices(&self) -> NumVertices {
        self.index.len()
    }

    fn has_vertex(&self, u: Vertex) -> bool {
        self.index.contains(u)
    }

    fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        match (self.index.slot_of(u), self.index.slot_of(v)) {
            (Some(i), Some(j)) => self.matrix.get(i, j),
            _ => false,
        }
    }
}

impl_structural_eq!(AdjacencyMatrixGraph);

impl Display for AdjacencyMatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.index.len();
        for i in 0..n {
            writeln!(
                f,
                "{}",
                self.matrix.row(i)[..n].iter().map(|&x| u8::from(x)).join(" ")
            )?;
        }
        Ok(())
    }
}

// ---------- Testing ----------

test_graph_contract!(test_adjacency_matrix_contract, AdjacencyMatrixGraph);
