/*!
# Incidence Matrix

[`IncidenceMatrixGraph`] stores one row per vertex slot and one column per edge. A column holds
exactly one [`SOURCE`] and one [`DESTINATION`] marker, or a single [`LOOP`] marker for a
self-loop. Columns `0..number_of_edges()` are live, everything to the right of them is zero.

Vertex rows and edge columns grow and shrink independently, each following its own
[`CapacityPolicy`].
*/

use std::{
    fmt::{self, Display},
    io::BufRead,
};

use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::debug;

use crate::{
    error::Result,
    io::{format_error, MatrixReader},
    ops::macros::impl_structural_eq,
    testing::test_graph_contract,
    utils::{compact_index, CapacityPolicy, Grid, VertexIndex},
};

use super::*;

/// Marker of the vertex an edge leaves
pub const SOURCE: i8 = 1;
/// Marker of the vertex an edge enters
pub const DESTINATION: i8 = -1;
/// Marker of a vertex that is both endpoints of its edge
pub const LOOP: i8 = 2;

/// Directed graph backed by a vertex-by-edge incidence matrix.
///
/// Adding an edge that already exists does nothing. Querying the neighbors of an unknown vertex
/// yields an empty list unless the graph was switched to [`strict`](Self::strict) mode.
///
/// # Example
/// ```
/// use digraphs::prelude::*;
///
/// let mut graph = IncidenceMatrixGraph::new();
/// graph.add_edge(0, 1);
/// graph.add_edge(0, 1);
/// graph.add_edge(1, 1);
///
/// assert_eq!(graph.number_of_edges(), 2);
/// assert_eq!(graph.to_string(), "1 0\n-1 2\n");
/// assert!(graph.neighbors_of(9).unwrap().is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct IncidenceMatrixGraph {
    matrix: Grid<i8>,
    index: VertexIndex,
    num_edges: NumEdges,
    vertex_policy: CapacityPolicy,
    edge_policy: CapacityPolicy,
    strict: bool,
}

impl Default for IncidenceMatrixGraph {
    fn default() -> Self {
        Self::with_policies(CapacityPolicy::default(), CapacityPolicy::default())
    }
}

impl IncidenceMatrixGraph {
    /// Creates an empty graph with default capacity policies
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph whose rows follow `vertex_policy` and whose columns follow
    /// `edge_policy`
    pub fn with_policies(vertex_policy: CapacityPolicy, edge_policy: CapacityPolicy) -> Self {
        Self {
            matrix: Grid::new(vertex_policy.initial_for(0), edge_policy.initial_for(0)),
            index: VertexIndex::new(),
            num_edges: 0,
            vertex_policy,
            edge_policy,
            strict: false,
        }
    }

    /// If `strict` is set, [`Graph::neighbors_of`] reports unknown vertices as
    /// [`GraphError::VertexNotFound`]
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Returns *true* if unknown vertices are reported as errors
    pub fn is_strict(&self) -> bool {
        self.strict
    }

    /// Returns the number of vertices the graph can hold without growing
    pub fn vertex_capacity(&self) -> usize {
        self.matrix.rows()
    }

    /// Returns the number of edges the graph can hold without growing
    pub fn edge_capacity(&self) -> usize {
        self.matrix.cols()
    }

    /// Returns the slot of `u` and registers `u` first if necessary
    fn register(&mut self, u: Vertex) -> usize {
        let (slot, is_new) = self.index.insert(u);
        if is_new {
            let rows = self
                .vertex_policy
                .grown(self.vertex_capacity(), self.index.len());
            if rows != self.vertex_capacity() {
                debug!(from = self.vertex_capacity(), to = rows, "growing vertex rows");
                self.matrix = self.matrix.resized(rows, self.edge_capacity());
            }
        }
        slot
    }

    /// Returns the column of the edge from slot `i` to slot `j`
    fn find_edge(&self, i: usize, j: usize) -> Option<usize> {
        (0..self.num_edges).find(|&col| {
            if i == j {
                self.matrix.get(i, col) == LOOP
            } else {
                self.matrix.get(i, col) == SOURCE && self.matrix.get(j, col) == DESTINATION
            }
        })
    }

    /// Returns the slots of the source and destination of the edge in `col`
    fn endpoints(&self, col: usize) -> Option<(usize, usize)> {
        let mut source = None;
        let mut destination = None;
        for slot in 0..self.index.len() {
            match self.matrix.get(slot, col) {
                SOURCE => source = Some(slot),
                DESTINATION => destination = Some(slot),
                LOOP => return Some((slot, slot)),
                _ => {}
            }
        }
        source.zip(destination)
    }

    /// Appends a column for the edge between two registered slots unless it already exists
    fn push_edge(&mut self, i: usize, j: usize) {
        if self.find_edge(i, j).is_some() {
            return;
        }

        let cols = self
            .edge_policy
            .grown(self.edge_capacity(), self.num_edges + 1);
        if cols != self.edge_capacity() {
            debug!(from = self.edge_capacity(), to = cols, "growing edge columns");
            self.matrix = self.matrix.resized(self.vertex_capacity(), cols);
        }

        let col = self.num_edges;
        if i == j {
            self.matrix.set(i, col, LOOP);
        } else {
            self.matrix.set(i, col, SOURCE);
            self.matrix.set(j, col, DESTINATION);
        }
        self.num_edges += 1;
    }

    /// Removes a live column and shifts all columns to its right one to the left
    fn remove_column(&mut self, col: usize) {
        debug_assert!(col < self.num_edges);
        self.num_edges -= 1;

        let cols = self.edge_policy.shrunk(self.edge_capacity(), self.num_edges);
        if cols != self.edge_capacity() {
            debug!(from = self.edge_capacity(), to = cols, "shrinking edge columns");
        }

        self.matrix =
            self.matrix
                .remapped(self.vertex_capacity(), cols, Some, |c| compact_index(c, col));
    }
}

impl Graph for IncidenceMatrixGraph {
    fn add_vertex(&mut self, u: Vertex) {
        self.register(u);
    }

    fn remove_vertex(&mut self, u: Vertex) {
        let Some(slot) = self.index.slot_of(u) else {
            return;
        };

        let incident = (0..self.num_edges)
            .filter(|&col| self.matrix.get(slot, col) != 0)
            .collect_vec();
        for col in incident.into_iter().rev() {
            self.remove_column(col);
        }

        self.index.remove(u);
        let rows = self
            .vertex_policy
            .shrunk(self.vertex_capacity(), self.index.len());
        if rows != self.vertex_capacity() {
            debug!(from = self.vertex_capacity(), to = rows, "shrinking vertex rows");
        }

        self.matrix = self.matrix.remapped(
            rows,
            self.edge_capacity(),
            |r| compact_index(r, slot),
            Some,
        );
    }

    fn add_edge(&mut self, u: Vertex, v: Vertex) {
        let i = self.register(u);
        let j = self.register(v);
        self.push_edge(i, j);
    }

    fn remove_edge(&mut self, u: Vertex, v: Vertex) {
        let (Some(i), Some(j)) = (self.index.slot_of(u), self.index.slot_of(v)) else {
            return;
        };

        if let Some(col) = self.find_edge(i, j) {
            self.remove_column(col);
        }
    }

    fn neighbors_of(&self, u: Vertex) -> Result<Vec<Vertex>> {
        let Some(i) = self.index.slot_of(u) else {
            return if self.strict {
                Err(GraphError::VertexNotFound(u))
            } else {
                Ok(Vec::new())
            };
        };

        let mut nbs = Vec::new();
        for col in 0..self.num_edges {
            match self.matrix.get(i, col) {
                SOURCE => {
                    let destination = (0..self.index.len())
                        .find(|&j| self.matrix.get(j, col) == DESTINATION);
                    debug_assert!(destination.is_some());
                    if let Some(j) = destination {
                        nbs.push(self.index.vertex_at(j));
                    }
                }
                LOOP => nbs.push(u),
                _ => {}
            }
        }

        Ok(nbs)
    }

    fn vertices(&self) -> Vec<Vertex> {
        self.index.vertices().to_vec()
    }

    fn edges(&self) -> FxHashSet<Edge> {
        (0..self.num_edges)
            .filter_map(|col| self.endpoints(col))
            .map(|(i, j)| Edge(self.index.vertex_at(i), self.index.vertex_at(j)))
            .collect()
    }

    fn read_from_reader(&mut self, reader: &mut dyn BufRead) -> Result<()> {
        let raw = MatrixReader::rectangular().read_matrix(reader)?;
        let (n, m) = (raw.height(), raw.width());

        self.index = VertexIndex::identity(n);
        self.matrix = Grid::new(
            self.vertex_policy.initial_for(n),
            self.edge_policy.initial_for(m),
        );
        self.num_edges = 0;

        for col in 0..m {
            let mut source = None;
            let mut destination = None;
            let mut looped = None;
            let mut marks = 0;
            let mut first_line = None;

            for row in 0..n {
                let value = raw.get(row, col);
                if value == 0 {
                    continue;
                }

                let line = raw.line_of(row);
                first_line.get_or_insert(line);
                marks += 1;

                match value {
                    1 => source = Some(row),
                    -1 => destination = Some(row),
                    2 => looped = Some(row),
                    _ => {
                        return Err(format_error!(
                            line,
                            "unexpected value `{value}` in column {}",
                            col + 1
                        ))
                    }
                }
            }

            // all-zero columns carry no edge
            let Some(line) = first_line else {
                continue;
            };

            match (source, destination, looped, marks) {
                (Some(i), Some(j), None, 2) => self.push_edge(i, j),
                (None, None, Some(i), 1) => self.push_edge(i, i),
                _ => {
                    return Err(format_error!(
                        line,
                        "column {} does not describe exactly one edge",
                        col + 1
                    ))
                }
            }
        }

        debug!(
            vertices = n,
            edges = self.num_edges,
            "loaded incidence matrix"
        );
        Ok(())
    }

    fn number_of_vertices(&self) -> NumVertices {
        self.index.len()
    }

    fn number_of_edges(&self) -> NumEdges {
        self.num_edges
    }

    fn has_vertex(&self, u: Vertex) -> bool {
        self.index.contains(u)
    }

    fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        match (self.index.slot_of(u), self.index.slot_of(v)) {
            (Some(i), Some(j)) => self.find_edge(i, j).is_some(),
            _ => false,
        }
    }
}

impl_structural_eq!(IncidenceMatrixGraph);

impl Display for IncidenceMatrixGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.index.len() {
            writeln!(
                f,
                "{}",
                self.matrix.row(row)[..self.num_edges].iter().join(" ")
            )?;
        }
        Ok(())
    }
}

// ---------- Testing ----------

test_graph_contract!(test_incidence_matrix_contract, IncidenceMatrixGraph);

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    const FIXTURE: &str = "\
0 0 0 -1 -1 0
-1 0 0 0 0 -1
0 1 -1 0 0 0
1 -1 0 0 0 0
0 0 0 0 1 1
0 0 1 1 0 0
";

    fn fixture() -> IncidenceMatrixGraph {
        let mut graph = IncidenceMatrixGraph::new();
        graph.read_from_reader(&mut FIXTURE.as_bytes()).unwrap();
        graph
    }

    #[test]
    fn read_fixture() {
        let graph = fixture();
        assert_eq!(graph.vertices(), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(graph.number_of_edges(), 6);
        assert_eq!(graph.neighbors_of(5).unwrap(), vec![2, 0]);
        assert_eq!(graph.neighbors_of(3).unwrap(), vec![1]);
        assert_eq!(
            graph.sorted_edges(),
            vec![
                Edge(2, 3),
                Edge(3, 1),
                Edge(4, 0),
                Edge(4, 1),
                Edge(5, 0),
                Edge(5, 2)
            ]
        );
    }

    #[test]
    fn rendering_reproduces_input() {
        assert_eq!(fixture().to_string(), FIXTURE);
    }

    #[test]
    fn read_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "2 1 0\n\n0 -1 0\n").unwrap();

        let mut graph = IncidenceMatrixGraph::from_edges([(4, 5)]);
        graph.read_from_file(file.path()).unwrap();

        assert_eq!(graph.vertices(), vec![0, 1]);
        assert_eq!(graph.sorted_edges(), vec![Edge(0, 0), Edge(0, 1)]);
        assert_eq!(graph.to_string(), "2 1\n0 -1\n");
    }

    #[test]
    fn read_collapses_duplicate_columns() {
        let mut graph = IncidenceMatrixGraph::new();
        graph
            .read_from_reader(&mut "1 1\n-1 -1\n".as_bytes())
            .unwrap();
        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.to_string(), "1\n-1\n");
    }

    #[test]
    fn read_rejects_malformed_columns() {
        for (input, line) in [
            ("1 0\n1 0\n", 1),
            ("0 1\n0 0\n", 1),
            ("0 0\n1 -1\n2 0\n", 2),
            ("0 3\n0 0\n", 1),
            ("1 0\n-1\n", 2),
        ] {
            let mut graph = IncidenceMatrixGraph::new();
            let err = graph.read_from_reader(&mut input.as_bytes()).unwrap_err();
            assert!(
                matches!(err, GraphError::Format { line: l, .. } if l == line),
                "{input:?} -> {err}"
            );
        }
    }

    #[test]
    fn unknown_vertex() {
        let graph = fixture();
        assert!(graph.neighbors_of(42).unwrap().is_empty());
        assert!(!graph.is_strict());

        let graph = graph.strict(true);
        assert!(graph.is_strict());
        assert!(matches!(
            graph.neighbors_of(42),
            Err(GraphError::VertexNotFound(42))
        ));
    }

    #[test]
    fn duplicate_edges_are_skipped() {
        let mut graph = IncidenceMatrixGraph::new();
        graph.add_edge(1, 2);
        graph.add_edge(1, 2);
        graph.add_edge(2, 1);

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.neighbors_of(1).unwrap(), vec![2]);
        assert_eq!(graph.to_string(), "1 -1\n-1 1\n");
    }

    #[test]
    fn self_loops() {
        let mut graph = IncidenceMatrixGraph::new();
        graph.add_edge(4, 4);
        graph.add_edge(4, 4);

        assert_eq!(graph.number_of_edges(), 1);
        assert_eq!(graph.neighbors_of(4).unwrap(), vec![4]);
        assert_eq!(graph.sorted_edges(), vec![Edge(4, 4)]);
        assert_eq!(graph.to_string(), "2\n");

        graph.remove_edge(4, 4);
        assert_eq!(graph.number_of_edges(), 0);
        assert!(graph.has_vertex(4));
    }

    #[test]
    fn remove_edge_shifts_columns() {
        let mut graph = IncidenceMatrixGraph::from_edges([(0, 1), (1, 2), (2, 0)]);
        graph.remove_edge(1, 2);

        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.to_string(), "1 -1\n-1 0\n0 1\n");

        // absent edges and unknown endpoints are ignored
        graph.remove_edge(1, 0);
        graph.remove_edge(0, 7);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.number_of_vertices(), 3);
    }

    #[test]
    fn remove_middle_vertex() {
        let mut graph = IncidenceMatrixGraph::from_edges([(10, 20), (20, 30), (30, 10), (30, 40)]);
        graph.remove_vertex(20);

        assert_eq!(graph.vertices(), vec![10, 30, 40]);
        assert_eq!(graph.number_of_edges(), 2);
        assert_eq!(graph.sorted_edges(), vec![Edge(30, 10), Edge(30, 40)]);
        assert_eq!(graph.neighbors_of(30).unwrap(), vec![10, 40]);
        assert_eq!(graph.to_string(), "-1 0\n1 1\n0 -1\n");

        graph.add_edge(50, 10);
        assert_eq!(graph.neighbors_of(50).unwrap(), vec![10]);
    }

    #[test]
    fn capacities_grow_independently() {
        let mut graph = IncidenceMatrixGraph::new();
        assert_eq!(graph.vertex_capacity(), 16);
        assert_eq!(graph.edge_capacity(), 16);

        for u in 0..100 {
            graph.add_vertex(u);
        }
        assert_eq!(graph.vertex_capacity(), 128);
        assert_eq!(graph.edge_capacity(), 16);

        for u in 0..100 {
            graph.add_edge(u, u + 1);
        }
        assert_eq!(graph.number_of_edges(), 100);
        assert_eq!(graph.edge_capacity(), 128);
        assert_eq!(graph.vertex_capacity(), 128);
        assert_eq!(graph.neighbors_of(99).unwrap(), vec![100]);
    }

    #[test]
    fn capacities_shrink() {
        let mut graph = IncidenceMatrixGraph::from_edges((0..100).map(|u| (u, u + 1)));
        for u in 0..69 {
            graph.remove_edge(u, u + 1);
        }
        assert_eq!(graph.number_of_edges(), 31);
        assert_eq!(graph.edge_capacity(), 64);
        assert_eq!(graph.vertex_capacity(), 128);
        assert_eq!(graph.neighbors_of(80).unwrap(), vec![81]);

        for u in 0..=100 {
            graph.remove_vertex(u);
        }
        assert!(graph.is_empty());
        assert_eq!(graph.edge_capacity(), 16);
        assert_eq!(graph.vertex_capacity(), 16);
    }
}
