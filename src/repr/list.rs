/*!
# Adjacency List

[`AdjacencyListGraph`] maps every vertex to the ordered list of destinations of its outgoing
edges. Vertices are kept in ascending order, neighbors in insertion order.

Querying the neighbors of an unknown vertex is not an error: it simply has none.
*/

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
    io::BufRead,
};

use fxhash::FxHashSet;
use itertools::Itertools;
use tracing::debug;

use crate::{
    error::Result, io::EdgeListReader, ops::macros::impl_structural_eq,
    testing::test_graph_contract,
};

use super::*;

/// Directed graph storing one destination list per vertex.
///
/// `add_edge` appends to the list of the source, so the same edge may be stored several
/// times. [`Graph::edges`] collapses such duplicates and [`Graph::remove_edge`] removes all of
/// them.
///
/// # Example
/// ```
/// use digraphs::prelude::*;
///
/// let mut graph = AdjacencyListGraph::new();
/// graph.add_edge(5, 2);
/// graph.add_edge(5, 0);
///
/// assert_eq!(graph.neighbors_of(5).unwrap(), vec![2, 0]);
/// assert!(graph.neighbors_of(42).unwrap().is_empty());
/// assert_eq!(graph.to_string(), "0 -> []\n2 -> []\n5 -> [2, 0]\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct AdjacencyListGraph {
    out_nbs: BTreeMap<Vertex, Vec<Vertex>>,
}

impl AdjacencyListGraph {
    /// Creates an empty graph
    pub fn new() -> Self {
        Self::default()
    }
}

impl Graph for AdjacencyListGraph {
    fn add_vertex(&mut self, u: Vertex) {
        self.out_nbs.entry(u).or_default();
    }

    fn remove_vertex(&mut self, u: Vertex) {
        if self.out_nbs.remove(&u).is_none() {
            return;
        }

        for nbs in self.out_nbs.values_mut() {
            nbs.retain(|&v| v != u);
        }
    }

    fn add_edge(&mut self, u: Vertex, v: Vertex) {
        self.add_vertex(v);
        self.out_nbs.entry(u).or_default().push(v);
    }

    fn remove_edge(&mut self, u: Vertex, v: Vertex) {
        if let Some(nbs) = self.out_nbs.get_mut(&u) {
            nbs.retain(|&w| w != v);
        }
    }

    fn neighbors_of(&self, u: Vertex) -> Result<Vec<Vertex>> {
        Ok(self.out_nbs.get(&u).cloned().unwrap_or_default())
    }

    fn vertices(&self) -> Vec<Vertex> {
        self.out_nbs.keys().copied().collect()
    }

    fn edges(&self) -> FxHashSet<Edge> {
        self.out_nbs
            .iter()
            .flat_map(|(&u, nbs)| nbs.iter().map(move |&v| Edge(u, v)))
            .collect()
    }

    fn read_from_reader(&mut self, reader: &mut dyn BufRead) -> Result<()> {
        let edges = EdgeListReader::default().read_edges(reader)?;
        debug!(edges = edges.len(), "loaded edge list");

        self.out_nbs.clear();
        self.add_edges(edges);
        Ok(())
    }

    fn number_of_vertices(&self) -> NumVertices {
        self.out_nbs.len()
    }

    fn has_vertex(&self, u: Vertex) -> bool {
        self.out_nbs.contains_key(&u)
    }

    fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.out_nbs.get(&u).is_some_and(|nbs| nbs.contains(&v))
    }
}

impl_structural_eq!(AdjacencyListGraph);

impl Display for AdjacencyListGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (u, nbs) in &self.out_nbs {
            writeln!(f, "{u} -> [{}]", nbs.iter().join(", "))?;
        }
        Ok(())
    }
}

// ---------- Testing ----------

test_graph_contract!(test_adjacency_list_contract, AdjacencyListGraph);
