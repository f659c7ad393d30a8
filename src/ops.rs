use std::{
    fmt::{self, Debug, Display},
    fs::File,
    hash::{Hash, Hasher},
    io::{BufRead, BufReader},
    path::Path,
};

use fxhash::{FxHashSet, FxHasher};
use itertools::Itertools;

use crate::{error::Result, *};

/// The capability set shared by every directed-graph representation.
///
/// The trait is object safe, so callers may hold a `&dyn Graph` / `Box<dyn Graph>` and never
/// branch on the concrete representation. Semantics that depend on the representation are
/// documented on the respective method.
pub trait Graph: Display {
    /// Registers `u` as a vertex. Does nothing if `u` is already known.
    fn add_vertex(&mut self, u: Vertex);

    /// Deletes `u` together with every edge it is an endpoint of.
    /// Does nothing if `u` is unknown.
    fn remove_vertex(&mut self, u: Vertex);

    /// Adds the edge *(u,v)*, registering missing endpoints first.
    fn add_edge(&mut self, u: Vertex, v: Vertex);

    /// Removes the edge *(u,v)* if present.
    fn remove_edge(&mut self, u: Vertex, v: Vertex);

    /// Returns the vertices reachable from `u` by one outgoing edge.
    ///
    /// Representations with an explicit index space report an unknown `u` as
    /// [`GraphError::VertexNotFound`], others return an empty list.
    fn neighbors_of(&self, u: Vertex) -> Result<Vec<Vertex>>;

    /// Returns every known vertex in the representation's enumeration order
    fn vertices(&self) -> Vec<Vertex>;

    /// Returns the de-duplicated set of all edges
    fn edges(&self) -> FxHashSet<Edge>;

    /// Replaces the contents of the graph by parsing the representation's text format.
    ///
    /// # Errors
    /// Fails on IO errors and malformed input. The graph should be discarded afterwards
    /// as its state is unspecified.
    fn read_from_reader(&mut self, reader: &mut dyn BufRead) -> Result<()>;

    /// Same as [`Graph::read_from_reader`] for the file at `path`
    fn read_from_file(&mut self, path: &Path) -> Result<()> {
        let mut reader = BufReader::new(File::open(path)?);
        self.read_from_reader(&mut reader)
    }

    /// Returns the number of vertices
    fn number_of_vertices(&self) -> NumVertices {
        self.vertices().len()
    }

    /// Returns the number of (distinct) edges
    fn number_of_edges(&self) -> NumEdges {
        self.edges().len()
    }

    /// Returns *true* if `u` is a known vertex
    fn has_vertex(&self, u: Vertex) -> bool {
        self.vertices().contains(&u)
    }

    /// Returns *true* if the edge *(u,v)* exists
    fn has_edge(&self, u: Vertex, v: Vertex) -> bool {
        self.edges().contains(&Edge(u, v))
    }

    /// Returns *true* if the graph has no vertices (and thus no edges)
    fn is_empty(&self) -> bool {
        self.number_of_vertices() == 0
    }

    /// Returns all vertices in ascending order
    fn sorted_vertices(&self) -> Vec<Vertex> {
        let mut vertices = self.vertices();
        vertices.sort_unstable();
        vertices
    }

    /// Returns all edges in ascending order
    fn sorted_edges(&self) -> Vec<Edge> {
        self.edges().into_iter().sorted_unstable().collect()
    }

    /// Hash of the (vertex-set, edge-set) projection.
    /// Equal graphs yield equal values regardless of their representation.
    fn structure_hash(&self) -> u64 {
        let mut hasher = FxHasher::default();
        self.sorted_vertices().hash(&mut hasher);
        self.sorted_edges().hash(&mut hasher);
        hasher.finish()
    }

    /// Adds all edges in the collection
    fn add_edges<I>(&mut self, edges: I)
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
        Self: Sized,
    {
        for Edge(u, v) in edges.into_iter().map(|e| e.into()) {
            self.add_edge(u, v);
        }
    }
}

/// Returns *true* if both graphs hold the same vertices and the same edges.
/// The internal encoding of either graph is irrelevant.
pub fn structurally_equal<A, B>(a: &A, b: &B) -> bool
where
    A: Graph + ?Sized,
    B: Graph + ?Sized,
{
    a.number_of_vertices() == b.number_of_vertices()
        && a.sorted_vertices() == b.sorted_vertices()
        && a.edges() == b.edges()
}

/// Creates a graph from scratch from a collection of edges
pub trait GraphFromScratch {
    /// Creates a graph holding exactly the given edges and their endpoints
    fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>;
}

impl<G: Graph + Default> GraphFromScratch for G {
    fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Edge>,
    {
        let mut graph = Self::default();
        graph.add_edges(edges);
        graph
    }
}

impl<G: Graph + ?Sized> PartialEq<G> for dyn Graph + '_ {
    fn eq(&self, other: &G) -> bool {
        structurally_equal(self, other)
    }
}

impl Eq for dyn Graph + '_ {}

impl Hash for dyn Graph + '_ {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.structure_hash());
    }
}

impl Debug for dyn Graph + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.sorted_vertices())
            .field("edges", &self.sorted_edges())
            .finish()
    }
}

pub(crate) mod macros {
    /// Implements equality and hashing on the (vertex-set, edge-set) projection
    macro_rules! impl_structural_eq {
        ($struct:ident) => {
            impl<G: Graph + ?Sized> PartialEq<G> for $struct {
                fn eq(&self, other: &G) -> bool {
                    structurally_equal(self, other)
                }
            }

            impl Eq for $struct {}

            impl std::hash::Hash for $struct {
                fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                    state.write_u64(self.structure_hash());
                }
            }
        };
    }

    pub(crate) use impl_structural_eq;
}
