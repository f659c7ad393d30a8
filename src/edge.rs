use std::fmt::{Debug, Display};

use crate::Vertex;

/// A directed edge `Edge(from, to)`.
///
/// Equality, ordering and hashing only depend on both endpoints, so an `Edge` describes
/// a connection independently of how a representation stores it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Vertex, pub Vertex);

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Returns the source of the edge
    pub fn source(&self) -> Vertex {
        self.0
    }

    /// Returns the destination of the edge
    pub fn target(&self) -> Vertex {
        self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Edge(self.1, self.0)
    }

    /// Returns true if `u` is one of the endpoints
    pub fn touches(&self, u: Vertex) -> bool {
        self.0 == u || self.1 == u
    }
}

impl From<(Vertex, Vertex)> for Edge {
    fn from(value: (Vertex, Vertex)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&(Vertex, Vertex)> for Edge {
    fn from(value: &(Vertex, Vertex)) -> Self {
        Edge(value.0, value.1)
    }
}

impl From<&Edge> for Edge {
    fn from(value: &Edge) -> Self {
        *value
    }
}
