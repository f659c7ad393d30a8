/*!
# Vertex Representation

Vertices are plain signed integers chosen by the caller. They do not need to be contiguous
and are never auto-assigned, except by loaders for positional formats (see [`crate::io`]),
which number rows `0..n`.
*/

/// A vertex is any `i32`, negative values included
pub type Vertex = i32;

/// Count of vertices (or edges) stored in a representation
pub type NumVertices = usize;

/// We use `usize` for edge counts as incidence columns are indexed by it anyway
pub type NumEdges = usize;
