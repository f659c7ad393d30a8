//! Error type shared by all representations and algorithms.

use thiserror::Error;

use crate::Vertex;

/// Errors raised by graph operations.
///
/// Every operation is local and deterministic, so none of these are worth retrying.
#[derive(Debug, Error)]
pub enum GraphError {
    /// The vertex is not tracked by a representation that requires explicit registration.
    #[error("Vertex {0} does not exist in the graph")]
    VertexNotFound(Vertex),

    /// A topological order was requested for a graph containing a directed cycle.
    #[error("Graph has a cycle, topological sort not possible")]
    CycleDetected,

    /// Input of a loader did not match the expected format.
    /// `line` is 1-based.
    #[error("Invalid input at line {line}: {reason}")]
    Format { line: usize, reason: String },

    /// Reading the input failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Shorthand used throughout the crate
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
