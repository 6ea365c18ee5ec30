//! Error types and result aliases

use std::io;

use crate::vertex::VertexId;

/// Result type alias for graph operations
pub type GraphResult<T> = Result<T, GraphError>;

/// Errors that can occur when building, querying or exporting a graph
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    /// A vertex id outside `0..count` was passed to the graph
    #[error("vertex id {id} is out of range (graph has {count} vertices)")]
    OutOfRange {
        /// The offending id
        id: VertexId,
        /// Number of vertices at the time of the call
        count: usize,
    },

    /// An edge generator produced a neighbor id outside `0..count`
    #[error("vertex {vertex} lists unknown neighbor {neighbor} (graph has {count} vertices)")]
    MalformedNeighbor {
        /// Vertex whose generator is broken
        vertex: VertexId,
        /// The neighbor id it produced
        neighbor: VertexId,
        /// Number of vertices in the graph
        count: usize,
    },

    /// I/O error while reading or writing a graph
    #[error("graph I/O error: {0}")]
    Io(#[from] io::Error),
}

impl GraphError {
    /// Returns true if the error was caused by an invalid id supplied by
    /// the caller, as opposed to inconsistent graph contents or I/O
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}
