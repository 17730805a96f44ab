//! Error types for the depthwalk library.

use thiserror::Error;

use super::Label;

/// All errors that can occur in the depthwalk library.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WalkError {
    /// Self-loop edges are not allowed.
    #[error("Self-loop not allowed on vertex {0}")]
    InvalidEdge(Label),

    /// Unrecognized argument value, e.g. a traversal direction name.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Query on a vertex that the last traversal never reached.
    #[error("Vertex {0} is not in the traversal tree")]
    VertexNotInTree(Label),

    /// Vertex is not present in the graph.
    #[error("Vertex {0} not found")]
    VertexNotFound(Label),
}

/// Convenience result type for depthwalk operations.
pub type WalkResult<T> = Result<T, WalkError>;
