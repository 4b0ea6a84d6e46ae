//! Error types for the undirected-graph library.

use thiserror::Error;

use super::NodeId;

/// Errors raised at the fallible edges of the API.
///
/// Graph mutations and traversals never fail; these cover checked lookups,
/// edge-spec parsing and CLI output.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Node handle does not belong to this graph.
    #[error("Node {0} not found")]
    NodeNotFound(NodeId),

    /// No node carries the given label.
    #[error("No node labelled '{0}'")]
    UnknownLabel(String),

    /// Edge spec could not be parsed.
    #[error("Invalid edge spec '{0}': expected <label>-<label>")]
    InvalidEdgeSpec(String),

    /// Unknown traversal order name.
    #[error("Unknown traversal order '{0}': expected depth_first or breadth_first")]
    InvalidTraversalOrder(String),

    /// JSON encoding error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience result type for graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
