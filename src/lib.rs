//! Undirected graph — an in-memory graph of caller-supplied values.
//!
//! Nodes are addressed by [`NodeId`] handles with reference identity, linked by
//! symmetric edges, and queried with depth-first search, breadth-first search
//! and a layer-counted shortest-path distance.

pub mod cli;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder, TraversalOrder};
pub use types::{GraphError, GraphResult, Node, NodeId};
