//! In-memory graph operations — the core data structure.

pub mod builder;
pub mod traversal;
pub mod undirected;

pub use builder::GraphBuilder;
pub use traversal::{
    breadth_first_search, depth_first_search, distance_of_shortest_path, TraversalOrder,
};
pub use undirected::Graph;
