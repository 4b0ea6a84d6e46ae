//! Fluent API for building Graph instances.

use indexmap::IndexMap;

use crate::types::NodeId;

use super::Graph;

/// Fluent builder for constructing a [`Graph`].
pub struct GraphBuilder<T> {
    graph: Graph<T>,
}

impl<T> GraphBuilder<T> {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            graph: Graph::new(),
        }
    }

    /// Add a member node, returning its id.
    pub fn add(&mut self, value: T) -> NodeId {
        self.graph.insert(value)
    }

    /// Add several member nodes, returning their ids in order.
    pub fn add_all(&mut self, values: impl IntoIterator<Item = T>) -> Vec<NodeId> {
        values.into_iter().map(|value| self.add(value)).collect()
    }

    /// Add an undirected edge between two nodes.
    pub fn link(&mut self, a: NodeId, b: NodeId) -> &mut Self {
        self.graph.add_edge(a, b);
        self
    }

    /// Link consecutive nodes into a path.
    pub fn chain(&mut self, ids: &[NodeId]) -> &mut Self {
        for pair in ids.windows(2) {
            self.graph.add_edge(pair[0], pair[1]);
        }
        self
    }

    /// Build the final Graph.
    pub fn build(self) -> Graph<T> {
        self.graph
    }
}

impl GraphBuilder<String> {
    /// Build a labelled graph from edge pairs plus isolated labels.
    ///
    /// Each distinct label becomes one node, in order of first appearance
    /// (edges first, then isolated labels).
    pub fn from_edge_list<'a>(
        edges: impl IntoIterator<Item = (&'a str, &'a str)>,
        isolated: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        let mut builder = Self::new();
        let mut labels: IndexMap<&'a str, NodeId> = IndexMap::new();

        for (left, right) in edges {
            let a = *labels
                .entry(left)
                .or_insert_with(|| builder.graph.insert(left.to_string()));
            let b = *labels
                .entry(right)
                .or_insert_with(|| builder.graph.insert(right.to_string()));
            builder.link(a, b);
        }
        for label in isolated {
            labels
                .entry(label)
                .or_insert_with(|| builder.graph.insert(label.to_string()));
        }

        builder
    }
}

impl<T> Default for GraphBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}
