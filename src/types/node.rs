//! Node handles and the node struct.

use indexmap::IndexSet;

/// Handle to a node in a [`Graph`](crate::graph::Graph) arena.
///
/// Identity is by handle, never by value: two nodes holding equal values
/// still have distinct ids. A handle is tied to the graph that issued it
/// (and to clones of that graph); any other graph treats it as absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId {
    pub(crate) graph: u64,
    pub(crate) index: usize,
}

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(&self) -> usize {
        self.index
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.index)
    }
}

/// A labelled vertex: a caller-supplied value plus its neighbors.
#[derive(Debug, Clone)]
pub struct Node<T> {
    pub(crate) value: T,
    pub(crate) adjacent: IndexSet<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T) -> Self {
        Self {
            value,
            adjacent: IndexSet::new(),
        }
    }

    /// Duplicates collapse; iteration order is first appearance.
    pub(crate) fn with_adjacent(value: T, adjacent: impl IntoIterator<Item = NodeId>) -> Self {
        Self {
            value,
            adjacent: adjacent.into_iter().collect(),
        }
    }

    /// The payload.
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Neighbors in insertion order.
    pub fn adjacent(&self) -> &IndexSet<NodeId> {
        &self.adjacent
    }

    /// Whether `other` is a neighbor.
    pub fn is_adjacent(&self, other: NodeId) -> bool {
        self.adjacent.contains(&other)
    }

    /// Number of neighbors (a self-edge counts once).
    pub fn degree(&self) -> usize {
        self.adjacent.len()
    }
}
