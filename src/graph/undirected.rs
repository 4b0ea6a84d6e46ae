//! Core graph structure — a node arena plus the set of current members.

use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexSet;
use log::debug;

use crate::types::{GraphError, GraphResult, Node, NodeId};

use super::traversal::{self, TraversalOrder};

/// Source of per-graph ids stamped into every issued [`NodeId`].
static NEXT_GRAPH_ID: AtomicU64 = AtomicU64::new(0);

/// An undirected graph over caller-supplied values.
///
/// Nodes are created through the graph and addressed by [`NodeId`]. Creating
/// a node does not make it a member; membership is controlled with
/// [`add_node`](Self::add_node) and [`remove_node`](Self::remove_node), and a
/// removed node keeps its slot so a held id can be re-added later.
///
/// Handles issued by another graph are treated as absent everywhere. A
/// clone shares its source's id, so handles stay valid across `clone()`.
#[derive(Debug, Clone)]
pub struct Graph<T> {
    /// Stamped into every handle this graph issues.
    id: u64,
    /// Every node created through this graph, member or not.
    arena: Vec<Node<T>>,
    /// Current members, in insertion order.
    members: IndexSet<NodeId>,
}

impl<T> Graph<T> {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            id: NEXT_GRAPH_ID.fetch_add(1, Ordering::Relaxed),
            arena: Vec::new(),
            members: IndexSet::new(),
        }
    }

    /// Construct a node with no neighbors. The node is not yet a member.
    pub fn create_node(&mut self, value: T) -> NodeId {
        self.push(Node::new(value))
    }

    /// Construct a node with an initial adjacency set. The node is not yet
    /// a member.
    ///
    /// The given neighbors are stored as-is; they do not gain a back-edge.
    /// Handles from other graphs are dropped.
    pub fn create_node_with_adjacent(
        &mut self,
        value: T,
        adjacent: impl IntoIterator<Item = NodeId>,
    ) -> NodeId {
        let graph = self.id;
        let adjacent = adjacent.into_iter().filter(|n| n.graph == graph);
        self.push(Node::with_adjacent(value, adjacent))
    }

    /// Construct a node and add it to the graph.
    pub fn insert(&mut self, value: T) -> NodeId {
        let id = self.create_node(value);
        self.add_node(id);
        id
    }

    fn push(&mut self, node: Node<T>) -> NodeId {
        let id = NodeId {
            graph: self.id,
            index: self.arena.len(),
        };
        self.arena.push(node);
        id
    }

    /// Arena position of a handle issued by this graph.
    fn slot(&self, id: NodeId) -> Option<usize> {
        (id.graph == self.id && id.index < self.arena.len()).then_some(id.index)
    }

    /// Add a node to the graph. Adding a member again changes nothing.
    pub fn add_node(&mut self, id: NodeId) {
        if self.slot(id).is_none() {
            debug!("add_node: {} does not belong to this graph", id);
            return;
        }
        if self.members.insert(id) {
            debug!("Added node {}", id);
        }
    }

    /// Add each node in order.
    pub fn add_nodes(&mut self, ids: impl IntoIterator<Item = NodeId>) {
        for id in ids {
            self.add_node(id);
        }
    }

    /// Connect two nodes in both directions.
    ///
    /// Membership is not checked, and `a == b` produces a self-edge.
    pub fn add_edge(&mut self, a: NodeId, b: NodeId) {
        let (Some(sa), Some(sb)) = (self.slot(a), self.slot(b)) else {
            debug!("add_edge: {} or {} does not belong to this graph", a, b);
            return;
        };
        self.arena[sa].adjacent.insert(b);
        self.arena[sb].adjacent.insert(a);
        debug!("Added edge {} -- {}", a, b);
    }

    /// Disconnect two nodes in both directions. Missing edges are ignored.
    pub fn remove_edge(&mut self, a: NodeId, b: NodeId) {
        let mut removed = false;
        if let Some(sa) = self.slot(a) {
            removed |= self.arena[sa].adjacent.shift_remove(&b);
        }
        if let Some(sb) = self.slot(b) {
            removed |= self.arena[sb].adjacent.shift_remove(&a);
        }
        if removed {
            debug!("Removed edge {} -- {}", a, b);
        }
    }

    /// Remove a node from the graph and unlink it from every remaining
    /// member. Does nothing if the node is not a member.
    pub fn remove_node(&mut self, id: NodeId) {
        if !self.members.shift_remove(&id) {
            return;
        }

        let linked: Vec<NodeId> = self
            .members
            .iter()
            .copied()
            .filter(|&member| self.arena[member.index].adjacent.contains(&id))
            .collect();
        for member in linked {
            self.remove_edge(member, id);
        }
        debug!("Removed node {}", id);
    }

    /// Whether the node is currently a member.
    pub fn contains(&self, id: NodeId) -> bool {
        self.members.contains(&id)
    }

    /// Get a node by id, member or not.
    pub fn node(&self, id: NodeId) -> Option<&Node<T>> {
        self.slot(id).map(|slot| &self.arena[slot])
    }

    /// Get a node by id, failing for handles this graph never issued.
    pub fn try_node(&self, id: NodeId) -> GraphResult<&Node<T>> {
        self.node(id).ok_or(GraphError::NodeNotFound(id))
    }

    /// The value stored at a node.
    pub fn value(&self, id: NodeId) -> Option<&T> {
        self.node(id).map(Node::value)
    }

    /// Neighbors of a node in insertion order.
    pub fn neighbors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.node(id)
            .into_iter()
            .flat_map(|node| node.adjacent.iter().copied())
    }

    /// Member ids in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.members.iter().copied()
    }

    /// Number of member nodes.
    pub fn node_count(&self) -> usize {
        self.members.len()
    }

    /// Number of undirected edges between members. A self-edge counts once.
    pub fn edge_count(&self) -> usize {
        self.members
            .iter()
            .map(|&a| {
                self.arena[a.index]
                    .adjacent
                    .iter()
                    .filter(|&&b| a <= b && self.members.contains(&b))
                    .count()
            })
            .sum()
    }

    /// Whether the graph has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Values reachable from `start`, depth-first.
    pub fn depth_first_search(&self, start: NodeId) -> Vec<&T> {
        traversal::depth_first_search(self, start)
    }

    /// Values reachable from `start`, breadth-first.
    pub fn breadth_first_search(&self, start: NodeId) -> Vec<&T> {
        traversal::breadth_first_search(self, start)
    }

    /// Values reachable from `start` in the given order.
    pub fn traverse(&self, start: NodeId, order: TraversalOrder) -> Vec<&T> {
        traversal::traverse(self, start, order)
    }
}

impl<T: PartialEq> Graph<T> {
    /// Layer-counted distance from `start` to the first node whose value
    /// equals `end`'s value. `None` when `end` is never reached.
    pub fn distance_of_shortest_path(&self, start: NodeId, end: NodeId) -> Option<usize> {
        traversal::distance_of_shortest_path(self, start, end)
    }

    /// First member whose value equals `value`.
    pub fn find_by_value(&self, value: &T) -> Option<NodeId> {
        self.members
            .iter()
            .copied()
            .find(|id| self.arena[id.index].value == *value)
    }
}

impl<T> Default for Graph<T> {
    fn default() -> Self {
        Self::new()
    }
}
