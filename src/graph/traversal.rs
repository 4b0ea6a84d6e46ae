//! Graph traversal algorithms (DFS, BFS, layer-counted distance).

use std::collections::{HashSet, VecDeque};

use log::trace;
use serde::Serialize;

use crate::types::{GraphError, GraphResult, NodeId};

use super::Graph;

/// Order in which reachable nodes are visited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TraversalOrder {
    /// Last-in-first-out: follow one branch before backtracking.
    DepthFirst,
    /// First-in-first-out: visit by non-decreasing distance from the start.
    BreadthFirst,
}

impl TraversalOrder {
    /// Return a human-readable name for this order.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "depth_first",
            Self::BreadthFirst => "breadth_first",
        }
    }

    /// Parse an order from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "depth_first" | "dfs" => Some(Self::DepthFirst),
            "breadth_first" | "bfs" => Some(Self::BreadthFirst),
            _ => None,
        }
    }
}

impl std::fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl std::str::FromStr for TraversalOrder {
    type Err = GraphError;

    fn from_str(s: &str) -> GraphResult<Self> {
        Self::from_name(s).ok_or_else(|| GraphError::InvalidTraversalOrder(s.to_string()))
    }
}

/// Visit every node reachable from `start` with a stack.
///
/// `start` is marked seen up front; each popped node pushes its unseen
/// neighbors in adjacency order, so the last neighbor is visited next.
pub fn depth_first_search<T>(graph: &Graph<T>, start: NodeId) -> Vec<&T> {
    if graph.node(start).is_none() {
        return Vec::new();
    }

    let mut seen: HashSet<NodeId> = HashSet::from([start]);
    let mut stack: Vec<NodeId> = vec![start];
    let mut values: Vec<&T> = Vec::new();

    while let Some(current) = stack.pop() {
        let Some(node) = graph.node(current) else {
            continue;
        };
        trace!("dfs visit {}", current);
        values.push(node.value());

        for &neighbor in node.adjacent() {
            if seen.insert(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    values
}

/// Visit every node reachable from `start` with a FIFO queue.
pub fn breadth_first_search<T>(graph: &Graph<T>, start: NodeId) -> Vec<&T> {
    if graph.node(start).is_none() {
        return Vec::new();
    }

    let mut seen: HashSet<NodeId> = HashSet::from([start]);
    let mut queue: VecDeque<NodeId> = VecDeque::from([start]);
    let mut values: Vec<&T> = Vec::new();

    while let Some(current) = queue.pop_front() {
        let Some(node) = graph.node(current) else {
            continue;
        };
        trace!("bfs visit {}", current);
        values.push(node.value());

        for &neighbor in node.adjacent() {
            if seen.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    values
}

/// Dispatch on [`TraversalOrder`].
pub fn traverse<T>(graph: &Graph<T>, start: NodeId, order: TraversalOrder) -> Vec<&T> {
    match order {
        TraversalOrder::DepthFirst => depth_first_search(graph, start),
        TraversalOrder::BreadthFirst => breadth_first_search(graph, start),
    }
}

/// Breadth-first distance from `start` to `end`.
///
/// The search stops at the first dequeued node whose value equals `end`'s
/// value, which need not be `end` itself. `distance` grows by one for every
/// dequeued node that discovered at least one unseen neighbor, so on
/// branching graphs it can exceed the true edge count. Returns `None` unless
/// `end` itself was discovered.
pub fn distance_of_shortest_path<T: PartialEq>(
    graph: &Graph<T>,
    start: NodeId,
    end: NodeId,
) -> Option<usize> {
    let target = graph.node(end)?.value();
    graph.node(start)?;

    let mut seen: HashSet<NodeId> = HashSet::from([start]);
    let mut queue: VecDeque<NodeId> = VecDeque::from([start]);
    let mut distance = 0usize;

    while let Some(current) = queue.pop_front() {
        let Some(node) = graph.node(current) else {
            continue;
        };
        if node.value() == target {
            trace!("distance: matched {} at {}", current, distance);
            break;
        }

        let mut added = false;
        for &neighbor in node.adjacent() {
            if seen.insert(neighbor) {
                queue.push_back(neighbor);
                added = true;
            }
        }
        if added {
            distance += 1;
        }
    }

    seen.contains(&end).then_some(distance)
}
