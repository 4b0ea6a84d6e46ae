//! CLI command implementations.

use std::io::Write;
use std::str::FromStr;

use crate::graph::{Graph, GraphBuilder, TraversalOrder};
use crate::types::{GraphError, GraphResult, NodeId};

/// An undirected edge given on the command line as `<label>-<label>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeSpec {
    pub left: String,
    pub right: String,
}

impl FromStr for EdgeSpec {
    type Err = GraphError;

    fn from_str(s: &str) -> GraphResult<Self> {
        let invalid = || GraphError::InvalidEdgeSpec(s.to_string());
        let (left, right) = s.split_once('-').ok_or_else(invalid)?;
        let (left, right) = (left.trim(), right.trim());
        if left.is_empty() || right.is_empty() || right.contains('-') {
            return Err(invalid());
        }
        Ok(Self {
            left: left.to_string(),
            right: right.to_string(),
        })
    }
}

/// Graph described on the command line.
#[derive(Debug, Clone, Default)]
pub struct GraphInput {
    /// Edges, in the order given.
    pub edges: Vec<EdgeSpec>,
    /// Labels of nodes that may have no edges.
    pub nodes: Vec<String>,
}

impl GraphInput {
    /// Build the labelled graph.
    pub fn build(&self) -> Graph<String> {
        GraphBuilder::from_edge_list(
            self.edges
                .iter()
                .map(|e| (e.left.as_str(), e.right.as_str())),
            self.nodes.iter().map(String::as_str),
        )
        .build()
    }
}

/// Look up the node carrying `label`.
pub fn resolve(graph: &Graph<String>, label: &str) -> GraphResult<NodeId> {
    graph
        .find_by_value(&label.to_string())
        .ok_or_else(|| GraphError::UnknownLabel(label.to_string()))
}

/// Traverse from `start` and print the visited labels.
pub fn cmd_traverse(
    out: &mut dyn Write,
    input: &GraphInput,
    start: &str,
    order: TraversalOrder,
    json: bool,
) -> GraphResult<()> {
    let graph = input.build();
    let start_id = resolve(&graph, start)?;
    let visited = graph.traverse(start_id, order);
    log::debug!("{} from {} visited {} nodes", order, start, visited.len());

    if json {
        let report = serde_json::json!({
            "start": start,
            "order": order,
            "visited": visited,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        let labels: Vec<&str> = visited.iter().map(|s| s.as_str()).collect();
        writeln!(out, "{} from {}: {}", order, start, labels.join(", "))?;
    }
    Ok(())
}

/// Print the layer-counted distance between two labels.
pub fn cmd_distance(
    out: &mut dyn Write,
    input: &GraphInput,
    start: &str,
    end: &str,
    json: bool,
) -> GraphResult<()> {
    let graph = input.build();
    let start_id = resolve(&graph, start)?;
    let end_id = resolve(&graph, end)?;
    let distance = graph.distance_of_shortest_path(start_id, end_id);

    if json {
        let report = serde_json::json!({
            "start": start,
            "end": end,
            "distance": distance,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&report)?)?;
    } else {
        match distance {
            Some(d) => writeln!(out, "Distance {} -> {}: {}", start, end, d)?,
            None => writeln!(out, "Distance {} -> {}: unreachable", start, end)?,
        }
    }
    Ok(())
}

/// Print node and edge counts plus each node's neighbors.
pub fn cmd_info(out: &mut dyn Write, input: &GraphInput, json: bool) -> GraphResult<()> {
    let graph = input.build();
    let rows: Vec<(&str, Vec<&str>)> = graph
        .nodes()
        .filter_map(|id| {
            let node = graph.node(id)?;
            let neighbors = node
                .adjacent()
                .iter()
                .filter_map(|&n| graph.value(n))
                .map(String::as_str)
                .collect();
            Some((node.value().as_str(), neighbors))
        })
        .collect();

    if json {
        let adjacency: Vec<serde_json::Value> = rows
            .iter()
            .map(|(label, neighbors)| {
                serde_json::json!({
                    "label": label,
                    "degree": neighbors.len(),
                    "neighbors": neighbors,
                })
            })
            .collect();
        let info = serde_json::json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "adjacency": adjacency,
        });
        writeln!(out, "{}", serde_json::to_string_pretty(&info)?)?;
    } else {
        writeln!(out, "Nodes: {}", graph.node_count())?;
        writeln!(out, "Edges: {}", graph.edge_count())?;
        for (label, neighbors) in &rows {
            let line = format!("  {} ({}): {}", label, neighbors.len(), neighbors.join(", "));
            writeln!(out, "{}", line.trim_end())?;
        }
    }
    Ok(())
}
