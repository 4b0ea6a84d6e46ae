//! Graph structure tests: node membership and edge mutation.

use undirected_graph::graph::{Graph, GraphBuilder};
use undirected_graph::types::{GraphError, Node, NodeId};

/// Assert that every member's adjacency is mirrored by its neighbor.
fn assert_symmetric<T>(graph: &Graph<T>) {
    for a in graph.nodes() {
        for b in graph.neighbors(a) {
            if graph.contains(b) {
                assert!(
                    graph.node(b).unwrap().is_adjacent(a),
                    "{} lists {} but not the reverse",
                    a,
                    b
                );
            }
        }
    }
}

// ==================== Node Tests ====================

#[test]
fn test_create_node_is_not_member() {
    let mut graph = Graph::new();
    let a = graph.create_node("a");
    assert!(!graph.contains(a));
    assert_eq!(graph.value(a), Some(&"a"));
    assert!(graph.is_empty());
}

#[test]
fn test_node_id_display() {
    let mut graph = Graph::new();
    graph.insert("a");
    let b = graph.insert("b");
    assert_eq!(b.index(), 1);
    assert_eq!(b.to_string(), "#1");
}

#[test]
fn test_add_node_is_idempotent() {
    let mut graph = Graph::new();
    let a = graph.create_node("a");

    graph.add_node(a);
    graph.add_node(a);

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.nodes().filter(|&id| id == a).count(), 1);
}

#[test]
fn test_add_nodes_preserves_order() {
    let mut graph = Graph::new();
    let ids: Vec<NodeId> = ["x", "y", "z"].map(|v| graph.create_node(v)).to_vec();

    graph.add_nodes(ids.iter().rev().copied());

    let members: Vec<NodeId> = graph.nodes().collect();
    assert_eq!(members, vec![ids[2], ids[1], ids[0]]);
}

#[test]
fn test_equal_values_are_distinct_nodes() {
    let mut graph = Graph::new();
    let a = graph.insert("same");
    let b = graph.insert("same");

    assert_ne!(a, b);
    assert_eq!(graph.node_count(), 2);
}

#[test]
fn test_create_node_with_adjacent_is_not_mirrored() {
    let mut graph = Graph::new();
    let a = graph.insert("a");
    let b = graph.create_node_with_adjacent("b", [a, a]);

    assert_eq!(graph.node(b).unwrap().degree(), 1);
    assert!(graph.node(b).unwrap().is_adjacent(a));
    assert!(!graph.node(a).unwrap().is_adjacent(b));
}

#[test]
fn test_create_node_with_adjacent_dedups_in_order() {
    let mut graph = Graph::new();
    let a = graph.insert("a");
    let b = graph.insert("b");
    let c = graph.create_node_with_adjacent("c", [b, a, b]);

    let order: Vec<NodeId> = graph.neighbors(c).collect();
    assert_eq!(order, vec![b, a]);
    assert_eq!(graph.node(c).map(Node::degree), Some(2));
}

#[test]
fn test_try_node_unknown_handle() {
    let mut other = Graph::new();
    other.insert(0);
    let foreign = other.insert(1);

    let graph: Graph<i32> = Graph::new();
    match graph.try_node(foreign) {
        Err(GraphError::NodeNotFound(id)) => assert_eq!(id, foreign),
        other => panic!("Expected NodeNotFound, got {:?}", other.map(|n| n.degree())),
    }
}

// ==================== Foreign Handle Tests ====================

#[test]
fn test_foreign_handle_is_ignored() {
    let mut graph: Graph<&str> = Graph::new();
    let a = graph.insert("a");
    let mut other = Graph::new();
    let foreign = (0..10).map(|i| other.insert(i)).last().unwrap();

    graph.add_node(foreign);
    graph.add_edge(a, foreign);
    graph.remove_edge(a, foreign);

    assert_eq!(graph.node_count(), 1);
    assert_eq!(graph.node(a).map(Node::degree), Some(0));
    assert!(matches!(
        graph.try_node(foreign),
        Err(GraphError::NodeNotFound(id)) if id == foreign
    ));
}

#[test]
fn test_foreign_handle_with_shared_index_is_ignored() {
    let mut other = Graph::new();
    let foreign = other.insert("foreign");

    let mut graph = Graph::new();
    let a = graph.insert("a");
    let b = graph.insert("b");
    assert_eq!(foreign.index(), a.index());
    assert_ne!(foreign, a);

    graph.add_node(foreign);
    graph.add_edge(b, foreign);
    graph.add_nodes([foreign, b]);

    assert_eq!(graph.node_count(), 2);
    assert!(!graph.contains(foreign));
    assert_eq!(graph.node(a).map(Node::degree), Some(0));
    assert_eq!(graph.node(b).map(Node::degree), Some(0));
    assert!(graph.node(foreign).is_none());
    assert!(graph.value(foreign).is_none());
    assert!(matches!(
        graph.try_node(foreign),
        Err(GraphError::NodeNotFound(id)) if id == foreign
    ));
    assert!(graph.depth_first_search(foreign).is_empty());
    assert!(graph.breadth_first_search(foreign).is_empty());
    assert_eq!(graph.distance_of_shortest_path(a, foreign), None);

    // Removing through a foreign handle leaves the aliased member alone.
    graph.remove_node(foreign);
    assert!(graph.contains(a));

    // A foreign neighbor handed to create_node_with_adjacent is dropped.
    let c = graph.create_node_with_adjacent("c", [foreign, a]);
    let order: Vec<NodeId> = graph.neighbors(c).collect();
    assert_eq!(order, vec![a]);

    // The issuing graph still resolves it.
    assert_eq!(other.value(foreign), Some(&"foreign"));
}

#[test]
fn test_clone_shares_handles() {
    let mut graph = Graph::new();
    let a = graph.insert("a");
    let b = graph.insert("b");
    graph.add_edge(a, b);

    let mut copy = graph.clone();
    copy.remove_node(b);

    assert_eq!(copy.node_count(), 1);
    assert_eq!(copy.value(a), Some(&"a"));
    assert!(graph.contains(b));
    assert_eq!(graph.edge_count(), 1);
}

// ==================== Edge Tests ====================

#[test]
fn test_add_edge_is_symmetric() {
    let mut graph = Graph::new();
    let a = graph.insert("a");
    let b = graph.insert("b");

    graph.add_edge(a, b);

    assert!(graph.node(a).unwrap().is_adjacent(b));
    assert!(graph.node(b).unwrap().is_adjacent(a));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_add_edge_twice_keeps_one_entry() {
    let mut graph = Graph::new();
    let a = graph.insert("a");
    let b = graph.insert("b");

    graph.add_edge(a, b);
    graph.add_edge(b, a);

    assert_eq!(graph.node(a).unwrap().degree(), 1);
    assert_eq!(graph.node(b).unwrap().degree(), 1);
}

#[test]
fn test_remove_edge_clears_both_sides() {
    let mut graph = Graph::new();
    let a = graph.insert("a");
    let b = graph.insert("b");
    graph.add_edge(a, b);

    graph.remove_edge(a, b);

    assert!(!graph.node(a).unwrap().is_adjacent(b));
    assert!(!graph.node(b).unwrap().is_adjacent(a));
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_remove_edge_keeps_neighbor_order() {
    let mut graph = Graph::new();
    let a = graph.insert('a');
    let b = graph.insert('b');
    let c = graph.insert('c');
    let d = graph.insert('d');
    graph.add_edge(a, b);
    graph.add_edge(a, c);
    graph.add_edge(a, d);

    graph.remove_edge(a, b);

    let order: Vec<NodeId> = graph.neighbors(a).collect();
    assert_eq!(order, vec![c, d]);
}

#[test]
fn test_edge_count_counts_self_edge_once() {
    let mut graph = Graph::new();
    let a = graph.insert(1);
    let b = graph.insert(2);
    graph.add_edge(a, b);
    graph.add_edge(a, a);
    assert_eq!(graph.edge_count(), 2);
}

#[test]
fn test_remove_missing_edge_is_noop() {
    let mut graph = Graph::new();
    let a = graph.insert("a");
    let b = graph.insert("b");
    let c = graph.insert("c");
    graph.add_edge(a, b);

    graph.remove_edge(a, c);

    assert!(graph.node(a).unwrap().is_adjacent(b));
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_self_edge() {
    let mut graph = Graph::new();
    let a = graph.insert("a");

    graph.add_edge(a, a);

    assert!(graph.node(a).unwrap().is_adjacent(a));
    assert_eq!(graph.node(a).unwrap().degree(), 1);
    assert_eq!(graph.depth_first_search(a), vec![&"a"]);

    graph.remove_edge(a, a);
    assert_eq!(graph.node(a).unwrap().degree(), 0);
}

#[test]
fn test_edge_to_non_member_is_allowed() {
    let mut graph = Graph::new();
    let a = graph.insert("a");
    let outsider = graph.create_node("outsider");

    graph.add_edge(a, outsider);

    assert!(!graph.contains(outsider));
    assert!(graph.node(outsider).unwrap().is_adjacent(a));
    // Not counted: only edges between members.
    assert_eq!(graph.edge_count(), 0);
    // Still reachable through adjacency.
    assert_eq!(graph.breadth_first_search(a), vec![&"a", &"outsider"]);
}

// ==================== Remove Node Tests ====================

#[test]
fn test_remove_node_unlinks_neighbors() {
    let mut builder = GraphBuilder::new();
    let ids = builder.add_all(["a", "b", "c", "d"]);
    builder
        .link(ids[0], ids[1])
        .link(ids[0], ids[2])
        .link(ids[1], ids[2])
        .link(ids[2], ids[3]);
    let mut graph = builder.build();

    graph.remove_node(ids[2]);

    assert!(!graph.contains(ids[2]));
    assert_eq!(graph.node_count(), 3);
    for member in graph.nodes() {
        assert!(!graph.node(member).unwrap().is_adjacent(ids[2]));
    }
    assert_eq!(graph.node(ids[2]).unwrap().degree(), 0);
    assert_eq!(graph.edge_count(), 1);
    assert_symmetric(&graph);
}

#[test]
fn test_remove_non_member_is_noop() {
    let mut graph = Graph::new();
    let a = graph.insert("a");
    let outsider = graph.create_node("outsider");
    graph.add_edge(a, outsider);

    graph.remove_node(outsider);

    assert_eq!(graph.node_count(), 1);
    assert!(graph.node(a).unwrap().is_adjacent(outsider));
}

#[test]
fn test_removed_node_can_be_readded() {
    let mut graph = Graph::new();
    let a = graph.insert("a");
    let b = graph.insert("b");
    graph.add_edge(a, b);

    graph.remove_node(b);
    graph.add_node(b);

    assert!(graph.contains(b));
    assert_eq!(graph.value(b), Some(&"b"));
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.depth_first_search(a), vec![&"a"]);
}

#[test]
fn test_find_by_value_returns_first_member() {
    let mut graph = Graph::new();
    let first = graph.insert("dup");
    graph.insert("dup");
    let hidden = graph.create_node("only-outside");

    assert_eq!(graph.find_by_value(&"dup"), Some(first));
    assert_eq!(graph.find_by_value(&"only-outside"), None);
    assert!(!graph.contains(hidden));
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_chain_builds_path() {
    let mut builder = GraphBuilder::new();
    let ids = builder.add_all(["a", "b", "c"]);
    builder.chain(&ids);
    let graph = builder.build();

    assert_eq!(graph.node_count(), 3);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.breadth_first_search(ids[0]), vec![&"a", &"b", &"c"]);
}

#[test]
fn test_builder_from_edge_list_reuses_labels() {
    let graph = GraphBuilder::from_edge_list([("a", "b"), ("b", "c"), ("a", "b")], ["z", "a"])
        .build();

    let labels: Vec<&str> = graph
        .nodes()
        .filter_map(|id| graph.value(id))
        .map(String::as_str)
        .collect();
    assert_eq!(labels, vec!["a", "b", "c", "z"]);
    assert_eq!(graph.edge_count(), 2);
}
