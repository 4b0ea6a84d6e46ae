//! Basic build -> traverse -> mutate flow.

use undirected_graph::*;

fn main() {
    // A-B-C-D in a line, plus an isolated E
    let mut graph = Graph::new();
    let a = graph.create_node("A");
    let b = graph.create_node("B");
    let c = graph.create_node("C");
    let d = graph.create_node("D");
    let e = graph.create_node("E");
    graph.add_nodes([a, b, c, d, e]);

    graph.add_edge(a, b);
    graph.add_edge(b, c);
    graph.add_edge(c, d);

    println!(
        "Graph has {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    println!("DFS from A: {:?}", graph.depth_first_search(a));
    println!("BFS from A: {:?}", graph.breadth_first_search(a));

    match graph.distance_of_shortest_path(a, d) {
        Some(distance) => println!("Distance A -> D: {}", distance),
        None => println!("D is unreachable from A"),
    }
    match graph.distance_of_shortest_path(a, e) {
        Some(distance) => println!("Distance A -> E: {}", distance),
        None => println!("E is unreachable from A"),
    }

    // Dropping C splits the line in two
    graph.remove_node(c);
    println!("After removing C, BFS from A: {:?}", graph.breadth_first_search(a));
    println!("After removing C, BFS from D: {:?}", graph.breadth_first_search(d));
}
