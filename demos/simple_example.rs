use spath::graph::{Graph, MutableGraph};
use spath::{DirectedGraph, Distance, Edge, ShortestPaths};
use std::collections::HashMap;

fn main() {
    // Create a simple directed graph
    let mut graph = DirectedGraph::new();
    let mut weights: HashMap<Edge, u64> = HashMap::new();

    // Add vertices (0-4)
    for _ in 0..5 {
        graph.add_vertex();
    }

    // Add edges with weights
    let edges = [
        (0, 1, 10),
        (0, 2, 5),
        (1, 3, 1),
        (2, 1, 3),
        (2, 3, 9),
        (2, 4, 2),
        (3, 4, 4),
        (4, 0, 7),
        (4, 3, 6),
    ];
    for (from, to, weight) in edges {
        let edge = graph.add_edge(from, to).expect("vertices exist");
        weights.insert(edge, weight);
    }

    // Source vertex
    let source = 0;

    println!("--- Shortest paths on a simple graph ---");
    println!(
        "Graph has {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    let mut engine = ShortestPaths::new(&graph, &weights, source).unwrap();
    engine.run().unwrap();

    for v in 0..graph.vertex_count() {
        match engine.distance_estimate(v).unwrap() {
            Distance::Infinite => println!("Vertex {}: unreachable", v),
            Distance::Finite(dist) => {
                let path = engine.path(v).unwrap();
                let hops: Vec<String> = path.iter().map(|e| e.to_string()).collect();
                println!("Vertex {}: distance = {}, path = [{}]", v, dist, hops.join(", "));
            }
        }
    }
}
