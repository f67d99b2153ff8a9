use spath::graph::generators::generate_random_graph;
use spath::graph::Graph;
use spath::{Distance, ShortestPaths};
use std::time::{Duration, Instant};

// Runs one shortest-path computation and reports how many vertices it reached
fn benchmark_run(
    graph: &spath::DirectedGraph,
    weights: &std::collections::HashMap<spath::Edge, u64>,
    source: usize,
) -> Duration {
    println!(
        "Running Dijkstra on graph with {} vertices...",
        graph.vertex_count()
    );

    let mut engine = ShortestPaths::new(graph, weights, source).unwrap();

    let start = Instant::now();
    engine.run().unwrap();
    let duration = start.elapsed();

    let reachable = (0..graph.vertex_count())
        .filter(|&v| {
            matches!(engine.distance_estimate(v), Ok(Distance::Finite(_)))
        })
        .count();
    println!("  - Found {} reachable vertices in {:?}", reachable, duration);

    duration
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];

    // Edge factor: average number of edges per vertex
    let edge_factor = 2.0;

    println!("=====================================================");
    println!("Benchmark: Dijkstra with addressable heap");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut rng = rand::thread_rng();
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let (graph, weights) = generate_random_graph(size, edge_factor, 100, &mut rng);
        let source = 0;

        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let duration = benchmark_run(&graph, &weights, source);
        results.push((size, duration));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!("{:<10} | {:<15}", "Vertices", "Dijkstra (ms)");
    println!("-----------------------------------------------------");

    for (size, duration) in &results {
        println!("{:<10} | {:<15.2}", size, duration.as_millis());
    }
}
