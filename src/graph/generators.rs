use crate::graph::{DirectedGraph, Edge, MutableGraph};
use rand::Rng;
use std::collections::HashMap;

/// Generates a random sparse digraph with `n` vertices and roughly
/// `edge_factor * n` edges, plus a weight map covering every edge
///
/// Weights are drawn uniformly from `1..=max_weight`. Self-loops are skipped.
pub fn generate_random_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    max_weight: u64,
    rng: &mut R,
) -> (DirectedGraph, HashMap<Edge, u64>) {
    let mut graph = DirectedGraph::with_capacity(n);
    let mut weights = HashMap::new();

    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            if let Some(edge) = graph.add_edge(u, v) {
                weights.entry(edge).or_insert_with(|| rng.gen_range(1..=max_weight));
            }
        }
    }

    (graph, weights)
}

/// Generates a 2D grid digraph with edges in the four cardinal directions,
/// all of weight 1
pub fn generate_grid_graph(width: usize, height: usize) -> (DirectedGraph, HashMap<Edge, u64>) {
    let mut graph = DirectedGraph::with_capacity(width * height);
    let mut weights = HashMap::new();

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;

            let directions = [(0i64, -1i64), (1, 0), (0, 1), (-1, 0)];

            for (dx, dy) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;

                if nx >= 0 && ny >= 0 && nx < width as i64 && ny < height as i64 {
                    let neighbor = ny as usize * width + nx as usize;
                    if let Some(edge) = graph.add_edge(vertex, neighbor) {
                        weights.insert(edge, 1);
                    }
                }
            }
        }
    }

    (graph, weights)
}
