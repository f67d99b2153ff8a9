use crate::graph::traits::{Edge, Graph, MutableGraph};
use std::collections::HashMap;

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone, Default)]
pub struct DirectedGraph {
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Outgoing edges for each vertex: vertex_id -> [edges]
    outgoing_edges: HashMap<usize, Vec<Edge>>,
}

impl DirectedGraph {
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertex_count: 0,
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        let mut graph = DirectedGraph {
            vertex_count: vertices,
            outgoing_edges: HashMap::with_capacity(vertices),
        };

        // Initialize empty edge lists for each vertex
        for v in 0..vertices {
            graph.outgoing_edges.insert(v, Vec::new());
        }

        graph
    }
}

impl Graph for DirectedGraph {
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn vertices(&self) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(0..self.vertex_count)
    }

    fn edges_from(&self, vertex: usize) -> Box<dyn Iterator<Item = Edge> + '_> {
        if let Some(edges) = self.outgoing_edges.get(&vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn has_edge(&self, from: usize, to: usize) -> bool {
        if let Some(edges) = self.outgoing_edges.get(&from) {
            edges.iter().any(|edge| edge.to == to)
        } else {
            false
        }
    }
}

impl MutableGraph for DirectedGraph {
    fn add_vertex(&mut self) -> usize {
        let new_id = self.vertex_count;
        self.outgoing_edges.insert(new_id, Vec::new());
        self.vertex_count += 1;
        new_id
    }

    fn add_edge(&mut self, from: usize, to: usize) -> Option<Edge> {
        if !self.has_vertex(from) || !self.has_vertex(to) {
            return None;
        }

        let edge = Edge::new(from, to);
        let edges = self.outgoing_edges.entry(from).or_default();
        if !edges.contains(&edge) {
            edges.push(edge);
        }

        Some(edge)
    }
}
