//! spath - Single-Source Shortest Paths with an addressable priority queue
//!
//! This library computes shortest-path trees on weighted, directed graphs
//! using Dijkstra's algorithm. The priority queue underneath is addressable:
//! every insertion returns a stable handle through which the entry's priority
//! can be decreased in place, so the relaxation loop never reinserts a vertex.
//!
//! Edge weights are non-negative integers supplied by a weight function kept
//! separately from the graph structure.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::dijkstra::ShortestPaths;
pub use algorithm::{Distance, DistanceEstimate};
pub use data_structures::{AddressableHeap, Handle};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::Edge;

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid vertex ID: {0}")]
    InvalidVertex(usize),

    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Extract-min called on an empty heap")]
    EmptyHeap,

    #[error("Decrease-key must strictly lower an entry's priority")]
    InvalidDecrease,

    #[error("Heap handle does not refer to a live entry")]
    InvalidHandle,

    #[error("Vertex {0} is unreachable from the source")]
    Unreachable(usize),

    #[error("No weight defined for edge {0} -> {1}")]
    MissingWeight(usize, usize),

    #[error("Shortest-path tree not computed; call run() first")]
    NotComputed,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
