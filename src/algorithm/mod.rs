pub mod dijkstra;
pub mod distance;

pub use dijkstra::ShortestPaths;
pub use distance::{Distance, DistanceEstimate};
