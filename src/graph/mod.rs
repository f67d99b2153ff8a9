pub mod traits;
pub mod directed;
pub mod generators;

pub use traits::{Edge, EdgeWeights, Graph, MutableGraph};
pub use directed::DirectedGraph;
