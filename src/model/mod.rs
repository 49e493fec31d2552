/// Random-access graph with layout coordinates for traversal demos
pub mod graph;
/// Ordered numeric sequences and the key abstraction used by the sorts
pub mod sequence;

pub use graph::{Graph, GraphNode};
pub use sequence::{Keyed, Sequence};
