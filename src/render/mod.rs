/// Snapshot to bar-chart mapping
pub mod bars;
/// Snapshot to node-link mapping
pub mod graph;
/// Colour classes and their RGBA values
pub mod palette;

pub use bars::{BarVisual, BarView};
pub use graph::{EdgeVisual, GraphScene, NodeVisual};
pub use palette::ColorClass;
