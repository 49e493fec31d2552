//! Limits, defaults and presentation constants

// Custom input limits enforced before a run starts
/// Maximum number of values accepted from custom input
pub const MAX_ELEMENTS: usize = 100;
/// Smallest value accepted from custom input
pub const MIN_VALUE: u32 = 0;
/// Largest value accepted from custom input
pub const MAX_VALUE: u32 = 999;
/// Largest value counting sort accepts, bounding its tally array
pub const MAX_COUNTING_VALUE: u32 = MAX_VALUE;

// Generated input
/// Default number of bars for generated sequences
pub const DEFAULT_SIZE: usize = 20;
/// Smallest size selectable with the size slider
pub const MIN_SIZE: usize = 2;
/// Largest size selectable with the size slider
pub const MAX_SIZE: usize = MAX_ELEMENTS;
/// Upper bound (inclusive) for randomly generated values
pub const MAX_GENERATED_VALUE: u32 = 100;
/// Default node count for generated graphs
pub const DEFAULT_NODE_COUNT: usize = 10;
/// Largest node count for generated graphs
pub const MAX_NODE_COUNT: usize = 40;
/// Chance that a generated node links back to an earlier node
pub const GRAPH_EDGE_PROBABILITY: f64 = 0.8;
/// Extra random edges per generated node, as a fraction of node count
pub const GRAPH_EXTRA_EDGE_RATIO: f64 = 0.3;
/// Node every traversal starts from
pub const TRAVERSAL_ROOT: usize = 0;

// Speed slider mapping
/// Slowest speed setting
pub const MIN_SPEED: u32 = 1;
/// Fastest speed setting
pub const MAX_SPEED: u32 = 100;
/// Speed selected when a page opens
pub const DEFAULT_SPEED: u32 = 50;
/// Delay between steps at the slowest speed
pub const MAX_DELAY_MS: u64 = 1000;

// Default values for configurable parameters
/// Fixed seed for reproducible generation
pub const DEFAULT_SEED: u64 = 42;

// Output settings
/// Delay between GIF animation frames
pub const GIF_FRAME_DELAY_MS: u32 = 20;
/// Minimum frame delay that viewers reliably support (in milliseconds)
pub const VIEWER_MIN_FRAME_DELAY_MS: u32 = 20;
/// Final frame is held this many times longer than a regular frame
pub const FINAL_FRAME_HOLD: u32 = 25;
/// Width of a bar in pixels
pub const BAR_WIDTH_PX: u32 = 8;
/// Gap between bars in pixels
pub const BAR_GAP_PX: u32 = 2;
/// Height of the bar chart canvas in pixels
pub const CHART_HEIGHT_PX: u32 = 160;
/// Edge length of the square graph canvas in pixels
pub const GRAPH_CANVAS_PX: u32 = 240;
/// Radius of a drawn graph node in pixels
pub const NODE_RADIUS_PX: u32 = 6;
