//! Snapshot capture and animated GIF export

use std::path::Path;

use image::{Frame, Rgba, RgbaImage};

use crate::algorithm::runner::{FinalResult, Outcome};
use crate::algorithm::snapshot::{Detail, StepSnapshot};
use crate::io::configuration::{
    BAR_GAP_PX, BAR_WIDTH_PX, CHART_HEIGHT_PX, FINAL_FRAME_HOLD, GRAPH_CANVAS_PX, NODE_RADIUS_PX,
    VIEWER_MIN_FRAME_DELAY_MS,
};
use crate::io::error::{AlgoVizError, Result};
use crate::model::{Graph, Sequence};
use crate::render::bars::{BarView, BarVisual};
use crate::render::graph::GraphScene;
use crate::render::palette::ColorClass;
use crate::session::state::RunState;

const BACKGROUND: [u8; 4] = [255, 255, 255, 255];
const EDGE_COLOR: [u8; 4] = [176, 190, 197, 255];
const EXPLORED_EDGE_COLOR: [u8; 4] = [55, 71, 79, 255];
const EMPTY_SLOT_PX: u32 = 2;

enum Canvas {
    Bars { initial: Vec<u32> },
    Graph(Graph),
}

/// Records the snapshots of one run for later rendering
///
/// Frames are rasterised only at export time, through the same render
/// mapping an interactive page uses.
pub struct SnapshotCapture {
    canvas: Canvas,
    snapshots: Vec<StepSnapshot>,
    result: Option<FinalResult>,
}

impl SnapshotCapture {
    /// Capture for a sort or search over `sequence`
    pub fn for_sequence(sequence: &Sequence) -> Self {
        Self {
            canvas: Canvas::Bars {
                initial: sequence.values().to_vec(),
            },
            snapshots: Vec::new(),
            result: None,
        }
    }

    /// Capture for a traversal of `graph`
    pub fn for_graph(graph: &Graph) -> Self {
        Self {
            canvas: Canvas::Graph(graph.clone()),
            snapshots: Vec::new(),
            result: None,
        }
    }

    /// Record one published snapshot
    pub fn record(&mut self, snapshot: &StepSnapshot) {
        self.snapshots.push(snapshot.clone());
    }

    /// Record how the run ended, used for the final frame
    pub fn finish(&mut self, result: &FinalResult) {
        self.result = Some(result.clone());
    }

    /// Snapshots recorded so far
    pub fn snapshots(&self) -> &[StepSnapshot] {
        &self.snapshots
    }

    /// Number of recorded snapshots
    pub const fn frame_count(&self) -> usize {
        self.snapshots.len()
    }

    /// Export the captured run as a GIF with automatic frame skipping
    ///
    /// If `frame_delay_ms` is shorter than viewers reliably display, frames
    /// are dropped so the animation keeps its apparent speed. The first
    /// frame shows the input before any step and the last one is held
    /// longer so the final state stays readable.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No snapshots were captured
    /// - File system operations fail
    /// - GIF encoding fails
    pub fn export_gif(&self, output_path: &Path, frame_delay_ms: u32) -> Result<()> {
        if self.snapshots.is_empty() {
            return Err(AlgoVizError::InvalidInput {
                reason: "No steps captured for visualization".to_string(),
            });
        }

        let frame_delay_ms = frame_delay_ms.max(1);
        let effective_delay_ms = frame_delay_ms.max(VIEWER_MIN_FRAME_DELAY_MS);
        let skip_factor = if frame_delay_ms < VIEWER_MIN_FRAME_DELAY_MS {
            VIEWER_MIN_FRAME_DELAY_MS.div_ceil(frame_delay_ms) as usize
        } else {
            1
        };

        let frames = self.generate_frames(effective_delay_ms, skip_factor);

        if let Some(parent) = output_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| AlgoVizError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }

        let file = std::fs::File::create(output_path).map_err(|e| AlgoVizError::FileSystem {
            path: output_path.to_path_buf(),
            operation: "create file",
            source: e,
        })?;

        let mut encoder = image::codecs::gif::GifEncoder::new(file);
        encoder
            .encode_frames(frames)
            .map_err(|e| AlgoVizError::ImageExport {
                path: output_path.to_path_buf(),
                source: e,
            })?;

        tracing::info!(
            path = %output_path.display(),
            snapshots = self.snapshots.len(),
            skip_factor,
            "visualization exported"
        );
        Ok(())
    }

    fn generate_frames(&self, delay_ms: u32, skip_factor: usize) -> Vec<Frame> {
        let with_output_row = self.snapshots.iter().any(|snapshot| {
            matches!(
                snapshot.detail,
                Detail::Counting { .. } | Detail::Radix { .. }
            )
        });

        let mut frames = vec![self.render(None, RunState::Idle, with_output_row, delay_ms)];

        for (count, snapshot) in self.snapshots.iter().enumerate() {
            if (count + 1) % skip_factor == 0 {
                frames.push(self.render(Some(snapshot), RunState::Running, with_output_row, delay_ms));
            }
        }

        let last = self.snapshots.last();
        let final_state = match self.result.as_ref().map(|r| r.outcome) {
            Some(Outcome::Completed) => RunState::Completed,
            Some(Outcome::Cancelled) => RunState::Cancelled,
            None => RunState::Running,
        };
        frames.push(self.render(
            last,
            final_state,
            with_output_row,
            delay_ms * FINAL_FRAME_HOLD,
        ));

        frames
    }

    fn render(
        &self,
        snapshot: Option<&StepSnapshot>,
        state: RunState,
        with_output_row: bool,
        delay_ms: u32,
    ) -> Frame {
        let image = match &self.canvas {
            Canvas::Bars { initial } => {
                let view = BarView {
                    sequence: initial,
                    snapshot,
                    state,
                    result: self.result.as_ref(),
                };
                render_bars(&view, with_output_row)
            }
            Canvas::Graph(graph) => {
                let scene = GraphScene::build(graph, snapshot, state, self.result.as_ref());
                render_graph(&scene)
            }
        };

        Frame::from_parts(image, 0, 0, image::Delay::from_numer_denom_ms(delay_ms, 1))
    }
}

fn render_bars(view: &BarView<'_>, with_output_row: bool) -> RgbaImage {
    let bars = view.bars();
    let output = view.output_bars();
    let columns = bars.len().max(output.len()).max(1) as u32;
    let width = columns * (BAR_WIDTH_PX + BAR_GAP_PX) + BAR_GAP_PX;
    let rows = if with_output_row { 2 } else { 1 };
    let height = rows * CHART_HEIGHT_PX + (rows + 1) * BAR_GAP_PX;

    let mut image = RgbaImage::from_pixel(width, height, Rgba(BACKGROUND));
    draw_bar_row(&mut image, &bars, BAR_GAP_PX + CHART_HEIGHT_PX);
    if with_output_row {
        draw_bar_row(&mut image, &output, height - BAR_GAP_PX);
    }
    image
}

fn draw_bar_row(image: &mut RgbaImage, bars: &[BarVisual], baseline: u32) {
    for bar in bars {
        let left = BAR_GAP_PX + bar.index as u32 * (BAR_WIDTH_PX + BAR_GAP_PX);
        let pixels = if bar.value.is_none() {
            EMPTY_SLOT_PX
        } else {
            (bar.height.clamp(0.0, 1.0) * CHART_HEIGHT_PX as f32).round() as u32
        };
        let color = Rgba(bar.class.rgba());

        for y in baseline.saturating_sub(pixels)..baseline {
            for x in left..left + BAR_WIDTH_PX {
                if x < image.width() && y < image.height() {
                    image.put_pixel(x, y, color);
                }
            }
        }
    }
}

fn render_graph(scene: &GraphScene) -> RgbaImage {
    let mut image = RgbaImage::from_pixel(GRAPH_CANVAS_PX, GRAPH_CANVAS_PX, Rgba(BACKGROUND));
    let scale = (GRAPH_CANVAS_PX - 1) as f32;
    let position = |id: usize| {
        scene
            .nodes
            .get(id)
            .map(|node| (node.x * scale, node.y * scale))
    };

    for edge in &scene.edges {
        if let (Some(from), Some(to)) = (position(edge.from), position(edge.to)) {
            let color = if edge.explored {
                EXPLORED_EDGE_COLOR
            } else {
                EDGE_COLOR
            };
            draw_line(&mut image, from, to, Rgba(color));
        }
    }

    for node in &scene.nodes {
        draw_disc(&mut image, (node.x * scale, node.y * scale), node.class);
    }
    image
}

fn draw_line(image: &mut RgbaImage, from: (f32, f32), to: (f32, f32), color: Rgba<u8>) {
    let steps = (to.0 - from.0).abs().max((to.1 - from.1).abs()).ceil().max(1.0) as u32;
    for step in 0..=steps {
        let t = step as f32 / steps as f32;
        let x = from.0 + (to.0 - from.0) * t;
        let y = from.1 + (to.1 - from.1) * t;
        put(image, x.round() as i64, y.round() as i64, color);
    }
}

fn draw_disc(image: &mut RgbaImage, center: (f32, f32), class: ColorClass) {
    let radius = i64::from(NODE_RADIUS_PX);
    let (cx, cy) = (center.0.round() as i64, center.1.round() as i64);
    let color = Rgba(class.rgba());

    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy <= radius * radius {
                put(image, cx + dx, cy + dy, color);
            }
        }
    }
}

fn put(image: &mut RgbaImage, x: i64, y: i64, color: Rgba<u8>) {
    if let (Ok(x), Ok(y)) = (u32::try_from(x), u32::try_from(y)) {
        if x < image.width() && y < image.height() {
            image.put_pixel(x, y, color);
        }
    }
}
