//! Seeded random input generation for sequences and graphs

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::io::configuration::{
    GRAPH_EDGE_PROBABILITY, GRAPH_EXTRA_EDGE_RATIO, MAX_GENERATED_VALUE,
};
use crate::io::error::Result;
use crate::model::{Graph, GraphNode, Sequence};

// Keeps generated nodes away from the canvas border
const LAYOUT_MARGIN: f32 = 0.08;

/// Deterministic source of random sequences and graphs
///
/// Successive calls advance the same generator, so regenerating yields new
/// data while a fixed seed still reproduces the whole session.
pub struct InputGenerator {
    rng: StdRng,
}

impl InputGenerator {
    /// Create a generator from a seed
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Random values in `1..=MAX_GENERATED_VALUE`
    pub fn random_sequence(&mut self, size: usize) -> Sequence {
        let values = (0..size)
            .map(|_| self.rng.random_range(1..=MAX_GENERATED_VALUE))
            .collect();
        Sequence::new(values)
    }

    /// Random values sorted in non-decreasing order, for sorted-input searches
    pub fn random_sorted_sequence(&mut self, size: usize) -> Sequence {
        self.random_sequence(size).sorted()
    }

    /// Pick a search target, usually present in `sequence`
    ///
    /// One time in four a random value is drawn instead, so absent targets
    /// show up as well.
    pub fn random_target(&mut self, sequence: &Sequence) -> u32 {
        let values = sequence.values();
        if values.is_empty() || self.rng.random_bool(0.25) {
            return self.rng.random_range(1..=MAX_GENERATED_VALUE);
        }
        let index = self.rng.random_range(0..values.len());
        values.get(index).copied().unwrap_or(1)
    }

    /// Random graph with scattered node positions
    ///
    /// Each node after the first links back to a random earlier node with
    /// probability `GRAPH_EDGE_PROBABILITY`, then a few extra edges are
    /// added between random pairs. The result is often, but not always,
    /// connected.
    ///
    /// # Errors
    ///
    /// Propagates graph construction errors, which cannot occur for the
    /// indices generated here.
    pub fn random_graph(&mut self, node_count: usize) -> Result<Graph> {
        let span = 1.0 - 2.0 * LAYOUT_MARGIN;
        let nodes: Vec<GraphNode> = (0..node_count)
            .map(|_| GraphNode {
                x: LAYOUT_MARGIN + span * self.rng.random::<f32>(),
                y: LAYOUT_MARGIN + span * self.rng.random::<f32>(),
            })
            .collect();

        let mut edges = Vec::new();
        for node in 1..node_count {
            if self.rng.random_bool(GRAPH_EDGE_PROBABILITY) {
                edges.push((node, self.rng.random_range(0..node)));
            }
        }

        if node_count > 1 {
            let extra = (node_count as f64 * GRAPH_EXTRA_EDGE_RATIO) as usize;
            for _ in 0..extra {
                let a = self.rng.random_range(0..node_count);
                let b = self.rng.random_range(0..node_count);
                edges.push((a, b));
            }
        }

        Graph::new(nodes, &edges)
    }
}
