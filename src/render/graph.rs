//! Snapshot to node-link mapping for traversal pages

use bitvec::prelude::*;

use crate::algorithm::runner::FinalResult;
use crate::algorithm::snapshot::{Detail, StepSnapshot};
use crate::model::Graph;
use crate::render::palette::ColorClass;
use crate::session::state::RunState;

/// Visual attributes of one node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeVisual {
    /// Node id
    pub id: usize,
    /// Horizontal position in `[0, 1]`
    pub x: f32,
    /// Vertical position in `[0, 1]`
    pub y: f32,
    /// Colour class
    pub class: ColorClass,
}

/// Visual attributes of one edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeVisual {
    /// Lower endpoint
    pub from: usize,
    /// Higher endpoint
    pub to: usize,
    /// Both endpoints have been visited
    pub explored: bool,
}

/// Drawable description of a graph at one instant
#[derive(Debug, Clone, PartialEq)]
pub struct GraphScene {
    /// Nodes in id order
    pub nodes: Vec<NodeVisual>,
    /// Edges in the graph's edge-list order
    pub edges: Vec<EdgeVisual>,
}

impl GraphScene {
    /// Map a graph plus traversal progress to visuals
    ///
    /// A completed run colours every node it never reached as
    /// [`ColorClass::Unreached`]. Node ids in the snapshot that fall
    /// outside the graph are ignored.
    pub fn build(
        graph: &Graph,
        snapshot: Option<&StepSnapshot>,
        state: RunState,
        result: Option<&FinalResult>,
    ) -> Self {
        let node_count = graph.node_count();
        let mut visited = bitvec![0; node_count];
        let mut stacked = bitvec![0; node_count];

        let visit_order = match (state, result, snapshot.map(|s| &s.detail)) {
            (RunState::Completed, Some(result), _) => result.visit_order.as_slice(),
            (_, _, Some(Detail::Traversal { visited, .. })) => visited.as_slice(),
            _ => &[],
        };
        mark(&mut visited, visit_order);
        if let Some(Detail::Traversal { stack, .. }) = snapshot.map(|s| &s.detail) {
            mark(&mut stacked, stack);
        }

        let completed = state == RunState::Completed;
        let nodes = graph
            .nodes()
            .iter()
            .enumerate()
            .map(|(id, node)| {
                let seen = visited.get(id).as_deref() == Some(&true);
                let class = if completed {
                    if seen {
                        ColorClass::Visited
                    } else {
                        ColorClass::Unreached
                    }
                } else if let Some(role) = snapshot.and_then(|s| s.role_of(id)) {
                    ColorClass::from_role(role)
                } else if stacked.get(id).as_deref() == Some(&true) {
                    ColorClass::Stacked
                } else {
                    ColorClass::Default
                };
                NodeVisual {
                    id,
                    x: node.x,
                    y: node.y,
                    class,
                }
            })
            .collect();

        let edges = graph
            .edges()
            .iter()
            .map(|&(from, to)| EdgeVisual {
                from,
                to,
                explored: visited.get(from).as_deref() == Some(&true)
                    && visited.get(to).as_deref() == Some(&true),
            })
            .collect();

        Self { nodes, edges }
    }
}

fn mark(set: &mut BitVec, ids: &[usize]) {
    for &id in ids {
        if id < set.len() {
            set.set(id, true);
        }
    }
}
