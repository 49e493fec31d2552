//! Undirected graph with 2-D node positions for traversal demos
//!
//! Nodes are identified by their index. Positions are normalised to the
//! unit square so renderers can scale them to any canvas. The adjacency of
//! each node is kept sorted, which fixes the order DFS explores neighbours.

use bitvec::prelude::*;

use crate::io::error::{AlgoVizError, Result};

/// Layout position of a single node
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GraphNode {
    /// Horizontal coordinate in `[0, 1]`
    pub x: f32,
    /// Vertical coordinate in `[0, 1]`
    pub y: f32,
}

/// Undirected graph with an edge list and a derived adjacency relation
#[derive(Debug, Clone, PartialEq)]
pub struct Graph {
    nodes: Vec<GraphNode>,
    edges: Vec<(usize, usize)>,
    adjacency: Vec<Vec<usize>>,
}

impl Graph {
    /// Build a graph from node positions and undirected edges
    ///
    /// Edges are normalised so that `from < to`; duplicates and self loops
    /// are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`AlgoVizError::InvalidInput`] if an edge references a node
    /// index outside `nodes`.
    pub fn new(nodes: Vec<GraphNode>, edges: &[(usize, usize)]) -> Result<Self> {
        let node_count = nodes.len();
        let mut adjacency = vec![Vec::new(); node_count];
        let mut normalised = Vec::with_capacity(edges.len());

        for &(a, b) in edges {
            if a >= node_count || b >= node_count {
                return Err(AlgoVizError::InvalidInput {
                    reason: format!("edge {a}-{b} references a node outside 0..{node_count}"),
                });
            }
            if a == b {
                continue;
            }
            let edge = (a.min(b), a.max(b));
            if normalised.contains(&edge) {
                continue;
            }
            normalised.push(edge);
            if let Some(list) = adjacency.get_mut(a) {
                list.push(b);
            }
            if let Some(list) = adjacency.get_mut(b) {
                list.push(a);
            }
        }

        for list in &mut adjacency {
            list.sort_unstable();
        }

        Ok(Self {
            nodes,
            edges: normalised,
            adjacency,
        })
    }

    /// Build a graph whose nodes are laid out on a circle
    ///
    /// # Errors
    ///
    /// Returns an error if an edge references a node outside `0..node_count`.
    pub fn circular(node_count: usize, edges: &[(usize, usize)]) -> Result<Self> {
        let nodes = (0..node_count)
            .map(|i| {
                let angle = std::f32::consts::TAU * i as f32 / node_count.max(1) as f32;
                GraphNode {
                    x: 0.5 + 0.4 * angle.cos(),
                    y: 0.5 + 0.4 * angle.sin(),
                }
            })
            .collect();
        Self::new(nodes, edges)
    }

    /// Number of nodes
    pub const fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Node positions indexed by node id
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Normalised edge list
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// Sorted neighbours of `node`, empty for unknown nodes
    pub fn neighbors(&self, node: usize) -> &[usize] {
        self.adjacency.get(node).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether an undirected edge joins `a` and `b`
    pub fn has_edge(&self, a: usize, b: usize) -> bool {
        self.neighbors(a).binary_search(&b).is_ok()
    }

    /// Set of nodes reachable from `root`, including `root` itself
    pub fn reachable_from(&self, root: usize) -> BitVec {
        let mut seen = bitvec![0; self.node_count()];
        if root >= self.node_count() {
            return seen;
        }

        let mut frontier = vec![root];
        seen.set(root, true);
        while let Some(node) = frontier.pop() {
            for &next in self.neighbors(node) {
                if seen.get(next).as_deref() == Some(&false) {
                    seen.set(next, true);
                    frontier.push(next);
                }
            }
        }
        seen
    }
}
