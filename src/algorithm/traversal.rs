//! Depth-first traversal with an explicit stack

use std::ops::ControlFlow;

use bitvec::prelude::*;

use crate::algorithm::snapshot::{Detail, Highlight, Role, StepKind};
use crate::algorithm::stepper::{Flow, Stepper};
use crate::model::Graph;

/// Visit every node reachable from `root` in depth-first order
///
/// A visit pops a node, marks it, and pushes its unvisited neighbours in
/// reverse adjacency order so that the lowest neighbour is explored first.
/// Nodes may sit on the stack more than once; stale entries are skipped
/// without publishing a step. Continues with the visit order.
pub fn depth_first(graph: &Graph, root: usize, stepper: &mut Stepper<'_>) -> Flow<Vec<usize>> {
    stepper.checkpoint()?;

    let mut order = Vec::new();
    if root >= graph.node_count() {
        return ControlFlow::Continue(order);
    }

    let mut visited = bitvec![0; graph.node_count()];
    let mut stack = vec![root];

    while let Some(node) = stack.pop() {
        if visited.get(node).as_deref() == Some(&true) {
            continue;
        }
        visited.set(node, true);
        order.push(node);

        for &next in graph.neighbors(node).iter().rev() {
            if visited.get(next).as_deref() == Some(&false) {
                stack.push(next);
            }
        }

        let mut highlights: Vec<Highlight> = order
            .iter()
            .map(|&seen| Highlight::new(seen, Role::Visited))
            .collect();
        highlights.push(Highlight::new(node, Role::Current));

        stepper.step::<u32>(
            StepKind::Visit,
            &[],
            highlights,
            Detail::Traversal {
                visited: order.clone(),
                stack: stack.clone(),
            },
        )?;
    }

    ControlFlow::Continue(order)
}
