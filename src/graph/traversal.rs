//! Graph traversal algorithms (DFS).

use std::collections::{btree_set, HashSet};

use log::{debug, trace};

use crate::types::{Direction, Label, WalkError, WalkResult};

use super::{Graph, TraversalTree};

/// One level of the depth-first walk: a vertex, its cost, and the neighbors
/// not yet looked at.
struct Frame<'g> {
    vertex: &'g Label,
    cost: u32,
    pending: btree_set::Iter<'g, Label>,
}

impl<'g> Frame<'g> {
    fn new(graph: &'g Graph, vertex: &'g Label, cost: u32, direction: Direction) -> Self {
        Self {
            vertex,
            cost,
            pending: graph.neighbors(vertex.as_str(), direction).iter(),
        }
    }
}

/// Depth-first walk from `root`, skipping anything already in `visited`.
///
/// Neighbors are taken in label order. Every hop costs 1 whatever the edge
/// weight. The frame stack yields the same tree and order as the recursive
/// formulation without growing the call stack.
fn explore<'g>(
    graph: &'g Graph,
    root: &'g Label,
    direction: Direction,
    visited: &mut HashSet<&'g Label>,
) -> TraversalTree {
    let mut tree = TraversalTree::default();

    visited.insert(root);
    tree.discover(root.clone(), None, 0);
    let mut stack = vec![Frame::new(graph, root, 0, direction)];

    while let Some(frame) = stack.last_mut() {
        match frame.pending.find(|&neighbor| !visited.contains(neighbor)) {
            Some(next) => {
                let cost = frame.cost + 1;
                trace!("discovered {} from {} at cost {}", next, frame.vertex, cost);
                visited.insert(next);
                tree.discover(next.clone(), Some(frame.vertex.clone()), cost);
                stack.push(Frame::new(graph, next, cost, direction));
            }
            None => {
                stack.pop();
            }
        }
    }

    tree
}

/// DFS traversal from a starting vertex.
///
/// Fails with [`WalkError::VertexNotFound`] if `start` is not in the graph.
pub fn dfs_traverse(graph: &Graph, start: &str, direction: Direction) -> WalkResult<TraversalTree> {
    let root = graph
        .vertex(start)
        .ok_or_else(|| WalkError::VertexNotFound(Label::from(start)))?;

    debug!("dfs from {} ({}, {})", root, graph.kind(), direction);
    let mut visited = HashSet::new();
    let tree = explore(graph, root, direction, &mut visited);
    debug!("dfs from {} visited {} vertices", root, tree.len());

    Ok(tree)
}

/// DFS over the whole graph: one tree per unvisited root, roots tried in
/// label order. Every vertex ends up in exactly one tree.
pub fn dfs_forest(graph: &Graph, direction: Direction) -> Vec<TraversalTree> {
    let mut visited = HashSet::new();
    let mut forest = Vec::new();

    for root in graph.vertices() {
        if visited.contains(root) {
            continue;
        }
        debug!("dfs forest: new root {}", root);
        forest.push(explore(graph, root, direction, &mut visited));
    }

    forest
}
