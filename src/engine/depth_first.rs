//! Stateful depth-first engine: runs traversals over a borrowed graph and
//! answers tree queries about the most recent one.

use crate::graph::traversal::{dfs_forest, dfs_traverse};
use crate::graph::{Graph, Groups, TraversalTree};
use crate::types::{Direction, Label, WalkResult};

/// Depth-first traversal engine.
///
/// Holds the tree of the last [`DepthFirst::traverse`] call. Each call
/// discards the previous tree before doing anything else, so a failed call
/// leaves an empty tree behind.
pub struct DepthFirst<'g> {
    graph: &'g Graph,
    direction: Direction,
    tree: TraversalTree,
}

impl<'g> DepthFirst<'g> {
    /// Create an engine following forward adjacency.
    pub fn new(graph: &'g Graph) -> Self {
        Self::with_direction(graph, Direction::Forward)
    }

    /// Create an engine following the given adjacency (directed graphs only;
    /// undirected graphs ignore it).
    pub fn with_direction(graph: &'g Graph, direction: Direction) -> Self {
        Self {
            graph,
            direction,
            tree: TraversalTree::default(),
        }
    }

    /// The graph being traversed.
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// The adjacency this engine follows.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Run a traversal from `start`, replacing the previous tree.
    pub fn traverse(&mut self, start: &str) -> WalkResult<&TraversalTree> {
        self.tree = TraversalTree::default();
        self.tree = dfs_traverse(self.graph, start, self.direction)?;
        Ok(&self.tree)
    }

    /// One tree per component, roots tried in label order.
    ///
    /// Does not touch the tree held for queries.
    pub fn traverse_all(&self) -> Vec<TraversalTree> {
        dfs_forest(self.graph, self.direction)
    }

    /// Tree of the last traversal.
    pub fn tree(&self) -> &TraversalTree {
        &self.tree
    }

    /// Discovery order of the last traversal.
    pub fn order(&self) -> &[Label] {
        self.tree.order()
    }

    /// Take the tree of the last traversal, leaving an empty one.
    pub fn take_tree(&mut self) -> TraversalTree {
        std::mem::take(&mut self.tree)
    }

    pub fn path_to_origin(&self, vertex: &str) -> WalkResult<Vec<Label>> {
        self.tree.path_to_origin(vertex)
    }

    pub fn origin(&self, vertex: &str) -> WalkResult<&Label> {
        self.tree.origin(vertex)
    }

    pub fn groups(&self) -> Groups {
        self.tree.groups()
    }

    pub fn cost(&self, vertex: &str) -> WalkResult<u32> {
        self.tree.cost(vertex)
    }
}
