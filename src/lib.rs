//! depthwalk — labeled graphs with a depth-first traversal engine.
//!
//! A [`Graph`] stores vertices and (optionally weighted) edges, directed or
//! undirected. [`DepthFirst`] walks it from a start vertex and records a
//! spanning tree: predecessor and hop count per visited vertex plus the
//! discovery order. The tree answers path-to-origin, origin and grouping
//! queries.

pub mod engine;
pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use engine::DepthFirst;
pub use graph::{
    dfs_forest, dfs_traverse, Decorated, Graph, GraphBuilder, Groups, IdSequence, Relation,
    TraversalTree, TreeEntry,
};
pub use types::{Direction, Edge, GraphKind, Label, WalkError, WalkResult};
