//! High-level operations: the depth-first traversal engine.

pub mod depth_first;

pub use depth_first::DepthFirst;
pub use crate::graph::{Groups, TraversalTree, TreeEntry};
