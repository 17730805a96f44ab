//! In-memory graph operations: the store, its builder, and traversal.

pub mod builder;
pub mod decorated;
pub mod store;
pub mod traversal;
pub mod tree;

pub use builder::GraphBuilder;
pub use decorated::{Decorated, IdSequence, Relation};
pub use store::Graph;
pub use traversal::{dfs_forest, dfs_traverse};
pub use tree::{Groups, TraversalTree, TreeEntry};
