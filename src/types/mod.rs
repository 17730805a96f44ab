//! All data types for the depthwalk library.

pub mod edge;
pub mod error;
pub mod label;

pub use edge::{Direction, Edge, GraphKind};
pub use error::{WalkError, WalkResult};
pub use label::Label;
