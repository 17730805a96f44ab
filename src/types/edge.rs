//! Edges, graph kinds and adjacency directions.

use std::str::FromStr;

use serde::Serialize;

use super::{Label, WalkError};

/// Whether edges are ordered pairs or unordered pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum GraphKind {
    /// Edges are ordered pairs; forward and backward adjacency differ.
    Directed,
    /// Edges are unordered pairs; adjacency is symmetric.
    #[default]
    Undirected,
}

impl GraphKind {
    /// Return a human-readable name for this graph kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Directed => "directed",
            Self::Undirected => "undirected",
        }
    }
}

impl std::fmt::Display for GraphKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Which adjacency to follow from a vertex.
///
/// Only meaningful for directed graphs; undirected graphs answer both
/// directions with the same neighbor set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Direction {
    /// Follow outgoing edges (source -> target).
    #[default]
    Forward,
    /// Follow incoming edges (target <- source).
    Backward,
}

impl Direction {
    /// Return a human-readable name for this direction.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Forward => "forward",
            Self::Backward => "backward",
        }
    }

    /// Parse a direction from a string name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "forward" | "fwd" => Some(Self::Forward),
            "back" | "backward" | "bwd" => Some(Self::Backward),
            _ => None,
        }
    }
}

impl FromStr for Direction {
    type Err = WalkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| {
            WalkError::InvalidArgument(format!(
                "unknown traversal direction '{}', expected FORWARD or BACK",
                s
            ))
        })
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A connection between two vertices, with an optional weight.
///
/// For undirected graphs the pair is stored in the orientation it was first
/// inserted with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    /// Source vertex.
    pub source: Label,
    /// Target vertex.
    pub target: Label,
    /// Weight, if one was given at insertion.
    pub weight: Option<f64>,
}

impl Edge {
    /// Create a new edge.
    pub fn new(source: impl Into<Label>, target: impl Into<Label>, weight: Option<f64>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// The same edge with its endpoints swapped.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            weight: self.weight,
        }
    }

    /// Whether both endpoints are the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}
