//! Fluent API for building Graph instances.

use crate::types::{Edge, GraphKind, Label, WalkResult};

use super::Graph;

/// Fluent builder for constructing a Graph from vertex and edge tuples.
pub struct GraphBuilder {
    kind: GraphKind,
    vertices: Vec<Label>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Create a new builder for the given kind of graph.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Create a new builder for a directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Create a new builder for an undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Add a vertex.
    pub fn vertex(&mut self, label: impl Into<Label>) -> &mut Self {
        self.vertices.push(label.into());
        self
    }

    /// Add several vertices.
    pub fn vertices<I, L>(&mut self, labels: I) -> &mut Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        self.vertices.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Add an unweighted edge.
    pub fn edge(&mut self, source: impl Into<Label>, target: impl Into<Label>) -> &mut Self {
        self.edges.push(Edge::new(source, target, None));
        self
    }

    /// Add a weighted edge.
    pub fn weighted_edge(
        &mut self,
        source: impl Into<Label>,
        target: impl Into<Label>,
        weight: f64,
    ) -> &mut Self {
        self.edges.push(Edge::new(source, target, Some(weight)));
        self
    }

    /// Build the final Graph. Fails if any edge is a self-loop.
    pub fn build(self) -> WalkResult<Graph> {
        Graph::from_parts(self.kind, self.vertices, self.edges)
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(GraphKind::default())
    }
}
