//! Payloads attached to the vertices and edges of a Graph.
//!
//! Identity stays with [`Label`]; payloads live in side tables so that two
//! vertices compare equal exactly when their labels do, whatever they carry.

use std::collections::HashMap;

use serde::Serialize;

use crate::types::{GraphKind, Label, WalkError, WalkResult};

use super::Graph;

/// Monotonically increasing identifier generator, owned by whoever builds
/// the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// A sequence whose first identifier is `first`.
    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// Take the next identifier.
    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// The identifier the next call to [`IdSequence::next_id`] returns.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::starting_at(1)
    }
}

/// An edge payload together with the identifier assigned to its edge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Relation<EP> {
    /// Identifier taken from the owning [`IdSequence`].
    pub id: u64,
    /// Caller data.
    pub payload: EP,
}

/// A Graph whose vertices and edges carry caller payloads.
pub struct Decorated<VP, EP> {
    graph: Graph,
    vertex_payloads: HashMap<Label, VP>,
    /// Keyed by position in [`Graph::edges`].
    relations: HashMap<usize, Relation<EP>>,
    ids: IdSequence,
}

impl<VP, EP> Decorated<VP, EP> {
    /// Create an empty decorated graph with relation ids starting at 1.
    pub fn new(kind: GraphKind) -> Self {
        Self::with_ids(kind, IdSequence::default())
    }

    /// Create an empty decorated graph drawing relation ids from `ids`.
    pub fn with_ids(kind: GraphKind, ids: IdSequence) -> Self {
        Self {
            graph: Graph::new(kind),
            vertex_payloads: HashMap::new(),
            relations: HashMap::new(),
            ids,
        }
    }

    /// The underlying graph, e.g. to hand to the traversal engine.
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Add a vertex with its payload. Returns `false` and drops the payload
    /// if the vertex was already present.
    pub fn add_vertex_with(&mut self, vertex: impl Into<Label>, payload: VP) -> bool {
        let vertex = vertex.into();
        if !self.graph.add_vertex(vertex.clone()) {
            return false;
        }
        self.vertex_payloads.insert(vertex, payload);
        true
    }

    /// Add an edge between two existing vertices with its payload.
    ///
    /// Returns the identifier assigned to the new relation, or `None` if the
    /// edge already existed (the payload is dropped).
    pub fn add_edge_with(
        &mut self,
        source: &str,
        target: &str,
        weight: Option<f64>,
        payload: EP,
    ) -> WalkResult<Option<u64>> {
        if source == target {
            return Err(WalkError::InvalidEdge(Label::from(source)));
        }
        for endpoint in [source, target] {
            if !self.graph.contains_vertex(endpoint) {
                return Err(WalkError::VertexNotFound(Label::from(endpoint)));
            }
        }

        if !self.graph.add_edge(source, target, weight)? {
            return Ok(None);
        }

        let id = self.ids.next_id();
        let position = self.graph.edge_count() - 1;
        self.relations.insert(position, Relation { id, payload });
        Ok(Some(id))
    }

    /// Payload of a vertex.
    pub fn vertex_payload(&self, vertex: &str) -> Option<&VP> {
        self.vertex_payloads.get(vertex)
    }

    /// Relation stored on the edge source -> target (either way if undirected).
    pub fn edge_payload(&self, source: &str, target: &str) -> Option<&Relation<EP>> {
        self.graph
            .edge_position(source, target)
            .and_then(|position| self.relations.get(&position))
    }

    /// Vertices that carry a payload, in label order.
    pub fn decorated_vertices(&self) -> impl Iterator<Item = (&Label, &VP)> + '_ {
        self.graph
            .vertices()
            .filter_map(|vertex| self.vertex_payloads.get_key_value(vertex.as_str()))
    }

    /// Number of relations created so far.
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }
}
