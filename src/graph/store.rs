//! Core graph structure: vertices + edges with adjacency indexes.

use std::collections::{BTreeSet, HashMap};

use log::trace;

use crate::types::{Direction, Edge, GraphKind, Label, WalkError, WalkResult};

/// Shared answer for vertices that have no adjacency entry.
static NO_NEIGHBORS: BTreeSet<Label> = BTreeSet::new();

/// A labeled graph, directed or undirected, holding vertices and weighted edges.
///
/// Vertices and edges are only ever added. Neighbor sets are kept ordered so
/// that anything iterating them (the depth-first engine in particular) sees a
/// deterministic order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Directed or undirected.
    kind: GraphKind,
    /// All vertices.
    vertices: BTreeSet<Label>,
    /// All edges, in insertion order.
    edges: Vec<Edge>,
    /// Edge lookup: source -> target -> position in `edges`.
    /// Undirected edges are indexed under both orientations.
    edge_index: HashMap<Label, HashMap<Label, usize>>,
    /// Forward adjacency (the only adjacency for undirected graphs).
    successors: HashMap<Label, BTreeSet<Label>>,
    /// Backward adjacency, directed graphs only.
    predecessors: HashMap<Label, BTreeSet<Label>>,
}

impl Graph {
    /// Create a new empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            vertices: BTreeSet::new(),
            edges: Vec::new(),
            edge_index: HashMap::new(),
            successors: HashMap::new(),
            predecessors: HashMap::new(),
        }
    }

    /// Create a new empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Create a new empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Create from pre-existing vertices and edges (used by the builder).
    ///
    /// Duplicate vertices and edges are absorbed the same way the incremental
    /// operations absorb them. Fails on the first self-loop.
    pub fn from_parts(
        kind: GraphKind,
        vertices: impl IntoIterator<Item = Label>,
        edges: impl IntoIterator<Item = Edge>,
    ) -> WalkResult<Self> {
        let mut graph = Self::new(kind);
        for vertex in vertices {
            graph.add_vertex(vertex);
        }
        for edge in edges {
            graph.add_edge(edge.source, edge.target, edge.weight)?;
        }
        Ok(graph)
    }

    /// Directed or undirected.
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Whether edges are ordered pairs.
    pub fn is_directed(&self) -> bool {
        self.kind == GraphKind::Directed
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// All vertices, in label order.
    pub fn vertices(&self) -> impl Iterator<Item = &Label> + '_ {
        self.vertices.iter()
    }

    /// All edges, in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Look up the stored label for a vertex.
    pub fn vertex(&self, vertex: &str) -> Option<&Label> {
        self.vertices.get(vertex)
    }

    /// Whether the vertex is present.
    pub fn contains_vertex(&self, vertex: &str) -> bool {
        self.vertices.contains(vertex)
    }

    /// Add a vertex. Returns `false` if it was already present.
    pub fn add_vertex(&mut self, vertex: impl Into<Label>) -> bool {
        self.vertices.insert(vertex.into())
    }

    /// Add an edge, inserting missing endpoints.
    ///
    /// Returns `Ok(false)` without touching the stored weight if the edge
    /// already exists (in either orientation for undirected graphs).
    pub fn add_edge(
        &mut self,
        source: impl Into<Label>,
        target: impl Into<Label>,
        weight: Option<f64>,
    ) -> WalkResult<bool> {
        let edge = Edge::new(source, target, weight);
        if edge.is_self_loop() {
            return Err(WalkError::InvalidEdge(edge.source));
        }
        Ok(self.link(edge))
    }

    /// Insert a validated (non self-loop) edge.
    fn link(&mut self, edge: Edge) -> bool {
        self.vertices.insert(edge.source.clone());
        self.vertices.insert(edge.target.clone());

        if self.contains_edge(edge.source.as_str(), edge.target.as_str()) {
            trace!("duplicate edge {} -> {} ignored", edge.source, edge.target);
            return false;
        }

        let position = self.edges.len();
        let (source, target) = (edge.source.clone(), edge.target.clone());
        self.edges.push(edge);

        self.edge_index
            .entry(source.clone())
            .or_default()
            .insert(target.clone(), position);
        self.successors
            .entry(source.clone())
            .or_default()
            .insert(target.clone());

        match self.kind {
            GraphKind::Directed => {
                self.predecessors.entry(target).or_default().insert(source);
            }
            GraphKind::Undirected => {
                self.edge_index
                    .entry(target.clone())
                    .or_default()
                    .insert(source.clone(), position);
                self.successors.entry(target).or_default().insert(source);
            }
        }
        true
    }

    /// Neighbors of a vertex in the given direction.
    ///
    /// Undirected graphs return the same set for both directions. Unknown
    /// vertices have no neighbors.
    pub fn neighbors(&self, vertex: &str, direction: Direction) -> &BTreeSet<Label> {
        let adjacency = match (self.kind, direction) {
            (GraphKind::Directed, Direction::Backward) => &self.predecessors,
            _ => &self.successors,
        };
        adjacency.get(vertex).unwrap_or(&NO_NEIGHBORS)
    }

    /// Vertices reachable from this one over a single edge.
    pub fn successors(&self, vertex: &str) -> &BTreeSet<Label> {
        self.neighbors(vertex, Direction::Forward)
    }

    /// Vertices with an edge into this one (all neighbors if undirected).
    pub fn predecessors(&self, vertex: &str) -> &BTreeSet<Label> {
        self.neighbors(vertex, Direction::Backward)
    }

    /// Whether an edge source -> target exists (either way if undirected).
    pub fn contains_edge(&self, source: &str, target: &str) -> bool {
        self.edge_position(source, target).is_some()
    }

    /// The stored edge between two vertices.
    pub fn edge(&self, source: &str, target: &str) -> Option<&Edge> {
        self.edge_position(source, target).map(|idx| &self.edges[idx])
    }

    /// Weight of the edge source -> target.
    ///
    /// `None` both for a missing edge and for an edge inserted without weight.
    pub fn edge_weight(&self, source: &str, target: &str) -> Option<f64> {
        self.edge(source, target).and_then(|edge| edge.weight)
    }

    /// Position of an edge in [`Graph::edges`].
    pub(crate) fn edge_position(&self, source: &str, target: &str) -> Option<usize> {
        self.edge_index
            .get(source)
            .and_then(|targets| targets.get(target))
            .copied()
    }

    /// The graph with every edge reversed.
    ///
    /// Directed graphs yield a new graph with reversed edges and the same
    /// weights; isolated vertices are kept. Undirected graphs yield a copy.
    pub fn inverse(&self) -> Graph {
        if !self.is_directed() {
            return self.clone();
        }

        let mut inverted = Graph::directed();
        for vertex in &self.vertices {
            inverted.add_vertex(vertex);
        }
        for edge in &self.edges {
            inverted.link(edge.reversed());
        }
        inverted
    }
}
