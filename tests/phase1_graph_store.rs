//! Phase 1 tests: Graph store, builder, directions.

use std::collections::BTreeSet;

use depthwalk::graph::{Graph, GraphBuilder};
use depthwalk::types::{Direction, Edge, GraphKind, Label, WalkError};

use rand::Rng;

fn labels(names: &[&str]) -> BTreeSet<Label> {
    names.iter().map(|&n| Label::from(n)).collect()
}

// ==================== Vertex Tests ====================

#[test]
fn test_add_vertex() {
    let mut graph = Graph::undirected();
    assert!(graph.add_vertex("A"));
    assert!(!graph.add_vertex("A"));
    assert!(graph.contains_vertex("A"));
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_vertices_sorted() {
    let mut graph = Graph::directed();
    for name in ["C", "A", "B"] {
        graph.add_vertex(name);
    }
    let names: Vec<&str> = graph.vertices().map(|v| v.as_str()).collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn test_default_graph_is_undirected() {
    let graph = Graph::default();
    assert_eq!(graph.kind(), GraphKind::Undirected);
    assert!(!graph.is_directed());
}

// ==================== Edge Tests ====================

#[test]
fn test_add_edge() {
    let mut graph = Graph::directed();
    graph.add_vertex("A");
    graph.add_vertex("B");

    assert!(graph.add_edge("A", "B", Some(5.0)).unwrap());
    assert!(graph.contains_edge("A", "B"));
    assert_eq!(graph.edge_weight("A", "B"), Some(5.0));

    // Duplicate is a no-op
    assert!(!graph.add_edge("A", "B", Some(5.0)).unwrap());
    assert_eq!(graph.successors("A").len(), 1);
    assert_eq!(graph.edge_count(), 1);
}

#[test]
fn test_duplicate_edge_keeps_first_weight() {
    let mut graph = Graph::directed();
    graph.add_edge("A", "B", Some(1.5)).unwrap();
    graph.add_edge("A", "B", Some(9.0)).unwrap();
    graph.add_edge("A", "B", None).unwrap();
    assert_eq!(graph.edge_weight("A", "B"), Some(1.5));
}

#[test]
fn test_add_edge_inserts_endpoints() {
    let mut graph = Graph::undirected();
    graph.add_edge("X", "Y", None).unwrap();
    assert!(graph.contains_vertex("X"));
    assert!(graph.contains_vertex("Y"));
    assert!(!graph.add_vertex("X"));
}

#[test]
fn test_unweighted_and_missing_edges_have_no_weight() {
    let mut graph = Graph::undirected();
    graph.add_edge("A", "B", None).unwrap();
    assert_eq!(graph.edge_weight("A", "B"), None);
    assert_eq!(graph.edge_weight("A", "Z"), None);
    assert!(graph.edge("A", "B").is_some());
    assert!(graph.edge("A", "Z").is_none());
}

#[test]
fn test_undirected_edge_is_symmetric() {
    let mut graph = Graph::undirected();
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_edge("A", "B", Some(5.0)).unwrap();

    assert!(graph.contains_edge("B", "A"));
    assert_eq!(graph.edge_weight("B", "A"), Some(5.0));

    // The reverse orientation is the same edge
    assert!(!graph.add_edge("B", "A", Some(7.0)).unwrap());
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight("A", "B"), Some(5.0));
}

#[test]
fn test_directed_edge_is_not_symmetric() {
    let mut graph = Graph::directed();
    graph.add_edge("A", "B", Some(3.0)).unwrap();
    assert!(graph.contains_edge("A", "B"));
    assert!(!graph.contains_edge("B", "A"));

    // The reverse is a distinct edge in a directed graph
    assert!(graph.add_edge("B", "A", Some(4.0)).unwrap());
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge_weight("B", "A"), Some(4.0));
}

#[test]
fn test_self_loop_rejected() {
    for kind in [GraphKind::Directed, GraphKind::Undirected] {
        let mut graph = Graph::new(kind);
        graph.add_vertex("A");

        let result = graph.add_edge("A", "A", Some(5.0));
        match result.unwrap_err() {
            WalkError::InvalidEdge(label) => assert_eq!(label, "A"),
            e => panic!("Expected InvalidEdge error, got {:?}", e),
        }
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.successors("A").is_empty());
    }
}

#[test]
fn test_edges_in_insertion_order() {
    let mut graph = Graph::directed();
    graph.add_edge("C", "A", None).unwrap();
    graph.add_edge("A", "B", Some(2.0)).unwrap();
    assert_eq!(
        graph.edges(),
        &[Edge::new("C", "A", None), Edge::new("A", "B", Some(2.0))]
    );
}

// ==================== Adjacency Tests ====================

#[test]
fn test_predecessors_and_successors() {
    let mut graph = Graph::directed();
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_edge("A", "B", Some(3.0)).unwrap();

    assert_eq!(graph.successors("A"), &labels(&["B"]));
    assert_eq!(graph.predecessors("B"), &labels(&["A"]));
    assert!(graph.successors("B").is_empty());
    assert!(graph.predecessors("A").is_empty());
}

#[test]
fn test_neighbors_by_direction() {
    let mut graph = Graph::directed();
    graph.add_edge("A", "B", None).unwrap();
    graph.add_edge("C", "B", None).unwrap();
    graph.add_edge("B", "D", None).unwrap();

    assert_eq!(graph.neighbors("B", Direction::Forward), &labels(&["D"]));
    assert_eq!(graph.neighbors("B", Direction::Backward), &labels(&["A", "C"]));
}

#[test]
fn test_undirected_neighbors_ignore_direction() {
    let mut graph = Graph::undirected();
    graph.add_edge("A", "B", None).unwrap();
    graph.add_edge("C", "A", None).unwrap();

    let forward = graph.neighbors("A", Direction::Forward);
    let backward = graph.neighbors("A", Direction::Backward);
    assert_eq!(forward, &labels(&["B", "C"]));
    assert_eq!(forward, backward);
}

#[test]
fn test_unknown_vertex_has_no_neighbors() {
    let graph = Graph::directed();
    assert!(graph.neighbors("nobody", Direction::Forward).is_empty());
    assert!(graph.neighbors("nobody", Direction::Backward).is_empty());
}

#[test]
fn test_direction_parsing() {
    assert_eq!("FORWARD".parse::<Direction>().unwrap(), Direction::Forward);
    assert_eq!("BACK".parse::<Direction>().unwrap(), Direction::Backward);
    assert_eq!("backward".parse::<Direction>().unwrap(), Direction::Backward);

    match "SIDEWAYS".parse::<Direction>().unwrap_err() {
        WalkError::InvalidArgument(msg) => assert!(msg.contains("SIDEWAYS")),
        e => panic!("Expected InvalidArgument error, got {:?}", e),
    }
}

#[test]
fn test_undirected_adjacency_symmetric_random() {
    let mut rng = rand::thread_rng();
    let mut graph = Graph::undirected();
    for _ in 0..300 {
        let a = format!("v{}", rng.gen_range(0..40));
        let b = format!("v{}", rng.gen_range(0..40));
        if a == b {
            assert!(graph.add_edge(a.as_str(), b.as_str(), None).is_err());
            continue;
        }
        graph.add_edge(a.as_str(), b.as_str(), Some(rng.gen_range(0.0..1.0))).unwrap();
    }

    let vertices: Vec<Label> = graph.vertices().cloned().collect();
    for a in &vertices {
        for b in &vertices {
            assert_eq!(
                graph.contains_edge(a.as_str(), b.as_str()),
                graph.contains_edge(b.as_str(), a.as_str())
            );
            assert_eq!(
                graph.edge_weight(a.as_str(), b.as_str()),
                graph.edge_weight(b.as_str(), a.as_str())
            );
            assert_eq!(
                graph.successors(a.as_str()).contains(b.as_str()),
                graph.contains_edge(a.as_str(), b.as_str())
            );
        }
    }
}

// ==================== Inverse Tests ====================

#[test]
fn test_inverse_graph() {
    let mut graph = Graph::directed();
    graph.add_vertex("A");
    graph.add_vertex("B");
    graph.add_vertex("lonely");
    graph.add_edge("A", "B", Some(10.0)).unwrap();

    let inverted = graph.inverse();
    assert!(inverted.is_directed());
    assert!(inverted.contains_edge("B", "A"));
    assert!(!inverted.contains_edge("A", "B"));
    assert_eq!(inverted.edge_weight("B", "A"), Some(10.0));
    assert!(inverted.contains_vertex("lonely"));

    // The original is unchanged
    assert!(graph.contains_edge("A", "B"));
    assert!(!graph.contains_edge("B", "A"));
}

#[test]
fn test_inverse_swaps_adjacency() {
    let mut graph = Graph::directed();
    graph.add_edge("A", "B", None).unwrap();
    graph.add_edge("A", "C", None).unwrap();

    let inverted = graph.inverse();
    assert_eq!(inverted.predecessors("A"), graph.successors("A"));
    assert_eq!(inverted.successors("B"), &labels(&["A"]));
    assert_eq!(inverted.edge_count(), graph.edge_count());
}

#[test]
fn test_inverse_of_undirected_is_copy() {
    let mut graph = Graph::undirected();
    graph.add_edge("A", "B", Some(2.0)).unwrap();

    let copy = graph.inverse();
    assert!(!copy.is_directed());
    assert!(copy.contains_edge("A", "B"));
    assert!(copy.contains_edge("B", "A"));
    assert_eq!(copy.edges(), graph.edges());
}

// ==================== Builder Tests ====================

#[test]
fn test_builder_from_tuples() {
    let mut builder = GraphBuilder::directed();
    builder
        .vertices(["A", "B", "Z"])
        .edge("A", "B")
        .weighted_edge("B", "C", 0.5)
        .edge("A", "B");
    let graph = builder.build().unwrap();

    assert_eq!(graph.vertex_count(), 4);
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.edge_weight("B", "C"), Some(0.5));
    assert!(graph.contains_vertex("Z"));
}

#[test]
fn test_builder_rejects_self_loop() {
    let mut builder = GraphBuilder::undirected();
    builder.vertex("A").edge("A", "A");
    match builder.build() {
        Err(WalkError::InvalidEdge(label)) => assert_eq!(label, "A"),
        other => panic!("Expected InvalidEdge error, got {:?}", other.map(|g| g.edge_count())),
    }
}

#[test]
fn test_from_parts_absorbs_duplicates() {
    let graph = Graph::from_parts(
        GraphKind::Undirected,
        vec![Label::from("A"), Label::from("A")],
        vec![
            Edge::new("A", "B", Some(1.0)),
            Edge::new("B", "A", Some(2.0)),
        ],
    )
    .unwrap();
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.edge_weight("B", "A"), Some(1.0));
}
