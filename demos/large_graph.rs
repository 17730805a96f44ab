//! 100K vertex performance demo.
//!
//! Uses `Graph::from_parts` for bulk construction.

use std::time::Instant;

use depthwalk::*;

fn main() -> WalkResult<()> {
    let vertex_count: usize = 100_000;
    let edges_per_vertex: usize = 3;

    println!("Creating graph with {} vertices...", vertex_count);
    let start = Instant::now();

    let vertices: Vec<Label> = (0..vertex_count)
        .map(|i| Label::new(format!("v{:06}", i)))
        .collect();

    // Deterministic pseudo-random fan-out
    let mut edges = Vec::with_capacity(vertex_count * edges_per_vertex);
    for i in 0..vertex_count {
        for k in 1..=edges_per_vertex {
            let target = (i * 7919 + k * 104_729) % vertex_count;
            if target != i {
                edges.push(Edge::new(
                    vertices[i].clone(),
                    vertices[target].clone(),
                    None,
                ));
            }
        }
    }

    let graph = Graph::from_parts(GraphKind::Directed, vertices, edges)?;
    println!(
        "  {} vertices, {} edges in {:?}",
        graph.vertex_count(),
        graph.edge_count(),
        start.elapsed()
    );

    let start = Instant::now();
    let mut dfs = DepthFirst::new(&graph);
    let visited = dfs.traverse("v000000")?.len();
    println!("  DFS visited {} vertices in {:?}", visited, start.elapsed());

    if let Some(deepest) = dfs
        .tree()
        .iter()
        .max_by_key(|(_, entry)| entry.cost)
        .map(|(vertex, _)| vertex.clone())
    {
        let start = Instant::now();
        let path = dfs.path_to_origin(deepest.as_str())?;
        println!(
            "  Deepest vertex {} at {} hops, path rebuilt in {:?}",
            deepest,
            path.len() - 1,
            start.elapsed()
        );
    }

    let start = Instant::now();
    let forest = dfs.traverse_all();
    println!("  {} trees cover the graph ({:?})", forest.len(), start.elapsed());

    let start = Instant::now();
    let inverse = graph.inverse();
    let mut back = DepthFirst::new(&inverse);
    let reached = back.traverse("v000000")?.len();
    println!(
        "  Inverse graph: {} vertices reach v000000 ({:?})",
        reached,
        start.elapsed()
    );

    Ok(())
}
