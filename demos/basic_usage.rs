//! Basic build -> traverse -> query flow.

use depthwalk::*;

fn main() -> WalkResult<()> {
    // Build an undirected graph from edge tuples
    let mut builder = GraphBuilder::undirected();
    builder
        .weighted_edge("A", "B", 3.0)
        .edge("A", "C")
        .edge("C", "D")
        .vertex("E");
    let graph = builder.build()?;

    println!(
        "Graph created with {} vertices and {} edges",
        graph.vertex_count(),
        graph.edge_count()
    );

    // Depth-first traversal from A
    let mut dfs = DepthFirst::new(&graph);
    let tree = dfs.traverse("A")?;

    println!("Traversal from A:");
    for (vertex, entry) in tree.iter() {
        match &entry.predecessor {
            Some(pred) => println!("  [cost {}] {} (from {})", entry.cost, vertex, pred),
            None => println!("  [cost {}] {} (root)", entry.cost, vertex),
        }
    }

    let path: Vec<String> = dfs
        .path_to_origin("D")?
        .iter()
        .map(Label::to_string)
        .collect();
    println!("\nPath to D: {}", path.join(" -> "));
    println!("Origin of D: {}", dfs.origin("D")?);

    println!("\nGroups:");
    for (predecessor, children) in dfs.groups() {
        let children: Vec<&str> = children.iter().map(Label::as_str).collect();
        match predecessor {
            Some(parent) => println!("  {} -> {:?}", parent, children),
            None => println!("  (root) -> {:?}", children),
        }
    }

    // E is unreachable from A
    if let Err(e) = dfs.origin("E") {
        println!("\n{}", e);
    }

    Ok(())
}
