use std::io::Read;
use std::path::PathBuf;
use taxoscope_core::{NodeId, SapEngine, ingest};
use tracing::info;

pub fn run(graph_path: PathBuf, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let graph = ingest::read_digraph(&graph_path)?;

    info!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "digraph loaded from {}",
        graph_path.display()
    );

    let engine = SapEngine::new(graph);

    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let mut tokens = input.split_whitespace();
    while let Some(first) = tokens.next() {
        let v: NodeId = first.parse()?;
        let w: NodeId = tokens
            .next()
            .ok_or_else(|| format!("missing partner for node {v}"))?
            .parse()?;

        // One query answers both; no separate length/ancestor searches
        let outcome = engine.query(v, w)?;
        let length = outcome.map_or(-1, |a| i64::from(a.length));
        let ancestor = outcome.map_or(-1, |a| a.ancestor as i64);

        if json {
            println!(
                "{}",
                serde_json::json!({
                    "v": v,
                    "w": w,
                    "length": length,
                    "ancestor": ancestor,
                })
            );
        } else {
            println!("length = {length}, ancestor = {ancestor}");
        }
    }

    Ok(())
}
