use std::path::PathBuf;
use taxoscope_core::ingest;
use tracing::info;

pub fn run(
    synsets: PathBuf,
    hypernyms: PathBuf,
    term_a: &str,
    term_b: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let taxonomy = ingest::load_taxonomy(&synsets, &hypernyms)?;

    info!(
        terms = taxonomy.vocabulary().term_count(),
        nodes = taxonomy.graph().node_count(),
        "taxonomy ready"
    );

    let ancestor = taxonomy.common_ancestor(term_a, term_b)?;

    if json {
        println!(
            "{}",
            serde_json::json!({
                "term_a": term_a,
                "term_b": term_b,
                "distance": ancestor.as_ref().map_or(-1, |a| i64::from(a.length)),
                "ancestor": ancestor.as_ref().map(|a| &a.label),
            })
        );
    } else {
        match ancestor {
            Some(a) => println!("distance = {}, ancestor = {}", a.length, a.label),
            None => println!("distance = -1, ancestor = (none)"),
        }
    }

    Ok(())
}
