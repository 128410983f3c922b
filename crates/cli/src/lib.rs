mod distance;
mod paths;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "taxoscope",
    version,
    about = "Semantic distance queries over a taxonomy graph",
    long_about = "Taxoscope answers shortest-ancestral-path queries over a taxonomy: \
                  a directed graph of concept nodes connected by is-a (hypernym) edges. \
                  It reports the distance between two concepts and the common ancestor \
                  that realizes it, at the node level or the vocabulary-term level."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Query shortest ancestral paths between node-id pairs read from stdin
    #[command(
        long_about = "Loads a digraph file (node count, edge count, then one `v w` pair per \
                      edge) and reads whitespace-separated node-id pairs from stdin until EOF, \
                      printing the path length and ancestor for each pair."
    )]
    Paths {
        /// Path to the digraph file
        #[arg(value_name = "GRAPH_FILE")]
        graph: PathBuf,
        /// Emit one JSON object per pair instead of plain text
        #[arg(long)]
        json: bool,
    },
    /// Compute the semantic distance between two vocabulary terms
    #[command(
        long_about = "Loads a taxonomy from a synsets file and a hypernyms file, then prints \
                      the semantic distance between the two terms and the common ancestor \
                      participating in the shortest ancestral path."
    )]
    Distance {
        /// Path to the synsets file (id,terms,gloss per line)
        #[arg(long, value_name = "FILE")]
        synsets: PathBuf,
        /// Path to the hypernyms file (id,hypernym,... per line)
        #[arg(long, value_name = "FILE")]
        hypernyms: PathBuf,
        /// First term
        #[arg(value_name = "TERM_A")]
        term_a: String,
        /// Second term
        #[arg(value_name = "TERM_B")]
        term_b: String,
        /// Emit the result as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let _guard = taxoscope_core::logging::init_logging("cli", false);

    match cli.command {
        Commands::Paths { graph, json } => paths::run(graph, json),
        Commands::Distance {
            synsets,
            hypernyms,
            term_a,
            term_b,
            json,
        } => distance::run(synsets, hypernyms, &term_a, &term_b, json),
    }
}
