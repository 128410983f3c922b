use taxoscope_core::{
    NodeId, SapEngine, TaxonomyGraphBuilder, TaxoscopeError, ingest, vocab::Taxonomy,
};

fn build_graph(n: usize, edges: &[(NodeId, NodeId)]) -> taxoscope_core::TaxonomyGraph {
    let mut builder = TaxonomyGraphBuilder::with_nodes(n);
    for &(from, to) in edges {
        builder.add_edge(from, to).unwrap();
    }
    builder.build()
}

#[test]
fn test_public_api_single_queries() {
    // A small rooted DAG:
    //   7 8 -> 3, 3 -> 1, 4 5 -> 1, 1 2 -> 0
    let graph = build_graph(
        9,
        &[
            (7, 3),
            (8, 3),
            (3, 1),
            (4, 1),
            (5, 1),
            (1, 0),
            (2, 0),
            (6, 2),
        ],
    );
    let engine = SapEngine::new(graph);

    assert_eq!(engine.length(7, 8).unwrap(), 2);
    assert_eq!(engine.ancestor(7, 8).unwrap(), 3);
    assert_eq!(engine.length(7, 6).unwrap(), 5);
    assert_eq!(engine.ancestor(7, 6).unwrap(), 0);
    assert_eq!(engine.length(4, 4).unwrap(), 0);
}

#[test]
fn test_public_api_set_queries() {
    let graph = build_graph(5, &[(0, 1), (1, 2), (3, 1), (4, 2)]);
    let engine = SapEngine::new(graph);

    let outcome = engine.query_sets(&[0, 3], &[4]).unwrap().unwrap();
    assert_eq!(outcome.length, 3);
    assert_eq!(outcome.ancestor, 2);

    // Same engine answers node-level and set-level forms consistently
    assert_eq!(
        engine.length_sets(&[0], &[4]).unwrap(),
        engine.length(0, 4).unwrap()
    );
}

#[test]
fn test_invalid_ids_fail_cleanly() {
    let graph = build_graph(2, &[(0, 1)]);
    let engine = SapEngine::new(graph);
    assert!(matches!(
        engine.length(0, 9),
        Err(TaxoscopeError::InvalidNode { id: 9, bound: 2 })
    ));
    // The failed call left nothing behind; the engine still answers
    assert_eq!(engine.length(0, 1).unwrap(), 1);
}

#[test]
fn test_taxonomy_from_files() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let synsets_path = dir.path().join("synsets.csv");
    let hypernyms_path = dir.path().join("hypernyms.csv");

    let mut synsets = std::fs::File::create(&synsets_path).unwrap();
    writeln!(synsets, "0,entity,that which exists").unwrap();
    writeln!(synsets, "1,animal,a living organism").unwrap();
    writeln!(synsets, "2,plant,a living organism lacking locomotion").unwrap();
    writeln!(synsets, "3,worm,a small limbless animal").unwrap();
    writeln!(synsets, "4,tree,a tall perennial plant").unwrap();
    drop(synsets);

    let mut hypernyms = std::fs::File::create(&hypernyms_path).unwrap();
    writeln!(hypernyms, "1,0").unwrap();
    writeln!(hypernyms, "2,0").unwrap();
    writeln!(hypernyms, "3,1").unwrap();
    writeln!(hypernyms, "4,2").unwrap();
    drop(hypernyms);

    let taxonomy: Taxonomy = ingest::load_taxonomy(&synsets_path, &hypernyms_path).unwrap();

    assert!(taxonomy.contains_term("worm"));
    assert!(!taxonomy.contains_term("fungus"));
    assert_eq!(taxonomy.distance("worm", "tree").unwrap(), 4);

    let ancestor = taxonomy.common_ancestor("worm", "tree").unwrap().unwrap();
    assert_eq!(ancestor.label, "entity");
    assert_eq!(ancestor.length, 4);
}

#[test]
fn test_digraph_harness_format() {
    use std::io::Write;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("digraph.txt");
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "6").unwrap();
    writeln!(file, "5").unwrap();
    writeln!(file, "1 0").unwrap();
    writeln!(file, "2 0").unwrap();
    writeln!(file, "3 1").unwrap();
    writeln!(file, "4 1").unwrap();
    writeln!(file, "5 2").unwrap();
    drop(file);

    let graph = ingest::read_digraph(&path).unwrap();
    let engine = SapEngine::new(graph);
    assert_eq!(engine.length(3, 4).unwrap(), 2);
    assert_eq!(engine.ancestor(3, 4).unwrap(), 1);
    assert_eq!(engine.length(3, 5).unwrap(), 4);
    assert_eq!(engine.ancestor(3, 5).unwrap(), 0);
}
