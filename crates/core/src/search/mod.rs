pub mod bfs;

pub use bfs::{DistanceTable, multi_source_distances};
