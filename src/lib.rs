//! Single-source shortest paths on weighted undirected graphs.
//!
//! The crate is built around two pieces: [`Graph`], an adjacency-list
//! representation assembled from a raw edge list, and [`ScanSolver`], an
//! array-scan Dijkstra that settles one vertex per pass in O(V²) time.
//! All edge weights must be non-negative.

pub mod graph;
pub mod scan;

pub use graph::{Edge, Graph};
pub use scan::{shortest_paths, DistanceTable, ScanSolver, INFINITY};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("vertex {vertex} out of range for graph with {vertices} vertices")]
    VertexOutOfRange { vertex: usize, vertices: usize },

    #[error("edge weight {0} is negative or not finite")]
    NegativeWeight(f64),

    #[error("source vertex {src} out of range for graph with {vertices} vertices")]
    SourceOutOfRange { src: usize, vertices: usize },
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
