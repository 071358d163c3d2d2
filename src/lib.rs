//! Village Paths - shortest-path routing over named village road networks
//!
//! This library models a small road network of named villages as a weighted
//! undirected graph and answers single-source-to-single-target shortest path
//! queries with Dijkstra's algorithm, scheduled by a hand-built binary
//! min-heap with lazy deletion of stale entries.
//!
//! The optional web layer serves the network and computed routes as JSON for
//! visualization frontends.

pub mod algorithm;
pub mod data_structures;
pub mod graph;
pub mod web;

pub use algorithm::{dijkstra::Dijkstra, PathResult, ShortestPathAlgorithm};
pub use data_structures::MinHeap;
/// Re-export main types for convenient use
pub use graph::sample::sample_village_network;
pub use graph::village::VillageGraph;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("pop from an empty priority queue")]
    EmptyQueue,
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
