//! Label Path - single-source, single-target shortest paths
//!
//! This library finds the minimum-cost path between two labeled nodes of a
//! weighted directed graph using Dijkstra's algorithm with a lazily pruned
//! binary-heap frontier.
//!
//! Node identifiers may be any hashable label (strings, integers, ...), and
//! edge weights any non-negative totally ordered number (integers or
//! `OrderedFloat`).

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    brute_force::BruteForce, dijkstra::Dijkstra, PathFinder, ShortestPath,
};
/// Re-export main types for convenient use
pub use graph::{DirectedGraph, Graph, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Start node not found in graph")]
    StartNotFound,

    #[error("Negative edge weight on edge {0}")]
    NegativeWeight(String),

    #[error("Path cost overflows the weight type at {0}")]
    Overflow(String),

    #[error("Algorithm execution error: {0}")]
    Algorithm(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
