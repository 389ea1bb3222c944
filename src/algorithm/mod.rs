pub mod traits;
pub mod dijkstra;
pub mod brute_force;

pub use traits::{PathFinder, ShortestPath};
