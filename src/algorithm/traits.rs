use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Minimum-cost path between two nodes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPath<N, W> {
    /// Nodes from start to end, both inclusive
    pub path: Vec<N>,

    /// Sum of the edge weights along `path`
    pub cost: W,
}

/// Trait for single-source, single-target shortest path algorithms
pub trait PathFinder<N, W, G>
where
    N: Clone + Eq + Ord + Hash + Debug,
    W: Weight,
    G: Graph<N, W>,
{
    /// Find the minimum-cost path from `start` to `end`.
    ///
    /// Returns `Ok(None)` when `end` is unreachable. Returns an error when
    /// `start` is missing from the graph (and differs from `end`), when a
    /// negative edge weight is encountered, or when a path cost overflows
    /// the weight type. Equal-cost ties resolve toward smaller node labels.
    fn find(&self, graph: &G, start: &N, end: &N) -> Result<Option<ShortestPath<N, W>>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;
}

/// Rebuilds the path ending at `end` by following predecessor links back to
/// the node with no predecessor, then reversing.
pub(crate) fn reconstruct_path<N>(predecessors: &HashMap<N, Option<N>>, end: &N) -> Result<Vec<N>>
where
    N: Clone + Eq + Hash + Debug,
{
    let mut path = vec![end.clone()];
    let mut current = end;

    while let Some(step) = predecessors.get(current) {
        match step {
            Some(previous) => {
                path.push(previous.clone());
                current = previous;
            }
            None => {
                path.reverse();
                return Ok(path);
            }
        }

        if path.len() > predecessors.len() {
            return Err(Error::Algorithm(format!(
                "predecessor cycle while rebuilding path to {:?}",
                end
            )));
        }
    }

    Err(Error::Algorithm(format!(
        "no predecessor recorded for {:?}",
        current
    )))
}
