use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;

use log::debug;

use crate::algorithm::{PathFinder, ShortestPath};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Exhaustive search over every simple path from the start node.
///
/// Runs in exponential time. Only meant as a reference answer on small graphs.
#[derive(Debug, Default, Clone)]
pub struct BruteForce;

impl BruteForce {
    /// Creates a new brute force search instance
    pub fn new() -> Self {
        BruteForce
    }
}

/// Mutable state of one enumeration
struct Search<'g, N, W, G> {
    graph: &'g G,
    end: &'g N,
    path: Vec<N>,
    on_path: HashSet<N>,
    best: Option<ShortestPath<N, W>>,
}

impl<'g, N, W, G> Search<'g, N, W, G>
where
    N: Clone + Eq + Ord + Hash + Debug,
    W: Weight,
    G: Graph<N, W>,
{
    fn explore(&mut self, node: &N, cost: W) -> Result<()> {
        if node == self.end {
            let better = match &self.best {
                None => true,
                Some(best) => cost < best.cost,
            };
            if better {
                self.best = Some(ShortestPath {
                    path: self.path.clone(),
                    cost,
                });
            }
            return Ok(());
        }

        let graph = self.graph;
        for (neighbor, weight) in graph.neighbors(node) {
            if weight.is_negative() {
                return Err(Error::NegativeWeight(format!(
                    "{:?} -> {:?} ({:?})",
                    node, neighbor, weight
                )));
            }
            if self.on_path.contains(neighbor) {
                continue;
            }
            let next = cost.checked_sum(weight).ok_or_else(|| {
                Error::Overflow(format!("{:?} -> {:?}", node, neighbor))
            })?;

            self.path.push(neighbor.clone());
            self.on_path.insert(neighbor.clone());
            self.explore(neighbor, next)?;
            self.on_path.remove(neighbor);
            self.path.pop();
        }

        Ok(())
    }
}

impl<N, W, G> PathFinder<N, W, G> for BruteForce
where
    N: Clone + Eq + Ord + Hash + Debug,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "BruteForce"
    }

    fn find(&self, graph: &G, start: &N, end: &N) -> Result<Option<ShortestPath<N, W>>> {
        if start != end && !graph.contains_node(start) {
            return Err(Error::StartNotFound);
        }

        let mut search = Search {
            graph,
            end,
            path: vec![start.clone()],
            on_path: HashSet::from([start.clone()]),
            best: None,
        };
        search.explore(start, W::zero())?;

        debug!(
            "Brute force {:?} -> {:?}: {:?}",
            start,
            end,
            search.best.as_ref().map(|best| best.cost)
        );
        Ok(search.best)
    }
}
