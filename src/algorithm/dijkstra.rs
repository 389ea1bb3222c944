use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;

use log::{debug, trace, warn};
use rayon::prelude::*;

use crate::algorithm::traits::reconstruct_path;
use crate::algorithm::{PathFinder, ShortestPath};
use crate::data_structures::Frontier;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm with a lazily pruned frontier.
///
/// Instead of decrease-key, every improvement pushes a fresh frontier entry
/// and outdated entries are skipped when popped. All working state lives for
/// a single call, so one instance can serve concurrent queries.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Reject negative weights on relaxed edges
    check_weights: bool,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra { check_weights: true }
    }

    /// Enable or disable the negative weight check during relaxation.
    ///
    /// With the check disabled, results on graphs with negative weights are
    /// unspecified.
    pub fn with_weight_check(mut self, check_weights: bool) -> Self {
        self.check_weights = check_weights;
        self
    }

    /// Answers independent (start, end) queries in parallel, in query order
    pub fn find_batch<N, W, G>(&self, graph: &G, queries: &[(N, N)]) -> Vec<Result<Option<ShortestPath<N, W>>>>
    where
        N: Clone + Eq + Ord + Hash + Debug + Send + Sync,
        W: Weight + Send,
        G: Graph<N, W> + Sync,
    {
        debug!("Running {} shortest path queries in parallel", queries.len());
        queries
            .par_iter()
            .map(|(start, end)| <Self as PathFinder<N, W, G>>::find(self, graph, start, end))
            .collect()
    }
}

impl<N, W, G> PathFinder<N, W, G> for Dijkstra
where
    N: Clone + Eq + Ord + Hash + Debug,
    W: Weight,
    G: Graph<N, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find(&self, graph: &G, start: &N, end: &N) -> Result<Option<ShortestPath<N, W>>> {
        if start != end && !graph.contains_node(start) {
            warn!("Start node {:?} is not in the graph", start);
            return Err(Error::StartNotFound);
        }

        debug!("Searching shortest path {:?} -> {:?}", start, end);

        let mut frontier = Frontier::new();
        let mut visited: HashSet<N> = HashSet::new();
        let mut predecessors: HashMap<N, Option<N>> = HashMap::new();
        let mut costs: HashMap<N, W> = HashMap::new();

        frontier.push(start.clone(), W::zero());
        predecessors.insert(start.clone(), None);
        costs.insert(start.clone(), W::zero());

        while let Some((current, cost)) = frontier.pop() {
            if visited.contains(&current) {
                trace!("Skipping stale entry {:?} at {:?}", current, cost);
                continue;
            }

            visited.insert(current.clone());

            if current == *end {
                let path = reconstruct_path(&predecessors, &current)?;
                debug!(
                    "Found path of {} nodes with cost {:?} after settling {} nodes ({} entries left)",
                    path.len(),
                    cost,
                    visited.len(),
                    frontier.len()
                );
                return Ok(Some(ShortestPath { path, cost }));
            }

            let base = costs.get(&current).copied().unwrap_or(cost);

            for (neighbor, weight) in graph.neighbors(&current) {
                if self.check_weights && weight.is_negative() {
                    warn!("Negative weight {:?} on {:?} -> {:?}", weight, current, neighbor);
                    return Err(Error::NegativeWeight(format!(
                        "{:?} -> {:?} ({:?})",
                        current, neighbor, weight
                    )));
                }

                if visited.contains(neighbor) {
                    continue;
                }

                let candidate = match base.checked_sum(weight) {
                    Some(candidate) => candidate,
                    None => {
                        warn!("Cost overflow relaxing {:?} -> {:?}", current, neighbor);
                        return Err(Error::Overflow(format!("{:?} -> {:?}", current, neighbor)));
                    }
                };
                let improves = match costs.get(neighbor) {
                    None => true,
                    Some(&known) => candidate < known,
                };

                if improves {
                    trace!("Relaxing {:?} to {:?} via {:?}", neighbor, candidate, current);
                    costs.insert(neighbor.clone(), candidate);
                    predecessors.insert(neighbor.clone(), Some(current.clone()));
                    frontier.push(neighbor.clone(), candidate);
                }
            }
        }

        debug!(
            "No path {:?} -> {:?}; settled {} nodes",
            start,
            end,
            visited.len()
        );
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::DirectedGraph;
    use ordered_float::OrderedFloat;

    fn sample_graph() -> HashMap<&'static str, Vec<(&'static str, u32)>> {
        HashMap::from([
            ("A", vec![("B", 1), ("C", 4)]),
            ("B", vec![("C", 2), ("D", 5)]),
            ("C", vec![("D", 1)]),
            ("D", vec![]),
        ])
    }

    #[test]
    fn test_sample_graph_path() {
        let result = Dijkstra::new().find(&sample_graph(), &"A", &"D").unwrap();
        assert_eq!(
            result,
            Some(ShortestPath { path: vec!["A", "B", "C", "D"], cost: 4 })
        );
    }

    #[test]
    fn test_end_absent_from_graph() {
        let graph = HashMap::from([("A", vec![("B", 1u32)]), ("B", vec![])]);
        assert_eq!(Dijkstra::new().find(&graph, &"A", &"C").unwrap(), None);
    }

    #[test]
    fn test_start_equals_end() {
        let graph: HashMap<&str, Vec<(&str, u32)>> = HashMap::from([("A", vec![])]);
        let result = Dijkstra::new().find(&graph, &"A", &"A").unwrap();
        assert_eq!(result, Some(ShortestPath { path: vec!["A"], cost: 0 }));
    }

    #[test]
    fn test_start_equals_end_without_entry() {
        let graph: HashMap<&str, Vec<(&str, u32)>> = HashMap::new();
        let result = Dijkstra::new().find(&graph, &"X", &"X").unwrap();
        assert_eq!(result, Some(ShortestPath { path: vec!["X"], cost: 0 }));
    }

    #[test]
    fn test_missing_start_rejected() {
        let graph = sample_graph();
        assert_eq!(
            Dijkstra::new().find(&graph, &"Z", &"A"),
            Err(Error::StartNotFound)
        );
    }

    #[test]
    fn test_negative_weight_rejected() {
        let graph = HashMap::from([("A", vec![("B", -1i32)]), ("B", vec![])]);
        let result = Dijkstra::new().find(&graph, &"A", &"B");
        assert!(matches!(result, Err(Error::NegativeWeight(_))));
    }

    #[test]
    fn test_negative_weight_check_disabled() {
        let graph = HashMap::from([("A", vec![("B", -1i32)]), ("B", vec![])]);
        let result = Dijkstra::new()
            .with_weight_check(false)
            .find(&graph, &"A", &"B")
            .unwrap();
        assert_eq!(result.map(|p| p.path), Some(vec!["A", "B"]));
    }

    #[test]
    fn test_unvisited_negative_edge_is_not_inspected() {
        // The bad edge leaves D, which is the target and never expanded
        let graph = HashMap::from([("A", vec![("D", 2i64)]), ("D", vec![("A", -5)])]);
        let result = Dijkstra::new().find(&graph, &"A", &"D").unwrap();
        assert_eq!(result.map(|p| p.cost), Some(2));
    }

    #[test]
    fn test_stale_entries_are_skipped() {
        // B is first reached at cost 10, then improved to 2 through C.
        // The stale B entry pops before E and must not be expanded again.
        let graph = HashMap::from([
            ("A", vec![("B", 10u32), ("C", 1)]),
            ("C", vec![("B", 1)]),
            ("B", vec![("E", 9)]),
        ]);
        let result = Dijkstra::new().find(&graph, &"A", &"E").unwrap().unwrap();
        assert_eq!(result.path, vec!["A", "C", "B", "E"]);
        assert_eq!(result.cost, 11);
    }

    #[test]
    fn test_cycle_terminates() {
        let graph = HashMap::from([
            (1, vec![(2, 1u32)]),
            (2, vec![(3, 1)]),
            (3, vec![(1, 1)]),
        ]);
        assert_eq!(Dijkstra::new().find(&graph, &1, &4).unwrap(), None);
        let result = Dijkstra::new().find(&graph, &2, &1).unwrap().unwrap();
        assert_eq!(result.path, vec![2, 3, 1]);
    }

    #[test]
    fn test_zero_weight_edges() {
        let graph = DirectedGraph::from_edges(vec![("A", "B", 0u32), ("B", "C", 0), ("A", "C", 1)]);
        let result = Dijkstra::new().find(&graph, &"A", &"C").unwrap().unwrap();
        assert_eq!(result.cost, 0);
        assert_eq!(result.path, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_equal_cost_paths_are_deterministic() {
        // Two paths of cost 2; the smaller label wins regardless of edge order
        let graph = HashMap::from([
            ("S", vec![("R", 1u32), ("L", 1)]),
            ("L", vec![("T", 1)]),
            ("R", vec![("T", 1)]),
        ]);
        let first = Dijkstra::new().find(&graph, &"S", &"T").unwrap();
        for _ in 0..10 {
            assert_eq!(Dijkstra::new().find(&graph, &"S", &"T").unwrap(), first);
        }
        assert_eq!(first.unwrap().path, vec!["S", "L", "T"]);
    }

    #[test]
    fn test_float_weights() {
        let graph = DirectedGraph::from_edges(vec![
            ("a", "b", OrderedFloat(0.5)),
            ("b", "c", OrderedFloat(0.25)),
            ("a", "c", OrderedFloat(1.0)),
        ]);
        let result = Dijkstra::new().find(&graph, &"a", &"c").unwrap().unwrap();
        assert_eq!(result.cost, OrderedFloat(0.75));
    }

    #[test]
    fn test_find_batch_matches_sequential() {
        let graph = sample_graph();
        let queries = vec![("A", "D"), ("B", "D"), ("D", "A"), ("C", "C")];
        let dijkstra = Dijkstra::new();

        let batch = dijkstra.find_batch(&graph, &queries);
        assert_eq!(batch.len(), queries.len());
        for ((start, end), result) in queries.iter().zip(batch) {
            assert_eq!(result, dijkstra.find(&graph, start, end));
        }
    }

    #[test]
    fn test_overflowing_cost_rejected() {
        let graph = HashMap::from([
            ("A", vec![("B", u32::MAX - 1), ("C", 1)]),
            ("B", vec![("D", 2)]),
            ("C", vec![("E", 1)]),
        ]);
        let result = Dijkstra::new().find(&graph, &"A", &"D");
        assert!(matches!(result, Err(Error::Overflow(_))));

        // Sums that fit exactly are still fine
        let graph = HashMap::from([("A", vec![("B", u32::MAX - 1)]), ("B", vec![("D", 1)])]);
        let result = Dijkstra::new().find(&graph, &"A", &"D").unwrap().unwrap();
        assert_eq!(result.cost, u32::MAX);
    }
}
