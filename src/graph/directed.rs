use crate::graph::traits::{Graph, Weight};
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph over labeled nodes using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Outgoing edges for each node: node -> [(target, weight)]
    outgoing_edges: HashMap<N, Vec<(N, W)>>,
}

impl<N, W> Default for DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, W> DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new directed graph with room for the given number of nodes
    pub fn with_capacity(nodes: usize) -> Self {
        DirectedGraph {
            outgoing_edges: HashMap::with_capacity(nodes),
        }
    }

    /// Builds a graph from (from, to, weight) triples, skipping negative weights
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = (N, N, W)>,
    {
        let mut graph = DirectedGraph::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Adds a node without edges. Returns false if it was already present.
    pub fn add_node(&mut self, node: N) -> bool {
        if self.outgoing_edges.contains_key(&node) {
            return false;
        }
        self.outgoing_edges.insert(node, Vec::new());
        true
    }

    /// Adds a directed edge, or updates its weight if it already exists.
    ///
    /// Both endpoints are registered as nodes. Negative weights are refused.
    pub fn add_edge(&mut self, from: N, to: N, weight: W) -> bool {
        if weight.is_negative() {
            log::warn!("Refusing negative edge {:?} -> {:?} ({:?})", from, to, weight);
            return false;
        }

        self.add_node(to.clone());
        let outgoing = self.outgoing_edges.entry(from).or_default();
        match outgoing.iter().position(|(target, _)| *target == to) {
            Some(index) => outgoing[index].1 = weight,
            None => outgoing.push((to, weight)),
        }
        true
    }

    /// Removes an edge from the graph
    pub fn remove_edge(&mut self, from: &N, to: &N) -> bool {
        match self.outgoing_edges.get_mut(from) {
            Some(outgoing) => {
                let len_before = outgoing.len();
                outgoing.retain(|(target, _)| target != to);
                len_before > outgoing.len()
            }
            None => false,
        }
    }
}

impl<N, W> Graph<N, W> for DirectedGraph<N, W>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    fn contains_node(&self, node: &N) -> bool {
        self.outgoing_edges.contains_key(node)
    }

    fn neighbors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a> {
        self.outgoing_edges.neighbors(node)
    }

    fn node_count(&self) -> usize {
        self.outgoing_edges.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_edge_registers_both_endpoints() {
        let mut graph: DirectedGraph<&str, u32> = DirectedGraph::new();
        assert!(graph.add_edge("A", "B", 3));

        assert!(graph.contains_node(&"A"));
        assert!(graph.contains_node(&"B"));
        assert_eq!(graph.node_count(), 2);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_add_edge_updates_existing_weight() {
        let mut graph: DirectedGraph<u32, u32> = DirectedGraph::new();
        graph.add_edge(0, 1, 10);
        graph.add_edge(0, 1, 4);

        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.edge_weight(&0, &1), Some(4));
    }

    #[test]
    fn test_negative_weight_refused() {
        let mut graph: DirectedGraph<u32, i32> = DirectedGraph::new();
        assert!(!graph.add_edge(0, 1, -2));
        assert_eq!(graph.edge_count(), 0);
        assert!(!graph.contains_node(&1));

        assert!(graph.add_edge(0, 1, 0));
        assert_eq!(graph.edge_weight(&0, &1), Some(0));
    }

    #[test]
    fn test_remove_edge() {
        let mut graph = DirectedGraph::from_edges(vec![(1u8, 2u8, 1u32), (1, 3, 1)]);
        assert!(graph.remove_edge(&1, &2));
        assert!(!graph.remove_edge(&1, &2));
        assert!(!graph.has_edge(&1, &2));
        assert!(graph.has_edge(&1, &3));
    }
}
