use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;
use std::ops::Add;

use num_traits::{CheckedAdd, Zero};
use ordered_float::OrderedFloat;

/// Numeric edge weight usable by the path finders.
///
/// Implemented for the primitive integers and `ordered_float::OrderedFloat`.
pub trait Weight: Copy + Ord + Zero + Add<Output = Self> + Debug {
    /// Returns true if the weight is below zero
    fn is_negative(&self) -> bool {
        *self < Self::zero()
    }

    /// Adds two weights, returning `None` if the sum is not representable
    fn checked_sum(self, other: Self) -> Option<Self>;
}

macro_rules! impl_integer_weight {
    ($($t:ty),*) => {
        $(
            impl Weight for $t {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    CheckedAdd::checked_add(&self, &other)
                }
            }
        )*
    };
}

impl_integer_weight!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! impl_float_weight {
    ($($t:ty),*) => {
        $(
            // Sums that reach infinity or NaN count as overflow
            impl Weight for OrderedFloat<$t> {
                fn checked_sum(self, other: Self) -> Option<Self> {
                    let sum = self + other;
                    if sum.0.is_finite() {
                        Some(sum)
                    } else {
                        None
                    }
                }
            }
        )*
    };
}

impl_float_weight!(f32, f64);

/// Trait representing a read-only weighted directed graph over labeled nodes
pub trait Graph<N, W>: Debug
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    /// Returns true if the node has an adjacency entry in the graph
    fn contains_node(&self, node: &N) -> bool;

    /// Returns an iterator over the outgoing edges from a node, in insertion order.
    /// Nodes without an entry yield no edges.
    fn neighbors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a>;

    /// Returns the number of nodes with an adjacency entry
    fn node_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if there's an edge between the two nodes
    fn has_edge(&self, from: &N, to: &N) -> bool {
        self.neighbors(from).any(|(target, _)| target == to)
    }

    /// Gets the weight of the first edge between two nodes, if any
    fn edge_weight(&self, from: &N, to: &N) -> Option<W> {
        self.neighbors(from)
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| weight)
    }
}

impl<N, W> Graph<N, W> for HashMap<N, Vec<(N, W)>>
where
    N: Clone + Eq + Hash + Debug,
    W: Weight,
{
    fn contains_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn neighbors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a> {
        match self.get(node) {
            Some(edges) => Box::new(edges.iter().map(|(target, weight)| (target, *weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn node_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.values().map(|edges| edges.len()).sum()
    }
}

impl<N, W> Graph<N, W> for BTreeMap<N, Vec<(N, W)>>
where
    N: Clone + Eq + Hash + Ord + Debug,
    W: Weight,
{
    fn contains_node(&self, node: &N) -> bool {
        self.contains_key(node)
    }

    fn neighbors<'a>(&'a self, node: &N) -> Box<dyn Iterator<Item = (&'a N, W)> + 'a> {
        match self.get(node) {
            Some(edges) => Box::new(edges.iter().map(|(target, weight)| (target, *weight))),
            None => Box::new(std::iter::empty()),
        }
    }

    fn node_count(&self) -> usize {
        self.len()
    }

    fn edge_count(&self) -> usize {
        self.values().map(|edges| edges.len()).sum()
    }
}
