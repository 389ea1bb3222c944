use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A frontier entry. Ordered by cost, then node label, then insertion sequence.
#[derive(Debug)]
struct Entry<N, P> {
    priority: P,
    sequence: u64,
    node: N,
}

impl<N: Ord, P: Ord> PartialEq for Entry<N, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N: Ord, P: Ord> Eq for Entry<N, P> {}

impl<N: Ord, P: Ord> PartialOrd for Entry<N, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N: Ord, P: Ord> Ord for Entry<N, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.node.cmp(&other.node))
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

/// A min-priority queue of (node, cost) entries backed by `BinaryHeap`.
///
/// Duplicate entries for the same node are allowed; callers discard stale
/// ones when they are popped. Entries with equal cost pop smallest label
/// first, so extraction order does not depend on push order.
#[derive(Debug)]
pub struct Frontier<N, P>
where
    N: Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<Entry<N, P>>>,

    /// Sequence number for the next push
    next_sequence: u64,
}

impl<N, P> Default for Frontier<N, P>
where
    N: Ord + Debug,
    P: Ord + Copy + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<N, P> Frontier<N, P>
where
    N: Ord + Debug,
    P: Ord + Copy + Debug,
{
    /// Creates a new empty frontier
    pub fn new() -> Self {
        Frontier {
            heap: BinaryHeap::new(),
            next_sequence: 0,
        }
    }

    /// Returns true if the frontier is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a node with the given tentative cost
    pub fn push(&mut self, node: N, priority: P) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(Entry { priority, sequence, node }));
    }

    /// Removes the entry with the lowest cost
    pub fn pop(&mut self) -> Option<(N, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.node, entry.priority))
    }
}
