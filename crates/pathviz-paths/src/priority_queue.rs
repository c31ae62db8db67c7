//! Min-priority queue with an optional secondary tie-break key.
//!
//! Entries are stored in a binary heap keyed by
//! `(priority, tie_break, insertion_order)`. The lowest priority is dequeued
//! first; among equal priorities the lowest tie-break wins, and among entries
//! equal on both the one enqueued first wins.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

#[derive(Debug)]
struct Entry<T, P, B> {
    element: T,
    priority: P,
    tie_break: B,
    /// Monotonically increasing counter; lower = enqueued earlier.
    seq: u64,
}

impl<T, P: Ord, B: Ord> PartialEq for Entry<T, P, B> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P: Ord, B: Ord> Eq for Entry<T, P, B> {}

impl<T, P: Ord, B: Ord> PartialOrd for Entry<T, P, B> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T, P: Ord, B: Ord> Ord for Entry<T, P, B> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Natural order; the heap wraps entries in `Reverse`.
        self.priority
            .cmp(&other.priority)
            .then_with(|| self.tie_break.cmp(&other.tie_break))
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority queue.
///
/// `B` is the tie-break key type. With the default `()` every tie is settled
/// by insertion order; Dijkstra and greedy search use that form, while A*
/// passes its heuristic as the tie-break through
/// [`enqueue_with_tie_break`](Self::enqueue_with_tie_break).
///
/// Dequeuing an empty queue returns `None`.
pub struct PriorityQueue<T, P, B = ()> {
    heap: BinaryHeap<Reverse<Entry<T, P, B>>>,
    seq: u64,
}

impl<T, P: Ord, B: Ord> PriorityQueue<T, P, B> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    /// Enqueue `element` with a priority and an explicit tie-break key.
    pub fn enqueue_with_tie_break(&mut self, element: T, priority: P, tie_break: B) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            element,
            priority,
            tie_break,
            seq,
        }));
    }

    /// Remove and return the minimal element.
    pub fn dequeue(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(entry)| entry.element)
    }

    /// The element [`dequeue`](Self::dequeue) would return next.
    pub fn peek(&self) -> Option<&T> {
        self.heap.peek().map(|Reverse(entry)| &entry.element)
    }

    /// Number of queued entries.
    pub fn count(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue holds no entries.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, P: Ord, B: Ord + Default> PriorityQueue<T, P, B> {
    /// Enqueue `element` with `priority` and the default tie-break key.
    pub fn enqueue(&mut self, element: T, priority: P) {
        self.enqueue_with_tie_break(element, priority, B::default());
    }
}

impl<T, P: Ord, B: Ord> Default for PriorityQueue<T, P, B> {
    fn default() -> Self {
        Self::new()
    }
}
