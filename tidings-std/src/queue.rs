//! Pending events, ordered by event priority.
//!
//! Events with equal priority come out in no specified order. The queue does
//! not record insertion order, so callers must not rely on FIFO behaviour.

use std::{cmp::Ordering, collections::BinaryHeap};
use tidings_core::Event;

// Orders by event priority only.
struct Pending(Event);

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.0.priority() == other.0.priority()
    }
}

impl Eq for Pending {}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.priority().cmp(&other.0.priority())
    }
}

/// Max-priority queue of events.
#[derive(Default)]
pub struct EventQueue {
    heap: BinaryHeap<Pending>,
}

impl EventQueue {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty queue with room for `capacity` events.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Take ownership of `event`.
    pub fn push(&mut self, event: Event) {
        self.heap.push(Pending(event));
    }

    /// Remove and return a highest-priority event.
    pub fn pop(&mut self) -> Option<Event> {
        self.heap.pop().map(|pending| pending.0)
    }

    /// Priority of the event [`pop`](Self::pop) would return.
    pub fn peek_priority(&self) -> Option<i32> {
        self.heap.peek().map(|pending| pending.0.priority())
    }

    /// Number of queued events.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Drop every queued event, returning how many were discarded.
    pub fn clear(&mut self) -> usize {
        let discarded = self.heap.len();
        self.heap.clear();
        discarded
    }
}
