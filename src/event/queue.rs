//! Next-tick work queue.
//!
//! [`TickQueue`] holds work that must run after the current event has been
//! fully handled but before the next one arrives. Producers `push` during an
//! event; the owner `drain`s once the event's state changes have settled.

use std::collections::VecDeque;

// ---------------------------------------------------------------------------
// TickQueue
// ---------------------------------------------------------------------------

/// FIFO queue of deferred work items.
///
/// The queue does not run anything itself. Whoever owns it decides what a
/// drained item means (for the selection manager, a focus move).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickQueue<M> {
    queue: VecDeque<M>,
}

impl<M> TickQueue<M> {
    /// Create a new, empty queue.
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    /// Enqueue an item for the next tick.
    pub fn push(&mut self, item: M) {
        self.queue.push_back(item);
    }

    /// Drain all pending items in push order.
    ///
    /// The queue is empty after this call.
    pub fn drain(&mut self) -> Vec<M> {
        self.queue.drain(..).collect()
    }

    /// Number of pending items.
    pub fn pending_count(&self) -> usize {
        self.queue.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl<M> Default for TickQueue<M> {
    fn default() -> Self {
        Self::new()
    }
}

// ===========================================================================
// Tests
// ===========================================================================
