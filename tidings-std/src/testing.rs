//! Testing utilities for Tidings.
//!
//! This module provides small recorders that make assertions about dispatch
//! order easy to write.
//!
//! # Features
//!
//! - [`RecordingHandler`]: Records a label each time one of its callbacks runs
//! - [`CountingHandler`]: Counts invocations
//! - [`EventLog`]: Records the key and priority of every event it sees

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};
use tidings_core::{Event, EventId, EventKey};

// ============================================================================
// Recording Handler
// ============================================================================

/// Records labels in invocation order, shared between many callbacks.
///
/// # Example
///
/// ```rust
/// use tidings_core::Event;
/// use tidings_std::{Dispatcher, testing::RecordingHandler};
///
/// let dispatcher = Dispatcher::new();
/// let recorder = RecordingHandler::new();
/// dispatcher.subscribe("PlayerDied", 1, recorder.callback("H2"));
/// dispatcher.subscribe("PlayerDied", 10, recorder.callback("H1"));
///
/// dispatcher.push_event(Event::new("PlayerDied", 0));
/// dispatcher.process_events().unwrap();
/// assert_eq!(recorder.labels(), vec!["H1", "H2"]);
/// ```
#[derive(Clone, Default)]
pub struct RecordingHandler {
    labels: Rc<RefCell<Vec<&'static str>>>,
}

impl RecordingHandler {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that records `label` when invoked.
    pub fn callback(&self, label: &'static str) -> impl Fn(&Event) + 'static {
        let labels = self.labels.clone();
        move |_: &Event| labels.borrow_mut().push(label)
    }

    /// Record `label` directly, for callbacks that do more than record.
    pub fn record(&self, label: &'static str) {
        self.labels.borrow_mut().push(label);
    }

    /// Labels recorded so far.
    pub fn labels(&self) -> Vec<&'static str> {
        self.labels.borrow().clone()
    }

    /// Number of recorded invocations.
    pub fn count(&self) -> usize {
        self.labels.borrow().len()
    }

    /// Forget all recorded labels.
    pub fn clear(&self) {
        self.labels.borrow_mut().clear();
    }
}

// ============================================================================
// Counting Handler
// ============================================================================

/// Counts how many times its callbacks were invoked.
#[derive(Clone, Default)]
pub struct CountingHandler {
    count: Rc<Cell<usize>>,
}

impl CountingHandler {
    /// Create a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that increments the counter.
    pub fn callback(&self) -> impl Fn(&Event) + 'static {
        let count = self.count.clone();
        move |_: &Event| count.set(count.get() + 1)
    }

    /// Get the current count.
    pub fn count(&self) -> usize {
        self.count.get()
    }

    /// Reset the counter.
    pub fn reset(&self) {
        self.count.set(0);
    }
}

// ============================================================================
// Event Log
// ============================================================================

/// One dispatched event as seen by an [`EventLog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggedEvent {
    /// Id of the event.
    pub id: EventId,
    /// Its key.
    pub key: EventKey,
    /// Its priority.
    pub priority: i32,
}

/// Records every event its callbacks receive, in dispatch order.
#[derive(Clone, Default)]
pub struct EventLog {
    entries: Rc<RefCell<Vec<LoggedEvent>>>,
}

impl EventLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// A callback that appends the event to the log.
    pub fn callback(&self) -> impl Fn(&Event) + 'static {
        let entries = self.entries.clone();
        move |event: &Event| {
            entries.borrow_mut().push(LoggedEvent {
                id: event.id(),
                key: event.key(),
                priority: event.priority(),
            })
        }
    }

    /// Everything logged so far.
    pub fn entries(&self) -> Vec<LoggedEvent> {
        self.entries.borrow().clone()
    }

    /// Keys in dispatch order.
    pub fn keys(&self) -> Vec<EventKey> {
        self.entries.borrow().iter().map(|e| e.key).collect()
    }

    /// Priorities in dispatch order.
    pub fn priorities(&self) -> Vec<i32> {
        self.entries.borrow().iter().map(|e| e.priority).collect()
    }

    /// Number of logged events.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Whether nothing has been logged.
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}
