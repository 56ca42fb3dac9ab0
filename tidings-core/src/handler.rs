//! # Handler values
//!
//! A handler is a `(priority, id, callback)` triple registered against an
//! [`EventKey`](crate::EventKey).
//!
//! Handler priority is independent of event priority: event priority decides
//! which event is dispatched next, handler priority decides the order in which
//! the handlers of one event run.
//!
//! # Ordering
//!
//! [`HandlerKey`] is totally ordered by priority descending, then by
//! [`HandlerId`] ascending. The id is a sequence number drawn from one
//! process-wide counter whenever a [`Handler`] is created, so two distinct
//! handlers never share a key, even across dispatchers. It only breaks ties
//! and makes removal well-defined; it says nothing about importance.

use crate::event::Event;
use std::{
    cmp::Ordering,
    fmt,
    rc::Rc,
    sync::atomic::{AtomicU64, Ordering as AtomicOrdering},
};

static NEXT_HANDLER_ID: AtomicU64 = AtomicU64::new(1);

/// Shared callback invoked with a read-only view of the dispatched event.
pub type Callback = Rc<dyn Fn(&Event)>;

/// Handler sequence number, unique within the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerId(u64);

impl HandlerId {
    /// Wrap a raw sequence number.
    ///
    /// Only useful for building lookup keys; handlers always get their id
    /// from [`HandlerId::next`].
    #[doc(hidden)]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Reserve the next id. Ids increase monotonically.
    pub fn next() -> Self {
        Self(NEXT_HANDLER_ID.fetch_add(1, AtomicOrdering::Relaxed))
    }

    /// The raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for HandlerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handler#{}", self.0)
    }
}

/// What a registry compares handlers by: `(priority, id)`.
///
/// Removing a handler requires both parts to match the registered handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerKey {
    /// Handler priority. Higher runs first.
    pub priority: i32,
    /// Tiebreak identity.
    pub id: HandlerId,
}

impl HandlerKey {
    /// Pair a priority with an id.
    pub const fn new(priority: i32, id: HandlerId) -> Self {
        Self { priority, id }
    }
}

impl Ord for HandlerKey {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.id.cmp(&other.id))
    }
}

impl PartialOrd for HandlerKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A registered (or registrable) event handler.
///
/// Cloning is cheap and shares both the callback and the id. Two clones
/// have the same key, so registering both under the same event is a no-op
/// the second time. Every call to [`Handler::new`] yields a fresh id.
#[derive(Clone)]
pub struct Handler {
    key: HandlerKey,
    callback: Callback,
}

impl Handler {
    /// Create a handler with a fresh id.
    pub fn new<F>(priority: i32, callback: F) -> Self
    where
        F: Fn(&Event) + 'static,
    {
        Self {
            key: HandlerKey::new(priority, HandlerId::next()),
            callback: Rc::new(callback),
        }
    }

    /// The `(priority, id)` pair used for ordering and removal.
    pub fn key(&self) -> HandlerKey {
        self.key
    }

    /// Handler priority.
    pub fn priority(&self) -> i32 {
        self.key.priority
    }

    /// Tiebreak identity.
    pub fn id(&self) -> HandlerId {
        self.key.id
    }

    /// The shared callback.
    pub fn callback(&self) -> &Callback {
        &self.callback
    }

    /// Invoke the callback.
    pub fn call(&self, event: &Event) {
        (self.callback)(event)
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Handler")
            .field("priority", &self.key.priority)
            .field("id", &self.key.id)
            .finish_non_exhaustive()
    }
}

impl From<&Handler> for HandlerKey {
    fn from(handler: &Handler) -> Self {
        handler.key
    }
}

impl From<Handler> for HandlerKey {
    fn from(handler: Handler) -> Self {
        handler.key
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_priority_descending() {
        let mut keys = vec![
            HandlerKey::new(1, HandlerId::new(0)),
            HandlerKey::new(10, HandlerId::new(1)),
            HandlerKey::new(5, HandlerId::new(2)),
        ];
        keys.sort();
        let priorities: Vec<_> = keys.iter().map(|k| k.priority).collect();
        assert_eq!(priorities, vec![10, 5, 1]);
    }

    #[test]
    fn test_id_breaks_ties_ascending() {
        let mut keys = vec![
            HandlerKey::new(3, HandlerId::new(7)),
            HandlerKey::new(3, HandlerId::new(2)),
        ];
        keys.sort();
        assert_eq!(keys[0].id, HandlerId::new(2));
    }

    #[test]
    fn test_call_and_clone_share_callback() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let handler = Handler::new(0, move |_| counter.set(counter.get() + 1));
        let twin = handler.clone();

        let event = Event::new("Tick", 0);
        handler.call(&event);
        twin.call(&event);

        assert_eq!(hits.get(), 2);
        assert_eq!(HandlerKey::from(&handler), twin.key());
    }

    #[test]
    fn test_each_handler_gets_a_fresh_id() {
        let a = Handler::new(5, |_| {});
        let b = Handler::new(5, |_| {});
        assert_ne!(a.key(), b.key());
        assert!(a.id() < b.id());
        assert_eq!(a.clone().key(), a.key());
    }
}
