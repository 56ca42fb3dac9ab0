//! Handler registry keyed by event type.
//!
//! Each [`EventKey`] maps to an ordered set of handlers. The set is ordered
//! by [`HandlerKey`]: priority descending, then registration id ascending.
//! Inserting a handler whose `(priority, id)` is already present is a no-op.

use std::collections::{BTreeMap, HashMap, btree_map::Entry};
use tidings_core::{Event, EventKey, Handler, HandlerKey};

/// Ordered handler sets, one per event type.
///
/// # Example
///
/// ```rust
/// use tidings_std::HandlerRegistry;
///
/// let mut registry = HandlerRegistry::new();
/// let low = registry.handler(1, |_| {});
/// let high = registry.handler(10, |_| {});
/// registry.insert("PlayerDied", low.clone());
/// registry.insert("PlayerDied", high.clone());
///
/// let order: Vec<_> = registry
///     .snapshot("PlayerDied".into())
///     .iter()
///     .map(|h| h.priority())
///     .collect();
/// assert_eq!(order, vec![10, 1]);
/// ```
#[derive(Default)]
pub struct HandlerRegistry {
    sets: HashMap<EventKey, BTreeMap<HandlerKey, Handler>>,
}

impl HandlerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a handler with a fresh id. It is not registered yet.
    pub fn handler<F>(&self, priority: i32, callback: F) -> Handler
    where
        F: Fn(&Event) + 'static,
    {
        Handler::new(priority, callback)
    }

    /// Register `handler` for `event`.
    ///
    /// Returns `false` if an equal `(priority, id)` was already registered;
    /// the existing entry is kept.
    pub fn insert(&mut self, event: impl Into<EventKey>, handler: Handler) -> bool {
        let set = self.sets.entry(event.into()).or_default();
        match set.entry(handler.key()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(handler);
                true
            }
        }
    }

    /// Remove the handler matching `handler` exactly.
    ///
    /// Returns `false` when the event type has no set or nothing matched.
    pub fn remove(&mut self, event: impl Into<EventKey>, handler: impl Into<HandlerKey>) -> bool {
        let event: EventKey = event.into();
        let Some(set) = self.sets.get_mut(&event) else {
            return false;
        };
        let handler: HandlerKey = handler.into();
        let removed = set.remove(&handler).is_some();
        if set.is_empty() {
            self.sets.remove(&event);
        }
        removed
    }

    /// Copy out the handlers for `event`, in invocation order.
    ///
    /// The dispatcher iterates this copy, so edits made while it runs apply
    /// from the next event on.
    pub fn snapshot(&self, event: EventKey) -> Vec<Handler> {
        self.sets
            .get(&event)
            .map(|set| set.values().cloned().collect())
            .unwrap_or_default()
    }

    /// Whether `handler` is registered for `event`.
    pub fn contains(&self, event: impl Into<EventKey>, handler: impl Into<HandlerKey>) -> bool {
        let (event, handler): (EventKey, HandlerKey) = (event.into(), handler.into());
        self.sets
            .get(&event)
            .is_some_and(|set| set.contains_key(&handler))
    }

    /// Number of handlers registered for `event`.
    pub fn len(&self, event: impl Into<EventKey>) -> usize {
        let event: EventKey = event.into();
        self.sets.get(&event).map_or(0, BTreeMap::len)
    }

    /// Number of event types with at least one handler.
    pub fn event_types(&self) -> usize {
        self.sets.len()
    }

    /// Whether no handler is registered at all.
    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// Drop every handler registered for `event`, returning how many there were.
    pub fn clear(&mut self, event: impl Into<EventKey>) -> usize {
        let event: EventKey = event.into();
        self.sets.remove(&event).map_or(0, |set| set.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tidings_core::HandlerId;

    fn priorities(registry: &HandlerRegistry, name: &str) -> Vec<i32> {
        registry
            .snapshot(name.into())
            .iter()
            .map(Handler::priority)
            .collect()
    }

    #[test]
    fn test_ordered_regardless_of_registration_order() {
        let mut registry = HandlerRegistry::new();
        for p in [5, 1, 10] {
            let h = registry.handler(p, |_| {});
            registry.insert("X", h);
        }
        assert_eq!(priorities(&registry, "X"), vec![10, 5, 1]);
    }

    #[test]
    fn test_equal_priority_ordered_by_registration() {
        let mut registry = HandlerRegistry::new();
        let first = registry.handler(3, |_| {});
        let second = registry.handler(3, |_| {});
        registry.insert("X", second.clone());
        registry.insert("X", first.clone());

        let ids: Vec<_> = registry.snapshot("X".into()).iter().map(Handler::id).collect();
        assert_eq!(ids, vec![first.id(), second.id()]);
    }

    #[test]
    fn test_duplicate_insert_is_noop() {
        let mut registry = HandlerRegistry::new();
        let h = registry.handler(5, |_| {});
        assert!(registry.insert("X", h.clone()));
        assert!(!registry.insert("X", h));
        assert_eq!(registry.len("X"), 1);
    }

    #[test]
    fn test_same_handler_under_two_events() {
        let mut registry = HandlerRegistry::new();
        let h = registry.handler(5, |_| {});
        assert!(registry.insert("A", h.clone()));
        assert!(registry.insert("B", h));
        assert_eq!(registry.event_types(), 2);
    }

    #[test]
    fn test_remove_requires_exact_match() {
        let mut registry = HandlerRegistry::new();
        let h = registry.handler(5, |_| {});
        registry.insert("X", h.clone());

        assert!(!registry.remove("X", HandlerKey::new(6, h.id())));
        assert!(registry.contains("X", &h));

        assert!(registry.remove("X", &h));
        assert!(!registry.contains("X", &h));
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_unknown_event_is_noop() {
        let mut registry = HandlerRegistry::new();
        assert!(!registry.remove("Nobody", HandlerKey::new(5, HandlerId::new(0))));
    }

    #[test]
    fn test_key_and_name_forms_agree() {
        let mut registry = HandlerRegistry::new();
        let h = registry.handler(0, |_| {});
        registry.insert(EventKey::from_name("X"), h.clone());
        assert!(registry.contains("X", &h));
        assert_eq!(registry.clear("X"), 1);
        assert_eq!(registry.len(EventKey::from_name("X")), 0);
    }

    #[test]
    fn test_handlers_from_separate_registries_coexist() {
        let mut native = HandlerRegistry::new();
        let foreign = HandlerRegistry::new().handler(5, |_| {});
        let own = native.handler(5, |_| {});

        assert!(native.insert("X", own.clone()));
        assert!(native.insert("X", foreign.clone()));
        assert_eq!(native.len("X"), 2);
        assert!(native.contains("X", &own));
        assert!(native.contains("X", &foreign));
    }
}
