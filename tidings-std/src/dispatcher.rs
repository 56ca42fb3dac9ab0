//! # Dispatch Engine
//!
//! [`Dispatcher`] owns a [`HandlerRegistry`] and an [`EventQueue`] and ties
//! them together: [`process_events`](Dispatcher::process_events) pops the
//! highest-priority event, runs every handler registered for its key in
//! registry order, drops the event, and repeats until the queue is empty.
//!
//! # Re-entrancy
//!
//! Every method takes `&self`, so handlers may capture a (weak) reference to
//! the dispatcher and call back into it:
//!
//! - Events pushed from a handler are dispatched by the drain that is already
//!   running. A handler that always re-pushes its own event never lets the
//!   drain finish unless a [drain limit](DispatcherBuilder::drain_limit) is set.
//! - Handlers are invoked from a snapshot taken when the event is popped.
//!   Adding or removing handlers from inside a handler takes effect from the
//!   next event on.
//! - Calling `process_events` from inside a handler returns
//!   [`DispatchError::Reentrant`].
//!
//! The dispatcher is single-threaded (`!Send`, `!Sync`) and holds no locks.
//!
//! # Ownership
//!
//! A handler that captures an `Rc<Dispatcher>` forms a reference cycle with
//! the registry that stores it. Capture `Rc::downgrade(&dispatcher)` instead.

use crate::{queue::EventQueue, registry::HandlerRegistry};
use std::{
    cell::{Cell, RefCell},
    fmt,
};
use tidings_core::{DispatchError, Event, EventKey, Handler, HandlerKey};

/// Counters for one completed drain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DrainReport {
    /// Events popped and dispatched, including ones pushed during the drain.
    pub dispatched: usize,
    /// Handler callbacks invoked.
    pub invocations: usize,
}

/// Builder for [`Dispatcher`].
///
/// # Example
/// ```rust
/// use tidings_std::Dispatcher;
///
/// let dispatcher = Dispatcher::builder()
///     .drain_limit(10_000)
///     .queue_capacity(64)
///     .build();
/// assert!(dispatcher.is_idle());
/// ```
#[derive(Debug, Clone, Default)]
pub struct DispatcherBuilder {
    drain_limit: Option<usize>,
    queue_capacity: usize,
}

impl DispatcherBuilder {
    /// Create a builder with the default configuration: no drain limit.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of events a single drain may dispatch.
    ///
    /// When the cap is hit with events still queued, the drain stops and
    /// returns [`DispatchError::DrainLimitExceeded`]. The remaining events
    /// stay queued for the next call.
    pub fn drain_limit(mut self, limit: usize) -> Self {
        self.drain_limit = Some(limit);
        self
    }

    /// Preallocate room for `capacity` queued events.
    pub fn queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// Build the dispatcher.
    pub fn build(self) -> Dispatcher {
        Dispatcher {
            registry: RefCell::new(HandlerRegistry::new()),
            queue: RefCell::new(EventQueue::with_capacity(self.queue_capacity)),
            draining: Cell::new(false),
            drain_limit: self.drain_limit,
        }
    }
}

/// The synchronous dispatch engine.
///
/// # Example
/// ```rust
/// use std::{cell::RefCell, rc::Rc};
/// use tidings_std::Dispatcher;
/// use tidings_core::{Event, priority};
///
/// let dispatcher = Dispatcher::new();
/// let seen = Rc::new(RefCell::new(Vec::new()));
///
/// for (label, p) in [("H2", 1), ("H1", 10)] {
///     let seen = seen.clone();
///     dispatcher.subscribe("PlayerDied", p, move |_| seen.borrow_mut().push(label));
/// }
///
/// dispatcher.push_event(Event::new("PlayerDied", priority::NORMAL));
/// dispatcher.process_events().unwrap();
/// assert_eq!(*seen.borrow(), vec!["H1", "H2"]);
/// ```
pub struct Dispatcher {
    registry: RefCell<HandlerRegistry>,
    queue: RefCell<EventQueue>,
    draining: Cell<bool>,
    drain_limit: Option<usize>,
}

impl Dispatcher {
    /// Create a dispatcher with the default configuration.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a dispatcher.
    pub fn builder() -> DispatcherBuilder {
        DispatcherBuilder::new()
    }

    /// Create a handler with a fresh id, without registering it.
    ///
    /// Ids are process-wide, so the handler may also be added to other
    /// dispatchers.
    pub fn handler<F>(&self, priority: i32, callback: F) -> Handler
    where
        F: Fn(&Event) + 'static,
    {
        self.registry.borrow().handler(priority, callback)
    }

    /// Register `handler` for `event` (a name or an [`EventKey`]).
    ///
    /// Registering a handler that is already present is a silent no-op.
    pub fn add_handler(&self, event: impl Into<EventKey>, handler: Handler) {
        let event: EventKey = event.into();
        #[cfg(feature = "tracing")]
        {
            let key = handler.key();
            let inserted = self.registry.borrow_mut().insert(event, handler);
            tracing::trace!(event = %event, priority = key.priority, id = %key.id, inserted, "add handler");
        }
        #[cfg(not(feature = "tracing"))]
        {
            self.registry.borrow_mut().insert(event, handler);
        }
    }

    /// Mint a handler and register it for `event`.
    ///
    /// Returns the key needed to remove it later.
    pub fn subscribe<F>(&self, event: impl Into<EventKey>, priority: i32, callback: F) -> HandlerKey
    where
        F: Fn(&Event) + 'static,
    {
        let handler = self.handler(priority, callback);
        let key = handler.key();
        self.add_handler(event, handler);
        key
    }

    /// Remove the handler matching `handler`'s priority and id exactly.
    ///
    /// Unmatched removals are silent no-ops.
    pub fn remove_handler(&self, event: impl Into<EventKey>, handler: impl Into<HandlerKey>) {
        let event: EventKey = event.into();
        let handler: HandlerKey = handler.into();
        #[cfg(feature = "tracing")]
        {
            if !self.registry.borrow_mut().remove(event, handler) {
                tracing::debug!(
                    event = %event,
                    priority = handler.priority,
                    id = %handler.id,
                    "remove_handler matched nothing"
                );
            }
        }
        #[cfg(not(feature = "tracing"))]
        {
            self.registry.borrow_mut().remove(event, handler);
        }
    }

    /// Number of handlers registered for `event`.
    pub fn handler_count(&self, event: impl Into<EventKey>) -> usize {
        self.registry.borrow().len(event)
    }

    /// Whether any handler is registered for `event`.
    pub fn has_handlers(&self, event: impl Into<EventKey>) -> bool {
        self.handler_count(event) > 0
    }

    /// Queue `event` for the next (or current) drain.
    pub fn push_event(&self, event: Event) {
        self.queue.borrow_mut().push(event);
    }

    /// Number of queued events.
    pub fn pending(&self) -> usize {
        self.queue.borrow().len()
    }

    /// Whether the queue is empty.
    pub fn is_idle(&self) -> bool {
        self.queue.borrow().is_empty()
    }

    /// Whether a drain is currently running.
    pub fn is_draining(&self) -> bool {
        self.draining.get()
    }

    /// Dispatch queued events until the queue is empty.
    ///
    /// Events pushed by handlers during this call are dispatched by it too.
    /// Events whose key has no handlers are dropped silently.
    pub fn process_events(&self) -> Result<DrainReport, DispatchError> {
        if self.draining.replace(true) {
            #[cfg(feature = "tracing")]
            tracing::warn!("process_events called while already draining");
            return Err(DispatchError::Reentrant);
        }
        let _guard = DrainGuard(&self.draining);

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("event_drain", pending = self.pending()).entered();

        let mut report = DrainReport::default();
        loop {
            if let Some(limit) = self.drain_limit {
                if report.dispatched >= limit {
                    let pending = self.pending();
                    if pending == 0 {
                        break;
                    }
                    #[cfg(feature = "tracing")]
                    tracing::warn!(limit, pending, "drain limit reached");
                    return Err(DispatchError::DrainLimitExceeded { limit, pending });
                }
            }

            let next = self.queue.borrow_mut().pop();
            let Some(event) = next else {
                break;
            };

            // No borrow is held while callbacks run.
            let handlers = self.registry.borrow().snapshot(event.key());

            #[cfg(feature = "tracing")]
            tracing::trace!(
                event = %event.key(),
                priority = event.priority(),
                handlers = handlers.len(),
                "dispatching event"
            );

            for handler in &handlers {
                handler.call(&event);
            }

            report.dispatched += 1;
            report.invocations += handlers.len();
        }

        Ok(report)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Dispatcher")
            .field("pending", &self.queue.try_borrow().map(|q| q.len()).ok())
            .field(
                "event_types",
                &self.registry.try_borrow().map(|r| r.event_types()).ok(),
            )
            .field("draining", &self.draining.get())
            .field("drain_limit", &self.drain_limit)
            .finish()
    }
}

// Clears the draining flag even if a handler panics.
struct DrainGuard<'a>(&'a Cell<bool>);

impl Drop for DrainGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
