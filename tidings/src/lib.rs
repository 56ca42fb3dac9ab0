//! # tidings - Synchronous Priority Event Dispatch
//!
//! `tidings` is an in-process event dispatcher. Producers build events
//! identified by a hashed name and carrying a priority; consumers register
//! handlers that run when matching events are drained.
//!
//! Event priority and handler priority are independent:
//! - **Event priority** decides which queued event is dispatched next
//!   (higher first, ties in no specified order).
//! - **Handler priority** decides the order in which one event's handlers run
//!   (higher first, ties broken by registration order).
//!
//! ## Quick Start
//!
//! ```rust
//! use tidings::{Dispatcher, Event, TestPayload, priority};
//!
//! let dispatcher = Dispatcher::new();
//! dispatcher.subscribe("PlayerDied", 10, |event| {
//!     assert!(event.get_component::<TestPayload>().is_some());
//! });
//!
//! let mut event = Event::new("PlayerDied", priority::NORMAL);
//! event.add_component(TestPayload::new);
//! dispatcher.push_event(event);
//!
//! let report = dispatcher.process_events().unwrap();
//! assert_eq!(report.invocations, 1);
//! ```
//!
//! Dispatch is fully synchronous and driven by explicit
//! [`process_events`](Dispatcher::process_events) calls. Nothing here is
//! thread-safe, persistent or timer-driven.

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use tidings_core::{
    // Handlers
    Callback,
    // Error types
    DispatchError,
    // Events
    Event,
    EventId,
    // Identity
    EventIdentity,
    EventKey,
    EventOwner,
    Handler,
    HandlerId,
    HandlerKey,
    // Payloads
    Payload,
    PayloadError,
    Payloads,
    TestPayload,
    TidingsError,
    hash,
    priority,
};

// Dispatch engine
pub use tidings_std::{Dispatcher, DispatcherBuilder, DrainReport, EventQueue, HandlerRegistry};

/// Standard handler callbacks.
pub mod handlers {
    pub use tidings_std::handlers::{Traced, logging_handler};
}

/// Testing utilities.
pub mod testing {
    pub use tidings_std::testing::{CountingHandler, EventLog, LoggedEvent, RecordingHandler};
}

/// Prelude module - common imports for Tidings.
///
/// # Usage
///
/// ```rust
/// use tidings::prelude::*;
///
/// let dispatcher = Dispatcher::new();
/// dispatcher.push_event(Event::new("Ping", priority::LOW));
/// assert_eq!(dispatcher.pending(), 1);
/// ```
pub mod prelude {
    pub use crate::{
        DispatchError, Dispatcher, Event, EventIdentity, EventKey, Handler, HandlerKey, Payload,
        priority,
    };
}

#[cfg(feature = "macros")]
pub use tidings_macros::{Payload, subscriber};
