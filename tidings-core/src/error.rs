//! Error types for Tidings.
//!
//! Most operations report failure as a return value or a silent no-op. The
//! errors here cover the cases a caller may want to propagate with `?`:
//!
//! - [`TidingsError`] - Top-level error type
//! - [`DispatchError`] - Errors from draining the event queue
//! - [`PayloadError`] - Errors from attaching payload components

use thiserror::Error;

/// Top-level error type for all Tidings operations.
#[derive(Error, Debug)]
pub enum TidingsError {
    /// An error occurred while draining the queue.
    #[error("dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// An error occurred while attaching a payload.
    #[error("payload error: {0}")]
    Payload(#[from] PayloadError),
}

/// Errors returned by a drain.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    /// A handler tried to start a drain while one was already running.
    ///
    /// The running drain already picks up anything queued by handlers.
    #[error("process_events called from inside a handler")]
    Reentrant,

    /// The configured per-drain limit was reached with events still queued.
    #[error("drain limit of {limit} events reached with {pending} still queued")]
    DrainLimitExceeded {
        /// The configured limit.
        limit: usize,
        /// Events left in the queue.
        pending: usize,
    },
}

/// Errors from the payload slot map.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PayloadError {
    /// A component of this type is already attached.
    #[error("a `{type_name}` component is already attached")]
    AlreadyAttached {
        /// Name of the payload type.
        type_name: &'static str,
    },
}
