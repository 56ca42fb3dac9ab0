//! # tidings-core
//!
//! Core types for the Tidings synchronous event dispatcher.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! code that builds events or payloads without needing the dispatch engine
//! from `tidings-std`.
//!
//! # Building Blocks
//!
//! ## Identity Hash ([`hash`])
//!
//! A deterministic 32-bit Murmur3 hash that turns event-type names into
//! compact keys. Names are hashed once, when an identity is built.
//!
//! ## Identity ([`EventKey`], [`EventIdentity`])
//!
//! An identity pairs the hashed key with an event priority. Two identities
//! are the same event type iff their keys match.
//!
//! ## Payloads ([`Payload`], [`Payloads`])
//!
//! A per-event slot map holding at most one component per concrete type.
//! Components receive a non-owning [`EventOwner`] back-reference.
//!
//! ## Events ([`Event`]) and Handlers ([`Handler`])
//!
//! An event is an identity plus its payloads. A handler is a callback with a
//! priority and a process-unique tiebreak id.
//!
//! # Error Types
//!
//! - [`TidingsError`] - Top-level error type
//! - [`DispatchError`] - Drain errors
//! - [`PayloadError`] - Payload attachment errors

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod error;
mod event;
mod handler;
pub mod hash;
mod identity;
mod payload;

// Re-exports
pub use error::{DispatchError, PayloadError, TidingsError};
pub use event::Event;
pub use handler::{Callback, Handler, HandlerId, HandlerKey};
pub use hash::{DEFAULT_SEED, murmur3_32};
pub use identity::{EventIdentity, EventKey, priority};
pub use payload::{EventId, EventOwner, Payload, Payloads, TestPayload};
