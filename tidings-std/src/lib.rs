//! # tidings-std
//!
//! Dispatch engine for the Tidings event framework.
//!
//! This crate provides:
//! - **Registry**: [`HandlerRegistry`], ordered handler sets keyed by event type
//! - **Queue**: [`EventQueue`], pending events ordered by event priority
//! - **Dispatch**: [`Dispatcher`], which drains the queue into the registry
//! - **Standard handlers**: Logging, Tracing
//! - **Testing**: recorders for asserting dispatch order

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core types
pub use tidings_core;

// Modules
pub mod dispatcher;
pub mod handlers;
pub mod queue;
pub mod registry;
pub mod testing;

pub use dispatcher::{Dispatcher, DispatcherBuilder, DrainReport};
pub use queue::EventQueue;
pub use registry::HandlerRegistry;
