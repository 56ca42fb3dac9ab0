//! Standard handler callbacks.

pub mod logging;
pub mod tracing;

pub use self::{logging::logging_handler, tracing::Traced};
