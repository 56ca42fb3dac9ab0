//! Logging handler for event observation.

use tidings_core::Event;

/// A callback that logs every event it sees, with its payload descriptions.
///
/// Register it at a very high or very low priority to observe an event type
/// before or after its other handlers.
pub fn logging_handler() -> impl Fn(&Event) + 'static {
    |event: &Event| {
        #[cfg(feature = "tracing")]
        {
            let payloads: Vec<_> = event.describe_components().collect();
            tracing::info!(
                id = %event.id(),
                key = %event.key(),
                priority = event.priority(),
                ?payloads,
                "event dispatched"
            );
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = event;
        }
    }
}
