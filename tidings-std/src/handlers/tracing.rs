//! Span-wrapping handler for tracing.

use tidings_core::Event;

/// A callback wrapper that runs the inner callback inside a `tracing` span.
///
/// Without the `tracing` feature it simply forwards to the inner callback.
pub struct Traced<F> {
    inner: F,
    name: &'static str,
}

impl<F> Traced<F>
where
    F: Fn(&Event) + 'static,
{
    /// Wrap `inner`, naming the span `name`.
    pub const fn new(name: &'static str, inner: F) -> Self {
        Self { inner, name }
    }

    /// The span name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Invoke the inner callback.
    pub fn call(&self, event: &Event) {
        #[cfg(feature = "tracing")]
        let _span = ::tracing::info_span!(
            "event_handler",
            handler = %self.name,
            key = %event.key(),
            priority = event.priority()
        )
        .entered();

        (self.inner)(event)
    }

    /// Turn the wrapper into a plain callback for registration.
    pub fn into_fn(self) -> impl Fn(&Event) + 'static {
        move |event: &Event| self.call(event)
    }
}

impl<F: Clone> Clone for Traced<F> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{cell::Cell, rc::Rc};

    #[test]
    fn test_traced_passthrough() {
        let hits = Rc::new(Cell::new(0));
        let counter = hits.clone();
        let traced = Traced::new("counter", move |_: &Event| counter.set(counter.get() + 1));
        assert_eq!(traced.name(), "counter");

        let callback = traced.into_fn();
        callback(&Event::new("Tick", 0));
        callback(&Event::new("Tick", 0));
        assert_eq!(hits.get(), 2);
    }
}
