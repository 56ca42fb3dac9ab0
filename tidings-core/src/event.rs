//! The event entity.

use crate::{
    error::PayloadError,
    identity::{EventIdentity, EventKey},
    payload::{EventId, EventOwner, Payload, Payloads},
};
use std::{
    borrow::Cow,
    sync::atomic::{AtomicU64, Ordering},
};

static NEXT_EVENT_ID: AtomicU64 = AtomicU64::new(1);

/// A discrete occurrence: a fixed identity plus type-keyed payload data.
///
/// The identity never changes after construction. Components may be attached
/// until the event is pushed; handlers only ever see `&Event`.
///
/// # Example
///
/// ```rust
/// use tidings_core::{Event, TestPayload, priority};
///
/// let mut event = Event::new("PlayerDied", priority::NORMAL);
/// assert!(event.add_component(TestPayload::new));
/// assert!(!event.add_component(TestPayload::new));
/// assert_eq!(
///     event.get_component::<TestPayload>().unwrap().owner().id,
///     event.id()
/// );
/// ```
#[derive(Debug)]
pub struct Event {
    id: EventId,
    identity: EventIdentity,
    payloads: Payloads,
}

impl Event {
    /// Create an event, hashing `name` once.
    pub fn new(name: &str, priority: i32) -> Self {
        Self::from_identity(EventIdentity::new(name, priority))
    }

    /// Create an event from a prebuilt identity.
    pub fn from_identity(identity: EventIdentity) -> Self {
        Self {
            id: EventId(NEXT_EVENT_ID.fetch_add(1, Ordering::Relaxed)),
            identity,
            payloads: Payloads::new(),
        }
    }

    /// Process-unique id of this event.
    pub fn id(&self) -> EventId {
        self.id
    }

    /// The event's identity.
    pub fn identity(&self) -> EventIdentity {
        self.identity
    }

    /// Shorthand for `identity().key()`.
    pub fn key(&self) -> EventKey {
        self.identity.key()
    }

    /// Shorthand for `identity().priority()`.
    pub fn priority(&self) -> i32 {
        self.identity.priority()
    }

    /// Back-reference handed to components at construction.
    pub fn owner(&self) -> EventOwner {
        EventOwner {
            id: self.id,
            identity: self.identity,
        }
    }

    /// Attach a component built by `ctor`.
    ///
    /// Returns `false` and leaves the existing instance untouched if a `T`
    /// is already attached.
    pub fn add_component<T, F>(&mut self, ctor: F) -> bool
    where
        T: Payload,
        F: FnOnce(EventOwner) -> T,
    {
        let owner = self.owner();
        self.payloads.insert_with(|| ctor(owner))
    }

    /// Attach a component, reporting a conflict as [`PayloadError`].
    pub fn try_add_component<T, F>(&mut self, ctor: F) -> Result<(), PayloadError>
    where
        T: Payload,
        F: FnOnce(EventOwner) -> T,
    {
        let owner = self.owner();
        self.payloads.try_insert_with(|| ctor(owner))
    }

    /// Read the attached `T`, if any.
    pub fn get_component<T: Payload>(&self) -> Option<&T> {
        self.payloads.get::<T>()
    }

    /// Whether a `T` is attached.
    pub fn has_component<T: Payload>(&self) -> bool {
        self.payloads.contains::<T>()
    }

    /// Number of attached components.
    pub fn component_count(&self) -> usize {
        self.payloads.len()
    }

    /// Descriptions of all attached components.
    pub fn describe_components(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.payloads.describe_all()
    }
}
