//! Type-keyed payload data attached to events.
//!
//! Each [`Event`](crate::Event) owns a [`Payloads`] slot map holding at most
//! one component per concrete type. Components get a non-owning
//! [`EventOwner`] back-reference when they are constructed; they never hold
//! the event itself.

use crate::{error::PayloadError, identity::EventIdentity};
use std::{
    any::{Any, TypeId, type_name},
    borrow::Cow,
    collections::HashMap,
    fmt,
};

/// The minimal contract every payload component supports.
///
/// Concrete payloads add their own typed fields. Prefer identifiers over
/// references for anything another subsystem must resolve later, since the
/// event is dropped right after dispatch.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be attached to an event",
    label = "missing `Payload` implementation",
    note = "Implement `Payload::describe` or use `#[derive(Payload)]`."
)]
pub trait Payload: 'static {
    /// Short human-readable description, used for diagnostics.
    fn describe(&self) -> Cow<'_, str>;
}

/// Process-unique identifier of an [`Event`](crate::Event).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventId(pub(crate) u64);

impl EventId {
    /// The raw value.
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event#{}", self.0)
    }
}

/// Non-owning back-reference from a component to the event that owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventOwner {
    /// Id of the owning event.
    pub id: EventId,
    /// Identity of the owning event.
    pub identity: EventIdentity,
}

// Gives `dyn` storage access to `Any` without trait upcasting.
trait AnyPayload: Payload {
    fn as_any(&self) -> &dyn Any;
}

impl<T: Payload> AnyPayload for T {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Slot map of payload components, keyed by concrete type.
#[derive(Default)]
pub struct Payloads {
    slots: HashMap<TypeId, Box<dyn AnyPayload>>,
}

impl Payloads {
    /// Create an empty slot map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a `T` built by `ctor`, unless one is already attached.
    ///
    /// Returns `false` without calling `ctor` when the slot is taken.
    pub fn insert_with<T, F>(&mut self, ctor: F) -> bool
    where
        T: Payload,
        F: FnOnce() -> T,
    {
        self.try_insert_with(ctor).is_ok()
    }

    /// Like [`insert_with`](Self::insert_with), reporting the conflict as an error.
    pub fn try_insert_with<T, F>(&mut self, ctor: F) -> Result<(), PayloadError>
    where
        T: Payload,
        F: FnOnce() -> T,
    {
        use std::collections::hash_map::Entry;

        match self.slots.entry(TypeId::of::<T>()) {
            Entry::Occupied(_) => Err(PayloadError::AlreadyAttached {
                type_name: type_name::<T>(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(Box::new(ctor()));
                Ok(())
            }
        }
    }

    /// Read the attached `T`, if any.
    pub fn get<T: Payload>(&self) -> Option<&T> {
        self.slots
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.as_any().downcast_ref::<T>())
    }

    /// Whether a `T` is attached.
    pub fn contains<T: Payload>(&self) -> bool {
        self.slots.contains_key(&TypeId::of::<T>())
    }

    /// Number of attached components.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no component is attached.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Descriptions of every attached component, in no particular order.
    pub fn describe_all(&self) -> impl Iterator<Item = Cow<'_, str>> {
        self.slots.values().map(|slot| slot.describe())
    }
}

impl fmt::Debug for Payloads {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.describe_all()).finish()
    }
}

/// Fixed-text payload used by diagnostics and tests.
#[derive(Debug, Clone, Copy)]
pub struct TestPayload {
    owner: EventOwner,
}

impl TestPayload {
    /// Create the payload for `owner`.
    pub fn new(owner: EventOwner) -> Self {
        Self { owner }
    }

    /// The event this payload was attached to.
    pub fn owner(&self) -> EventOwner {
        self.owner
    }
}

impl Payload for TestPayload {
    fn describe(&self) -> Cow<'_, str> {
        Cow::Borrowed("Event Payload Test")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Damage {
        amount: u32,
    }

    impl Payload for Damage {
        fn describe(&self) -> Cow<'_, str> {
            Cow::Owned(format!("damage {}", self.amount))
        }
    }

    #[test]
    fn test_insert_once_per_type() {
        let mut payloads = Payloads::new();
        assert!(payloads.insert_with(|| Damage { amount: 3 }));
        assert!(!payloads.insert_with(|| Damage { amount: 9 }));
        assert_eq!(payloads.get::<Damage>().map(|d| d.amount), Some(3));
        assert_eq!(payloads.len(), 1);
    }

    #[test]
    fn test_rejected_ctor_not_called() {
        let mut payloads = Payloads::new();
        payloads.insert_with(|| Damage { amount: 1 });
        let mut called = false;
        payloads.insert_with(|| {
            called = true;
            Damage { amount: 2 }
        });
        assert!(!called);
    }

    #[test]
    fn test_try_insert_reports_type() {
        let mut payloads = Payloads::new();
        payloads.try_insert_with(|| Damage { amount: 1 }).unwrap();
        let err = payloads
            .try_insert_with(|| Damage { amount: 2 })
            .unwrap_err();
        assert!(matches!(
            err,
            PayloadError::AlreadyAttached { type_name } if type_name.ends_with("Damage")
        ));
    }

    #[test]
    fn test_absent_component() {
        let payloads = Payloads::new();
        assert!(payloads.get::<Damage>().is_none());
        assert!(!payloads.contains::<Damage>());
        assert!(payloads.is_empty());
    }

    #[test]
    fn test_describe_all() {
        let mut payloads = Payloads::new();
        payloads.insert_with(|| Damage { amount: 4 });
        let descriptions: Vec<_> = payloads.describe_all().collect();
        assert_eq!(descriptions, vec!["damage 4"]);
    }
}
