//! Event identity: a hashed type key paired with a priority.

use crate::hash::{DEFAULT_SEED, murmur3_32};
use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// Symbolic event priorities.
///
/// These are convenience values only. Any `i32` is a valid priority, including
/// values outside this range; larger values are dispatched first.
pub mod priority {
    /// Least urgent symbolic level.
    pub const LOWEST: i32 = 0;
    /// Below normal.
    pub const LOW: i32 = 1;
    /// The default level.
    pub const NORMAL: i32 = 2;
    /// Above normal.
    pub const HIGH: i32 = 3;
    /// Most urgent ordinary level.
    pub const HIGHEST: i32 = 4;
    /// Top of the symbolic range.
    pub const MAX: i32 = 5;
}

/// Hashed identifier of an event type.
///
/// Produced from an event-type name with [`DEFAULT_SEED`]. Registry lookups
/// compare keys only; the name itself is never retained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EventKey(u32);

impl EventKey {
    /// Wrap a raw key, for callers that hashed the name themselves.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Hash an event-type name with the default seed.
    pub fn from_name(name: &str) -> Self {
        Self(murmur3_32(name.as_bytes(), DEFAULT_SEED))
    }

    /// The raw 32-bit value.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for EventKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010x}", self.0)
    }
}

impl From<u32> for EventKey {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl From<&str> for EventKey {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<&String> for EventKey {
    fn from(name: &String) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for EventKey {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl From<EventIdentity> for EventKey {
    fn from(identity: EventIdentity) -> Self {
        identity.key
    }
}

/// The `(key, priority)` pair identifying an event occurrence.
///
/// Two identities describe the same event type iff their keys match, so
/// `PartialEq` and `Hash` ignore the priority.
#[derive(Debug, Clone, Copy)]
pub struct EventIdentity {
    key: EventKey,
    priority: i32,
}

impl EventIdentity {
    /// Hash `name` once and pair it with `priority`.
    pub fn new(name: &str, priority: i32) -> Self {
        Self::from_key(EventKey::from_name(name), priority)
    }

    /// Build an identity from an already-hashed key.
    pub const fn from_key(key: EventKey, priority: i32) -> Self {
        Self { key, priority }
    }

    /// The hashed event-type key.
    pub const fn key(&self) -> EventKey {
        self.key
    }

    /// The event priority. Larger is more urgent.
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Whether both identities name the same event type.
    pub fn same_type(&self, other: &EventIdentity) -> bool {
        self.key == other.key
    }
}

impl PartialEq for EventIdentity {
    fn eq(&self, other: &Self) -> bool {
        self.same_type(other)
    }
}

impl Eq for EventIdentity {}

impl Hash for EventIdentity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_does_not_affect_key() {
        let a = EventIdentity::new("PlayerDied", priority::LOWEST);
        let b = EventIdentity::new("PlayerDied", 1_000);
        assert_eq!(a.key(), b.key());
        assert_eq!(a, b);
        assert_ne!(a.priority(), b.priority());
    }

    #[test]
    fn test_different_names_differ() {
        let died = EventIdentity::new("PlayerDied", priority::NORMAL);
        let moved = EventIdentity::new("PlayerMoved", priority::NORMAL);
        assert!(!died.same_type(&moved));
    }

    #[test]
    fn test_key_conversions_agree() {
        let name = String::from("PlayerDied");
        let from_str: EventKey = "PlayerDied".into();
        let from_string: EventKey = name.clone().into();
        let from_ref: EventKey = (&name).into();
        let from_identity: EventKey = EventIdentity::new("PlayerDied", 7).into();
        assert_eq!(from_str, from_string);
        assert_eq!(from_str, from_ref);
        assert_eq!(from_str, from_identity);
        assert_eq!(EventKey::from(from_str.get()), from_str);
    }

    #[test]
    fn test_out_of_range_priority_accepted() {
        let identity = EventIdentity::new("Overflow", i32::MIN);
        assert_eq!(identity.priority(), i32::MIN);
    }

    #[test]
    fn test_display_is_hex() {
        assert_eq!(EventKey::new(0xab).to_string(), "0x000000ab");
    }
}
