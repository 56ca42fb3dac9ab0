#![allow(dead_code)]

use std::{
    borrow::Cow,
    cell::RefCell,
    rc::{Rc, Weak},
};
use tidings::{Dispatcher, Event, EventOwner, Payload};

// ============================================================================
// Test Payloads
// ============================================================================

/// Identifies the player an event refers to, by id rather than by reference.
#[derive(Debug, Clone, Copy)]
pub struct PlayerRef {
    pub owner: EventOwner,
    pub player_id: u64,
}

impl Payload for PlayerRef {
    fn describe(&self) -> Cow<'_, str> {
        Cow::Owned(format!("player {}", self.player_id))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Payload for Position {
    fn describe(&self) -> Cow<'_, str> {
        Cow::Owned(format!("at ({}, {})", self.x, self.y))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Shared, ordered log of strings written by handlers.
#[derive(Clone, Default)]
pub struct Trace {
    lines: Rc<RefCell<Vec<String>>>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, line: impl Into<String>) {
        self.lines.borrow_mut().push(line.into());
    }

    /// A handler callback that writes `line`.
    pub fn writer(&self, line: &'static str) -> impl Fn(&Event) + 'static {
        let trace = self.clone();
        move |_: &Event| trace.push(line)
    }

    pub fn lines(&self) -> Vec<String> {
        self.lines.borrow().clone()
    }
}

/// A dispatcher handlers can reach without forming an `Rc` cycle.
pub fn shared_dispatcher() -> (Rc<Dispatcher>, Weak<Dispatcher>) {
    let dispatcher = Rc::new(Dispatcher::new());
    let weak = Rc::downgrade(&dispatcher);
    (dispatcher, weak)
}
