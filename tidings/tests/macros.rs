#![cfg(feature = "macros")]

use std::{
    cell::Cell,
    sync::atomic::{AtomicUsize, Ordering},
};
use tidings::{Dispatcher, Event, EventOwner, Payload, priority};

// ============================================================================
// Test: derive(Payload)
// ============================================================================

#[derive(tidings::Payload)]
#[payload(describe = "a scored goal")]
struct Goal {
    scorer: u64,
}

#[derive(tidings::Payload)]
#[payload(crate = "::tidings_core", describe = "kickoff")]
struct Kickoff;

#[derive(tidings::Payload)]
struct Assist {
    _owner: EventOwner,
}

#[test]
fn test_derive_payload_describe() {
    let mut event = Event::new("GoalScored", priority::HIGH);
    assert!(event.add_component(|_| Goal { scorer: 9 }));
    assert!(event.add_component(|owner| Assist { _owner: owner }));

    let goal = event.get_component::<Goal>().unwrap();
    assert_eq!(goal.scorer, 9);
    assert_eq!(goal.describe(), "a scored goal");
    assert_eq!(event.get_component::<Assist>().unwrap().describe(), "Assist");
}

#[test]
fn test_derive_payload_with_core_path() {
    let mut event = Event::new("Kickoff", priority::NORMAL);
    assert!(event.add_component(|_| Kickoff));
    let described: Vec<_> = event.describe_components().collect();
    assert_eq!(described, vec!["kickoff"]);
}

// ============================================================================
// Test: #[subscriber]
// ============================================================================

static GOALS: AtomicUsize = AtomicUsize::new(0);

thread_local! {
    static LAST_SCORER: Cell<u64> = const { Cell::new(0) };
}

#[tidings::subscriber(event = "GoalScored", priority = 10)]
fn on_goal(event: &Event) {
    GOALS.fetch_add(1, Ordering::Relaxed);
    if let Some(goal) = event.get_component::<Goal>() {
        LAST_SCORER.with(|s| s.set(goal.scorer));
    }
}

#[tidings::subscriber(event = "GoalScored", name = "DefaultPriority")]
fn on_goal_default(_event: &Event) {}

#[test]
fn test_subscriber_constants() {
    assert_eq!(on_goal::EVENT, "GoalScored");
    assert_eq!(on_goal::PRIORITY, 10);
    assert_eq!(DefaultPriority::PRIORITY, priority::NORMAL);
}

#[test]
fn test_subscriber_register_and_remove() {
    let dispatcher = Dispatcher::new();
    let key = on_goal::register(&dispatcher);
    DefaultPriority::register(&dispatcher);
    assert_eq!(dispatcher.handler_count("GoalScored"), 2);

    let before = GOALS.load(Ordering::Relaxed);
    let mut event = Event::new("GoalScored", priority::NORMAL);
    event.add_component(|_| Goal { scorer: 11 });
    dispatcher.push_event(event);
    dispatcher.process_events().unwrap();

    assert_eq!(GOALS.load(Ordering::Relaxed), before + 1);
    assert_eq!(LAST_SCORER.with(Cell::get), 11);

    dispatcher.remove_handler(on_goal::EVENT, key);
    assert_eq!(dispatcher.handler_count("GoalScored"), 1);
}
