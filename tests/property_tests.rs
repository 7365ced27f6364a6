//! Property-based tests for states and machine resolution.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated windows and instants.

use chrono::{DateTime, TimeZone, Utc};
use proptest::prelude::*;
use time_machine::{TemporalState, TimeMachine, TimeMachineError};

// Roughly 1970..2100 in seconds.
const MAX_SECS: i64 = 4_102_444_800;

fn instant(secs: i64) -> DateTime<Utc> {
    Utc.timestamp_opt(secs, 0).unwrap()
}

prop_compose! {
    fn arbitrary_instant()(secs in 0..MAX_SECS) -> DateTime<Utc> {
        instant(secs)
    }
}

prop_compose! {
    fn arbitrary_bound()(secs in prop::option::of(0..MAX_SECS)) -> Option<DateTime<Utc>> {
        secs.map(instant)
    }
}

prop_compose! {
    fn arbitrary_state(name: &'static str)(a in arbitrary_bound(), b in arbitrary_bound())
        -> TemporalState
    {
        let (begin, end) = match (a, b) {
            (Some(a), Some(b)) if a > b => (Some(b), Some(a)),
            other => other,
        };
        TemporalState::new(name, begin, end).unwrap()
    }
}

proptest! {
    #[test]
    fn instants_before_begin_are_inactive(state in arbitrary_state("s"), t in arbitrary_instant()) {
        if let Some(begin) = state.begin() {
            if t < begin {
                prop_assert!(!state.is_active(t));
            }
        }
    }

    #[test]
    fn begin_is_inclusive_and_end_exclusive(state in arbitrary_state("s")) {
        if let Some(end) = state.end() {
            prop_assert!(!state.is_active(end));
        }
        if let Some(begin) = state.begin() {
            let zero_width = state.end() == Some(begin);
            prop_assert_eq!(state.is_active(begin), !zero_width);
        }
    }

    #[test]
    fn unbounded_state_is_always_active(t in arbitrary_instant()) {
        let state = TemporalState::new("forever", None, None).unwrap();
        prop_assert!(state.is_active(t));
    }

    #[test]
    fn reversed_bounds_always_fail(a in 0..MAX_SECS, b in 0..MAX_SECS) {
        prop_assume!(a != b);
        let (lo, hi) = (a.min(b), a.max(b));
        let result = TemporalState::new("s", Some(instant(hi)), Some(instant(lo)));
        let is_invalid_interval = matches!(result, Err(TimeMachineError::InvalidInterval { .. }));
        prop_assert!(is_invalid_interval);
    }

    #[test]
    fn zero_width_state_is_never_active(at in 0..MAX_SECS, t in arbitrary_instant()) {
        let state = TemporalState::new("blink", Some(instant(at)), Some(instant(at))).unwrap();
        prop_assert!(!state.is_active(t));
    }

    #[test]
    fn current_state_is_first_active(
        a in arbitrary_state("a"),
        b in arbitrary_state("b"),
        c in arbitrary_state("c"),
        t in arbitrary_instant(),
    ) {
        let states = vec![a, b, c];
        let expected = states.iter().find(|s| s.is_active(t)).map(|s| s.name().to_string());

        let machine = TimeMachine::new(states, Some(t)).unwrap();
        let current = machine.current_state().map(|s| s.name().to_string());

        prop_assert_eq!(current, expected);
        if let Some(state) = machine.current_state() {
            prop_assert!(state.is_active(machine.current_instant()));
            prop_assert!(machine.is_state(state.name()).unwrap());
        }
    }

    #[test]
    fn set_instant_is_idempotent(
        a in arbitrary_state("a"),
        b in arbitrary_state("b"),
        t in arbitrary_instant(),
    ) {
        let mut machine = TimeMachine::new(vec![a, b], Some(t)).unwrap();
        let snapshot = |m: &TimeMachine| {
            (
                m.current_state().cloned(),
                m.is_before("a").unwrap(),
                m.is_after("b").unwrap(),
                m.is_in_interval("a", "b").unwrap(),
            )
        };

        machine.set_instant(Some(t));
        let first = snapshot(&machine);
        machine.set_instant(Some(t));
        let second = snapshot(&machine);

        prop_assert_eq!(first, second);
    }

    #[test]
    fn in_interval_of_a_state_with_itself_is_membership(
        state in arbitrary_state("s"),
        t in arbitrary_instant(),
    ) {
        let expected = state.is_active(t);
        let machine = TimeMachine::new(vec![state], Some(t)).unwrap();

        prop_assert_eq!(machine.is_in_interval("s", "s").unwrap(), expected);
    }

    #[test]
    fn before_and_after_exclude_activity(state in arbitrary_state("s"), t in arbitrary_instant()) {
        let machine = TimeMachine::new(vec![state], Some(t)).unwrap();

        if machine.is_before("s").unwrap() || machine.is_after("s").unwrap() {
            prop_assert!(machine.current_state().is_none());
        }
    }

    #[test]
    fn state_roundtrip_serialization(state in arbitrary_state("s")) {
        let json = serde_json::to_string(&state).unwrap();
        let deserialized: TemporalState = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(state, deserialized);
    }
}
