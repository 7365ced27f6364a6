//! Time machine that resolves the active state for a reference instant.

use crate::core::{Clock, SystemClock, TemporalState};
use crate::error::{Result, TimeMachineError};
use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use log::debug;

/// Ordered set of named windows plus a reference instant.
///
/// The current state is the first state, in construction order, whose
/// window contains the reference instant. Overlapping windows are allowed
/// but only the earliest one can ever be current; callers wanting a unique
/// answer must supply disjoint windows.
///
/// # Example
///
/// ```rust
/// use time_machine::{TemporalState, TimeMachine};
/// use chrono::{TimeZone, Utc};
///
/// let cutover = Utc.with_ymd_and_hms(2019, 1, 1, 1, 0, 0).unwrap();
///
/// let mut machine = TimeMachine::new(
///     vec![
///         TemporalState::new("early-bird", None, Some(cutover)).unwrap(),
///         TemporalState::new("regular", Some(cutover), None).unwrap(),
///     ],
///     Some(cutover),
/// )
/// .unwrap();
///
/// assert!(machine.is_state("regular").unwrap());
/// assert!(machine.is_after("early-bird").unwrap());
///
/// machine.set_instant(Some(Utc.with_ymd_and_hms(2018, 12, 31, 0, 0, 0).unwrap()));
/// assert_eq!(machine.current_state().map(|s| s.name()), Some("early-bird"));
/// ```
#[derive(Clone, Debug)]
pub struct TimeMachine<C: Clock = SystemClock> {
    states: IndexMap<String, TemporalState>,
    current_instant: DateTime<Utc>,
    current: Option<usize>,
    clock: C,
}

impl TimeMachine<SystemClock> {
    /// Create a machine reading "now" from the system clock.
    ///
    /// When `instant` is `None` the machine starts at the current wall-clock
    /// time.
    pub fn new(
        states: impl IntoIterator<Item = TemporalState>,
        instant: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        Self::with_clock(states, instant, SystemClock)
    }
}

impl<C: Clock> TimeMachine<C> {
    /// Create a machine that asks `clock` whenever no instant is given.
    ///
    /// States keep the order they are supplied in. A repeated name replaces
    /// the earlier state's window but keeps the earlier state's position.
    pub fn with_clock(
        states: impl IntoIterator<Item = TemporalState>,
        instant: Option<DateTime<Utc>>,
        clock: C,
    ) -> Result<Self> {
        let mut by_name = IndexMap::new();
        for state in states {
            let name = state.name().to_string();
            if let Some(previous) = by_name.insert(name, state) {
                debug!("State '{}' redefined, replacing {}", previous.name(), previous);
            }
        }

        if by_name.is_empty() {
            return Err(TimeMachineError::EmptyStateSet);
        }

        let instant = instant.unwrap_or_else(|| clock.now());
        let mut machine = Self {
            states: by_name,
            current_instant: instant,
            current: None,
            clock,
        };
        machine.set_instant(Some(instant));

        Ok(machine)
    }

    /// Move the reference instant and recompute the current state.
    ///
    /// `None` means "now" according to the machine's clock.
    pub fn set_instant(&mut self, instant: Option<DateTime<Utc>>) {
        let instant = instant.unwrap_or_else(|| self.clock.now());
        let current = resolve(&self.states, instant);

        match current.and_then(|index| self.states.get_index(index)) {
            Some((name, _)) => debug!("Instant {} resolves to state '{}'", instant, name),
            None => debug!("Instant {} falls outside every state", instant),
        }

        self.current_instant = instant;
        self.current = current;
    }

    /// Reference instant all queries are evaluated against.
    pub fn current_instant(&self) -> DateTime<Utc> {
        self.current_instant
    }

    /// The active state, or `None` in a gap or outside every window.
    pub fn current_state(&self) -> Option<&TemporalState> {
        self.current
            .and_then(|index| self.states.get_index(index))
            .map(|(_, state)| state)
    }

    /// Look up a state by name.
    pub fn state(&self, name: &str) -> Result<&TemporalState> {
        self.lookup(name).map(|(_, state)| state)
    }

    /// Whether the named state is the current one.
    ///
    /// Compares identity within the machine, so two states with equal
    /// windows but different names are never confused.
    pub fn is_state(&self, name: &str) -> Result<bool> {
        let (index, _) = self.lookup(name)?;
        Ok(self.current == Some(index))
    }

    /// Whether the reference instant lies before the named state begins.
    ///
    /// Always false for a state without a lower bound.
    pub fn is_before(&self, name: &str) -> Result<bool> {
        let (_, state) = self.lookup(name)?;
        Ok(!state.has_begun(self.current_instant))
    }

    /// Whether the reference instant lies at or after the named state's end.
    ///
    /// Always false for a state without an upper bound.
    pub fn is_after(&self, name: &str) -> Result<bool> {
        let (_, state) = self.lookup(name)?;
        Ok(state.has_ended(self.current_instant))
    }

    /// Whether the reference instant lies in `[begin_state.begin, end_state.end)`.
    ///
    /// The window is stitched from two states: the lower bound comes from
    /// `begin_name` and the upper bound from `end_name`. Both names may refer
    /// to the same state.
    pub fn is_in_interval(&self, begin_name: &str, end_name: &str) -> Result<bool> {
        let (_, begin_state) = self.lookup(begin_name)?;
        let (_, end_state) = self.lookup(end_name)?;

        Ok(begin_state.has_begun(self.current_instant)
            && !end_state.has_ended(self.current_instant))
    }

    /// States in resolution order.
    pub fn states(&self) -> impl Iterator<Item = &TemporalState> {
        self.states.values()
    }

    /// Number of distinct state names.
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Pairs with [`len`](Self::len). Construction rejects an empty state
    /// set, so a built machine never reports empty.
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    /// Whether a state with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.states.contains_key(name)
    }

    /// Clock consulted when no explicit instant is given.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn lookup(&self, name: &str) -> Result<(usize, &TemporalState)> {
        self.states
            .get_full(name)
            .map(|(index, _, state)| (index, state))
            .ok_or_else(|| TimeMachineError::UnknownState {
                name: name.to_string(),
            })
    }
}

/// Index of the first state active at `instant` (pure).
fn resolve(states: &IndexMap<String, TemporalState>, instant: DateTime<Utc>) -> Option<usize> {
    states.values().position(|state| state.is_active(instant))
}
