//! Builder for constructing time machines.

use crate::core::{Clock, SystemClock, TemporalState};
use crate::error::Result;
use crate::machine::TimeMachine;
use chrono::{DateTime, Utc};

/// Builder for constructing time machines with a fluent API.
///
/// # Example
///
/// ```rust
/// use time_machine::builder::TimeMachineBuilder;
/// use time_machine::core::FixedClock;
/// use chrono::{TimeZone, Utc};
///
/// let cutover = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
///
/// let machine = TimeMachineBuilder::new()
///     .state("preview", None, Some(cutover))?
///     .state("general-availability", Some(cutover), None)?
///     .clock(FixedClock::new(cutover))
///     .build()?;
///
/// assert!(machine.is_state("general-availability")?);
/// # Ok::<(), time_machine::TimeMachineError>(())
/// ```
#[derive(Clone, Debug)]
pub struct TimeMachineBuilder<C: Clock = SystemClock> {
    states: Vec<TemporalState>,
    instant: Option<DateTime<Utc>>,
    clock: C,
}

impl TimeMachineBuilder<SystemClock> {
    /// Create a new builder using the system clock.
    pub fn new() -> Self {
        Self {
            states: Vec::new(),
            instant: None,
            clock: SystemClock,
        }
    }
}

impl<C: Clock> TimeMachineBuilder<C> {
    /// Add a state from its parts.
    /// Returns an error if the window ends before it begins.
    pub fn state(
        mut self,
        name: impl Into<String>,
        begin: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        self.states.push(TemporalState::new(name, begin, end)?);
        Ok(self)
    }

    /// Add a pre-built state.
    pub fn add_state(mut self, state: TemporalState) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = TemporalState>) -> Self {
        self.states.extend(states);
        self
    }

    /// Set the initial reference instant. Defaults to the clock's "now".
    pub fn at(mut self, instant: DateTime<Utc>) -> Self {
        self.instant = Some(instant);
        self
    }

    /// Replace the clock used for "now".
    pub fn clock<D: Clock>(self, clock: D) -> TimeMachineBuilder<D> {
        TimeMachineBuilder {
            states: self.states,
            instant: self.instant,
            clock,
        }
    }

    /// Build the time machine.
    /// Returns an error if no state was added.
    pub fn build(self) -> Result<TimeMachine<C>> {
        TimeMachine::with_clock(self.states, self.instant, self.clock)
    }
}

impl Default for TimeMachineBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}
