//! Named half-open time windows.
//!
//! A [`TemporalState`] is the leaf value of the crate: a name plus an
//! interval `[begin, end)` where either end may be unbounded. States are
//! immutable once built.

use super::clock::{Clock, SystemClock};
use crate::error::{Result, TimeMachineError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named time window `[begin, end)`.
///
/// `begin` is inclusive and `end` is exclusive. A missing `begin` means the
/// window reaches back indefinitely; a missing `end` means it never closes.
/// When both bounds are set and equal the window is empty and is active for
/// no instant.
///
/// # Example
///
/// ```rust
/// use time_machine::core::TemporalState;
/// use chrono::{TimeZone, Utc};
///
/// let launch = Utc.with_ymd_and_hms(2019, 1, 1, 1, 0, 0).unwrap();
/// let sunset = Utc.with_ymd_and_hms(2019, 1, 1, 2, 0, 0).unwrap();
///
/// let state = TemporalState::new("launch-week", Some(launch), Some(sunset)).unwrap();
///
/// assert!(state.is_active(launch));
/// assert!(!state.is_active(sunset));
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
#[serde(try_from = "RawTemporalState")]
pub struct TemporalState {
    name: String,
    begin: Option<DateTime<Utc>>,
    end: Option<DateTime<Utc>>,
}

impl TemporalState {
    /// Create a state, rejecting windows that end before they begin.
    pub fn new(
        name: impl Into<String>,
        begin: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        let name = name.into();

        if let (Some(begin), Some(end)) = (begin, end) {
            if begin > end {
                return Err(TimeMachineError::InvalidInterval { name, begin, end });
            }
        }

        Ok(Self { name, begin, end })
    }

    /// The state's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Inclusive lower bound, `None` when unbounded.
    pub fn begin(&self) -> Option<DateTime<Utc>> {
        self.begin
    }

    /// Exclusive upper bound, `None` when unbounded.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    /// Check whether `instant` falls inside `[begin, end)`.
    ///
    /// Bounds and instant are compared as whole epoch seconds; the
    /// sub-second part of either side is ignored.
    pub fn is_active(&self, instant: DateTime<Utc>) -> bool {
        self.has_begun(instant) && !self.has_ended(instant)
    }

    /// Whether `instant` is at or past the lower bound.
    ///
    /// Always true for a state without a lower bound.
    pub fn has_begun(&self, instant: DateTime<Utc>) -> bool {
        self.begin
            .map_or(true, |begin| begin.timestamp() <= instant.timestamp())
    }

    /// Whether `instant` is at or past the upper bound.
    ///
    /// Always false for a state without an upper bound.
    pub fn has_ended(&self, instant: DateTime<Utc>) -> bool {
        self.end
            .is_some_and(|end| instant.timestamp() >= end.timestamp())
    }

    /// Check the state against the system clock.
    pub fn is_active_now(&self) -> bool {
        self.is_active(SystemClock.now())
    }
}

impl fmt::Display for TemporalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [", self.name)?;
        match self.begin {
            Some(begin) => write!(f, "{}", begin.to_rfc3339())?,
            None => f.write_str("-inf")?,
        }
        f.write_str(", ")?;
        match self.end {
            Some(end) => write!(f, "{}", end.to_rfc3339())?,
            None => f.write_str("+inf")?,
        }
        f.write_str(")")
    }
}

/// Unchecked wire form; converted through [`TemporalState::new`].
#[derive(Deserialize)]
struct RawTemporalState {
    name: String,
    #[serde(default)]
    begin: Option<DateTime<Utc>>,
    #[serde(default)]
    end: Option<DateTime<Utc>>,
}

impl TryFrom<RawTemporalState> for TemporalState {
    type Error = TimeMachineError;

    fn try_from(raw: RawTemporalState) -> Result<Self> {
        Self::new(raw.name, raw.begin, raw.end)
    }
}
