//! Time Machine: which named calendar window are we in?
//!
//! A [`TimeMachine`] holds an ordered set of named, half-open time windows
//! ([`TemporalState`]) and a reference instant. It resolves which window is
//! active at that instant and answers relational questions such as "are we
//! past the launch window yet?". Typical uses are feature flags, pricing
//! tiers and campaign phases gated by calendar time.
//!
//! # Core Concepts
//!
//! - **State**: a named window `[begin, end)` where either end may be open
//! - **Machine**: ordered states plus a reference instant; the first state
//!   containing the instant is current
//! - **Clock**: where "now" comes from when no instant is given
//!
//! # Example
//!
//! ```rust
//! use time_machine::{TemporalState, TimeMachine};
//! use chrono::{TimeZone, Utc};
//!
//! let opens = Utc.with_ymd_and_hms(2019, 1, 1, 1, 0, 0).unwrap();
//! let closes = Utc.with_ymd_and_hms(2019, 1, 2, 1, 0, 0).unwrap();
//!
//! let mut machine = TimeMachine::new(
//!     vec![
//!         TemporalState::new("teaser", None, Some(opens))?,
//!         TemporalState::new("sale", Some(opens), Some(closes))?,
//!         TemporalState::new("archive", Some(closes), None)?,
//!     ],
//!     Some(Utc.with_ymd_and_hms(2019, 1, 1, 12, 0, 0).unwrap()),
//! )?;
//!
//! assert!(machine.is_state("sale")?);
//! assert!(machine.is_after("teaser")?);
//! assert!(machine.is_before("archive")?);
//! assert!(machine.is_in_interval("teaser", "sale")?);
//!
//! machine.set_instant(Some(closes));
//! assert!(machine.is_state("archive")?);
//! # Ok::<(), time_machine::TimeMachineError>(())
//! ```

pub mod builder;
pub mod core;
pub mod error;
pub mod machine;

// Re-export commonly used types
pub use builder::TimeMachineBuilder;
pub use crate::core::{Clock, FixedClock, SystemClock, TemporalState};
pub use error::{Result, TimeMachineError};
pub use machine::TimeMachine;
