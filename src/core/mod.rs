//! Leaf types: time windows and clocks.
//!
//! Everything in this module is pure. Membership tests take an explicit
//! instant; only [`SystemClock`] touches the operating system.

mod clock;
mod state;

pub use clock::{Clock, FixedClock, SystemClock};
pub use state::TemporalState;
