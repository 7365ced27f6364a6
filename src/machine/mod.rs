//! Resolution of the current state and relational queries.
//!
//! [`TimeMachine`] owns its states and the reference instant. `set_instant`
//! is the only mutator; every query is a pure function of the states and
//! that instant.

mod time_machine;

pub use time_machine::TimeMachine;
