//! Errors raised by temporal states and the time machine.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur when building states and querying a machine.
///
/// Every variant signals a caller mistake (bad configuration or a bad
/// query), never a transient failure, so none of them are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeMachineError {
    /// A state's lower bound lies strictly after its upper bound.
    #[error("State '{name}' must begin before it ends (begin {begin}, end {end})")]
    InvalidInterval {
        name: String,
        begin: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("No states provided. A time machine needs at least one state")]
    EmptyStateSet,

    /// A query named a state the machine does not hold.
    #[error("Unknown state '{name}'")]
    UnknownState { name: String },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, TimeMachineError>;
