//! Builder API for ergonomic time machine construction.

pub mod machine;

pub use machine::TimeMachineBuilder;
