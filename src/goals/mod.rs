//! Training goals module.
//!
//! Goals track a target value over a date range. Progress is reported by the
//! caller; it is never derived from logged workouts.

pub mod types;

pub use types::Goal;
