//! Workout module: the activity catalog and logged sessions.

pub mod activity;
pub mod types;

pub use activity::ActivityType;
pub use types::Workout;
