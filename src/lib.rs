//! FitTrack - command line fitness tracker
//!
//! Records workouts, derives calories burned from the activity type and
//! duration, and tracks progress towards time-bounded goals.
//!
//! The domain model (`workouts`, `goals`, `users`) is pure in-memory logic
//! with no I/O. The `session` module drives it from text commands.

pub mod config;
pub mod error;
pub mod goals;
pub mod session;
pub mod users;
pub mod workouts;

// Re-export commonly used types
pub use error::{TrackerError, TrackerResult};
pub use goals::Goal;
pub use session::{Console, Session};
pub use users::{User, UserRegistry};
pub use workouts::{ActivityType, Workout};
