//! Logged workout sessions.

use chrono::{Duration, NaiveDate};

use super::activity::ActivityType;
use crate::error::{TrackerError, TrackerResult};

const NON_POSITIVE_DURATION: &str = "Workout duration must be positive.";

/// One logged exercise session.
///
/// Calories are derived on every read from the activity rate and the
/// duration, so they can never go stale after a mutation.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    /// What was done
    activity_type: ActivityType,
    /// How long it lasted, at least one whole minute
    duration: Duration,
    /// Day the workout took place
    date: NaiveDate,
}

impl Workout {
    /// Create a workout, rejecting a duration shorter than one minute.
    pub fn new(
        activity_type: ActivityType,
        duration: Duration,
        date: NaiveDate,
    ) -> TrackerResult<Self> {
        validate_duration(duration)?;

        Ok(Self {
            activity_type,
            duration,
            date,
        })
    }

    /// Get activity type.
    pub fn activity_type(&self) -> ActivityType {
        self.activity_type
    }

    /// Get the exact duration, before truncation to minutes.
    pub fn duration(&self) -> Duration {
        self.duration
    }

    /// Get workout date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Duration truncated to whole minutes.
    pub fn total_minutes(&self) -> i64 {
        self.duration.num_minutes()
    }

    /// Calories burned over the whole session.
    pub fn calories_burned(&self) -> f64 {
        self.activity_type.calories_per_minute() * self.total_minutes() as f64
    }

    /// Change the activity; calories follow the new rate.
    pub fn set_activity_type(&mut self, activity_type: ActivityType) {
        self.activity_type = activity_type;
    }

    /// Replace the duration. The workout is untouched when validation fails.
    pub fn set_duration(&mut self, duration: Duration) -> TrackerResult<()> {
        validate_duration(duration)?;
        self.duration = duration;
        Ok(())
    }

    pub fn set_date(&mut self, date: NaiveDate) {
        self.date = date;
    }
}

/// Durations count in whole minutes, so anything under one is not positive.
fn validate_duration(duration: Duration) -> TrackerResult<()> {
    if duration.num_minutes() < 1 {
        return Err(TrackerError::invalid_argument(NON_POSITIVE_DURATION));
    }
    Ok(())
}

impl std::fmt::Display for Workout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Activity: {}, Duration: {} minutes, Date: {}, Calories Burned: {:.2}",
            self.activity_type,
            self.total_minutes(),
            self.date,
            self.calories_burned()
        )
    }
}
