//! Goal type definitions.
//!
//! A goal is a target value to reach over a date range. Progress is fed in
//! explicitly; nothing here looks at logged workouts.

use chrono::NaiveDate;

use crate::error::{TrackerError, TrackerResult};

/// A target a user is working towards.
#[derive(Debug, Clone, PartialEq)]
pub struct Goal {
    /// Display title, never blank
    title: String,
    /// Value to reach, always positive
    target_value: f64,
    /// Progress so far
    current_value: f64,
    /// First day of the goal period
    start_date: NaiveDate,
    /// Last day of the goal period
    end_date: NaiveDate,
}

impl Goal {
    /// Create a goal with no progress yet.
    pub fn new(
        title: impl Into<String>,
        target_value: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> TrackerResult<Self> {
        let title = title.into();
        validate_title(&title)?;

        // Written this way round so NaN is rejected too
        if !(target_value > 0.0) {
            return Err(TrackerError::invalid_argument(
                "Target value must be positive.",
            ));
        }

        if start_date > end_date {
            return Err(TrackerError::invalid_argument(
                "Start date cannot be after end date.",
            ));
        }

        Ok(Self {
            title,
            target_value,
            current_value: 0.0,
            start_date,
            end_date,
        })
    }

    /// Get goal title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get target value.
    pub fn target_value(&self) -> f64 {
        self.target_value
    }

    /// Get current progress value.
    pub fn current_value(&self) -> f64 {
        self.current_value
    }

    /// Get start of the goal period.
    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Get end of the goal period.
    pub fn end_date(&self) -> NaiveDate {
        self.end_date
    }

    /// Replace the title.
    pub fn rename(&mut self, title: impl Into<String>) -> TrackerResult<()> {
        let title = title.into();
        validate_title(&title)?;
        self.title = title;
        Ok(())
    }

    /// Add to the current value. Any delta is accepted, including after the
    /// goal has been achieved.
    pub fn update_progress(&mut self, delta: f64) {
        self.current_value += delta;
    }

    /// Whether the current value has reached the target.
    pub fn is_achieved(&self) -> bool {
        self.current_value >= self.target_value
    }

    /// Whether the goal is still running on `today`.
    ///
    /// Only the end date is checked: a goal that has not started yet still
    /// counts as active.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        today < self.end_date
    }

    /// Amount still needed to hit the target (0 once achieved).
    pub fn remaining(&self) -> f64 {
        (self.target_value - self.current_value).max(0.0)
    }

    /// Get progress percentage (0-100).
    pub fn progress_percent(&self) -> f64 {
        (self.current_value / self.target_value * 100.0).clamp(0.0, 100.0)
    }
}

fn validate_title(title: &str) -> TrackerResult<()> {
    if title.trim().is_empty() {
        return Err(TrackerError::invalid_argument("Goal title cannot be empty."));
    }
    Ok(())
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Goal Title: {}, Target: {:.2}, Current: {:.2}, Achieved: {}, Period: {} to {}",
            self.title,
            self.target_value,
            self.current_value,
            self.is_achieved(),
            self.start_date,
            self.end_date
        )
    }
}
