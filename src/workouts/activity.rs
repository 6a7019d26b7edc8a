//! Activity catalog.
//!
//! The set of activities is closed; each carries a fixed calorie burn rate.

use std::str::FromStr;

use crate::error::{TrackerError, TrackerResult};

/// Kind of exercise a workout records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityType {
    /// 10 kcal per minute
    Running,
    /// 7 kcal per minute
    Weightlifting,
    /// 8 kcal per minute
    Cycling,
}

impl ActivityType {
    /// Every activity, in catalog order.
    pub const ALL: [ActivityType; 3] = [
        ActivityType::Running,
        ActivityType::Weightlifting,
        ActivityType::Cycling,
    ];

    /// Get display name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ActivityType::Running => "Running",
            ActivityType::Weightlifting => "Weightlifting",
            ActivityType::Cycling => "Cycling",
        }
    }

    /// Calories burned per minute of this activity.
    pub fn calories_per_minute(&self) -> f64 {
        match self {
            ActivityType::Running => 10.0,
            ActivityType::Weightlifting => 7.0,
            ActivityType::Cycling => 8.0,
        }
    }

    /// Find an activity by display name, ignoring case.
    pub fn lookup(name: &str) -> TrackerResult<Self> {
        Self::ALL
            .into_iter()
            .find(|activity| activity.display_name().eq_ignore_ascii_case(name))
            .ok_or_else(|| TrackerError::InvalidActivityType {
                name: name.to_string(),
                choices: Self::choices(),
            })
    }

    /// Comma separated display names, e.g. for prompts.
    pub fn choices() -> String {
        Self::ALL
            .iter()
            .map(|activity| activity.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl FromStr for ActivityType {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::lookup(s)
    }
}

impl std::fmt::Display for ActivityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
