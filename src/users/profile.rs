//! User aggregate.
//!
//! A user owns its workouts and goals. Both collections are append-only, so
//! the index a caller sees for an entry stays valid for the whole session.

use chrono::{Local, NaiveDate};

use crate::error::{TrackerError, TrackerResult};
use crate::goals::Goal;
use crate::workouts::{ActivityType, Workout};

/// A tracker user with their logged workouts and goals.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    /// Display name
    name: String,
    /// Unique identifier within the registry
    user_id: String,
    /// Logged workouts, in log order
    workouts: Vec<Workout>,
    /// Goals, in the order they were set
    goals: Vec<Goal>,
}

impl User {
    /// Create a user with no workouts or goals.
    pub fn new(name: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            user_id: user_id.into(),
            workouts: Vec::new(),
            goals: Vec::new(),
        }
    }

    /// Get display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get user identifier.
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Append a workout; its index is the previous workout count.
    pub fn add_workout(&mut self, workout: Workout) {
        self.workouts.push(workout);
    }

    /// Append a goal; its index is the previous goal count.
    pub fn add_goal(&mut self, goal: Goal) {
        self.goals.push(goal);
    }

    /// Workouts in the order they were logged.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Goals in the order they were set.
    pub fn goals(&self) -> &[Goal] {
        &self.goals
    }

    /// Workouts of one activity, in log order.
    pub fn workouts_of(&self, activity: ActivityType) -> impl Iterator<Item = &Workout> {
        self.workouts
            .iter()
            .filter(move |workout| workout.activity_type() == activity)
    }

    /// Total whole minutes spent on an activity.
    pub fn total_minutes(&self, activity: ActivityType) -> i64 {
        self.workouts_of(activity).map(Workout::total_minutes).sum()
    }

    /// Total calories burned on an activity.
    pub fn total_calories(&self, activity: ActivityType) -> f64 {
        self.workouts_of(activity).map(Workout::calories_burned).sum()
    }

    /// Goals still active as of the local calendar date.
    pub fn active_goals(&self) -> Vec<&Goal> {
        self.active_goals_on(Local::now().date_naive())
    }

    /// Goals still active on `today`, in the order they were set.
    pub fn active_goals_on(&self, today: NaiveDate) -> Vec<&Goal> {
        self.goals
            .iter()
            .filter(|goal| goal.is_active_on(today))
            .collect()
    }

    pub fn workout_at(&self, index: usize) -> TrackerResult<&Workout> {
        let len = self.workouts.len();
        self.workouts
            .get(index)
            .ok_or_else(|| out_of_range("workout", index, len))
    }

    pub fn workout_at_mut(&mut self, index: usize) -> TrackerResult<&mut Workout> {
        let len = self.workouts.len();
        self.workouts
            .get_mut(index)
            .ok_or_else(|| out_of_range("workout", index, len))
    }

    pub fn goal_at(&self, index: usize) -> TrackerResult<&Goal> {
        let len = self.goals.len();
        self.goals
            .get(index)
            .ok_or_else(|| out_of_range("goal", index, len))
    }

    pub fn goal_at_mut(&mut self, index: usize) -> TrackerResult<&mut Goal> {
        let len = self.goals.len();
        self.goals
            .get_mut(index)
            .ok_or_else(|| out_of_range("goal", index, len))
    }
}

fn out_of_range(collection: &'static str, index: usize, len: usize) -> TrackerError {
    TrackerError::IndexOutOfRange {
        collection,
        index: i64::try_from(index).unwrap_or(i64::MAX),
        len,
    }
}
