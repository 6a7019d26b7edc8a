//! Session state and command dispatch.

use chrono::NaiveDate;
use thiserror::Error;

use super::commands::{Command, CommandKind};
use crate::error::TrackerError;
use crate::goals::Goal;
use crate::users::{User, UserRegistry};
use crate::workouts::Workout;

const GOAL_SEPARATOR: &str = "----------------------------";

/// Result of a successfully executed command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Show the message and keep reading commands
    Continue(String),
    /// Show the message and end the session
    Exit(String),
}

impl Outcome {
    pub fn message(&self) -> &str {
        match self {
            Outcome::Continue(message) | Outcome::Exit(message) => message,
        }
    }

    pub fn is_exit(&self) -> bool {
        matches!(self, Outcome::Exit(_))
    }
}

/// Errors reported back to the console. None of them end the session.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SessionError {
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    #[error("Please log in or create a user before using the tracker.")]
    NotLoggedIn,

    #[error("No users found. Please create a user first.")]
    NoUsers,

    #[error("User ID not found. Please try again or create a new user.")]
    UnknownUser(String),

    #[error("Usage: {0}")]
    Usage(String),

    #[error("Invalid {field}: {value}. Please enter a valid number.")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Invalid date format: {0}. Please enter YYYY-MM-DD.")]
    InvalidDate(String),
}

/// State of one tracker session: the known users and who is logged in.
#[derive(Debug, Default)]
pub struct Session {
    users: UserRegistry,
    current_user_id: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &UserRegistry {
        &self.users
    }

    pub fn current_user(&self) -> Option<&User> {
        self.current_user_id
            .as_deref()
            .and_then(|user_id| self.users.get(user_id))
    }

    fn require_user(&self) -> Result<&User, SessionError> {
        self.current_user().ok_or(SessionError::NotLoggedIn)
    }

    fn current_user_mut(&mut self) -> Result<&mut User, SessionError> {
        let user_id = self
            .current_user_id
            .as_deref()
            .ok_or(SessionError::NotLoggedIn)?;
        self.users.get_mut(user_id).ok_or(SessionError::NotLoggedIn)
    }

    /// Register a user and log them in.
    pub fn create_user(&mut self, name: &str, user_id: &str) -> Result<&User, SessionError> {
        self.users.register(name, user_id)?;
        self.current_user_id = Some(user_id.to_string());
        tracing::info!(user_id, "user created");

        self.require_user()
    }

    /// Switch the current user.
    pub fn login(&mut self, user_id: &str) -> Result<&User, SessionError> {
        if self.users.is_empty() {
            return Err(SessionError::NoUsers);
        }
        if !self.users.contains(user_id) {
            return Err(SessionError::UnknownUser(user_id.to_string()));
        }

        self.current_user_id = Some(user_id.to_string());
        tracing::info!(user_id, "user logged in");

        self.require_user()
    }

    /// Check that `kind` can run right now, before any of its fields are
    /// collected.
    pub fn check_ready(&self, kind: CommandKind) -> Result<(), SessionError> {
        if kind == CommandKind::Login && self.users.is_empty() {
            return Err(SessionError::NoUsers);
        }
        if kind.requires_user() && self.current_user().is_none() {
            return Err(SessionError::NotLoggedIn);
        }
        Ok(())
    }

    /// Run one command. `today` is used for the active goal filter.
    pub fn execute(
        &mut self,
        command: Command,
        today: NaiveDate,
    ) -> Result<Outcome, SessionError> {
        let kind = command.kind();
        tracing::debug!(command = kind.name(), "executing command");

        let result = self.dispatch(command, today);
        if let Err(err) = &result {
            tracing::warn!(command = kind.name(), error = %err, "command rejected");
        }
        result
    }

    fn dispatch(&mut self, command: Command, today: NaiveDate) -> Result<Outcome, SessionError> {
        self.check_ready(command.kind())?;

        let message = match command {
            Command::Exit => return Ok(Outcome::Exit("Exiting Fitness Tracker. Goodbye!".into())),

            Command::Login { user_id } => {
                let user = self.login(&user_id)?;
                format!("Login successful. Welcome, {}!", user.name())
            }

            Command::CreateUser { name, user_id } => {
                let user = self.create_user(&name, &user_id)?;
                format!("User created successfully! Logged in as {}.", user.name())
            }

            Command::LogWorkout {
                activity,
                duration,
                date,
            } => {
                let workout = Workout::new(activity, duration, date)?;
                let message = format!("Workout logged successfully: {workout}");
                self.current_user_mut()?.add_workout(workout);
                message
            }

            Command::Track { activity } => {
                let user = self.require_user()?;
                format!(
                    "Progress for {}:\n  Total Duration: {} minutes\n  Total Calories Burned: {:.2}",
                    activity,
                    user.total_minutes(activity),
                    user.total_calories(activity)
                )
            }

            Command::SetGoal {
                title,
                target_value,
                start_date,
                end_date,
            } => {
                let goal = Goal::new(title, target_value, start_date, end_date)?;
                let message = format!("Goal set successfully: {goal}");
                self.current_user_mut()?.add_goal(goal);
                message
            }

            Command::UpdateGoalTitle { index, title } => {
                let user = self.current_user_mut()?;
                let index = resolve_index("goal", index, user.goals().len())?;
                user.goal_at_mut(index)?.rename(title)?;
                "Updated goal title successfully.".to_string()
            }

            Command::UpdateActivity { index, activity } => {
                let user = self.current_user_mut()?;
                let index = resolve_index("workout", index, user.workouts().len())?;
                user.workout_at_mut(index)?.set_activity_type(activity);
                "Updated workout activity type successfully.".to_string()
            }

            Command::UpdateDuration { index, duration } => {
                let user = self.current_user_mut()?;
                let index = resolve_index("workout", index, user.workouts().len())?;
                user.workout_at_mut(index)?.set_duration(duration)?;
                "Updated workout duration successfully.".to_string()
            }

            Command::UpdateProgress { index, delta } => {
                let user = self.current_user_mut()?;
                let index = resolve_index("goal", index, user.goals().len())?;
                let goal = user.goal_at_mut(index)?;
                goal.update_progress(delta);
                format!(
                    "Updated goal progress successfully: {:.2} of {:.2} (Achieved: {})",
                    goal.current_value(),
                    goal.target_value(),
                    goal.is_achieved()
                )
            }

            Command::ViewGoals => {
                let user = self.require_user()?;
                render_active_goals(&user.active_goals_on(today))
            }

            Command::ViewWorkouts => {
                let user = self.require_user()?;
                render_workouts(user.workouts())
            }

            Command::ViewUser => {
                let user = self.require_user()?;
                format!("User Name: {}\nUser ID: {}", user.name(), user.user_id())
            }
        };

        Ok(Outcome::Continue(message))
    }
}

/// Convert a raw index from the console, rejecting negatives the same way
/// as an index past the end.
fn resolve_index(collection: &'static str, index: i64, len: usize) -> Result<usize, TrackerError> {
    usize::try_from(index).map_err(|_| TrackerError::IndexOutOfRange {
        collection,
        index,
        len,
    })
}

fn render_active_goals(goals: &[&Goal]) -> String {
    if goals.is_empty() {
        return "No active goals.".to_string();
    }

    let mut lines = vec!["Your Active Goals:".to_string()];
    for goal in goals {
        lines.push(format!("Title: {}", goal.title()));
        lines.push(format!("Target: {:.2}", goal.target_value()));
        lines.push(format!("Current: {:.2}", goal.current_value()));
        lines.push(format!("Start: {}", goal.start_date()));
        lines.push(format!("End: {}", goal.end_date()));
        lines.push(format!("Achieved: {}", goal.is_achieved()));
        lines.push(GOAL_SEPARATOR.to_string());
    }
    lines.join("\n")
}

fn render_workouts(workouts: &[Workout]) -> String {
    if workouts.is_empty() {
        return "No workouts logged yet.".to_string();
    }

    std::iter::once("Your Logged Workouts:".to_string())
        .chain(workouts.iter().map(Workout::to_string))
        .collect::<Vec<_>>()
        .join("\n")
}
