//! Console commands and their arguments.
//!
//! A command is picked by menu number or name, then its fields are collected
//! either from interactive prompts or from the rest of a script line. Both
//! paths end in [`CommandKind::parse`], which turns raw strings into a typed
//! [`Command`].

use chrono::{Duration, NaiveDate};

use super::dispatcher::SessionError;
use crate::workouts::ActivityType;

/// The commands offered by the console, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Login,
    CreateUser,
    Log,
    Track,
    SetGoal,
    UpdateGoalTitle,
    UpdateActivity,
    ViewGoals,
    ViewWorkouts,
    ViewUser,
    UpdateDuration,
    UpdateProgress,
    Exit,
}

impl CommandKind {
    /// Every command, in menu order.
    pub const ALL: [CommandKind; 13] = [
        CommandKind::Login,
        CommandKind::CreateUser,
        CommandKind::Log,
        CommandKind::Track,
        CommandKind::SetGoal,
        CommandKind::UpdateGoalTitle,
        CommandKind::UpdateActivity,
        CommandKind::ViewGoals,
        CommandKind::ViewWorkouts,
        CommandKind::ViewUser,
        CommandKind::UpdateDuration,
        CommandKind::UpdateProgress,
        CommandKind::Exit,
    ];

    /// Name typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            CommandKind::Login => "login",
            CommandKind::CreateUser => "create-user",
            CommandKind::Log => "log",
            CommandKind::Track => "track",
            CommandKind::SetGoal => "set-goal",
            CommandKind::UpdateGoalTitle => "update-goal-title",
            CommandKind::UpdateActivity => "update-activity",
            CommandKind::ViewGoals => "view-goals",
            CommandKind::ViewWorkouts => "view-workouts",
            CommandKind::ViewUser => "view-user",
            CommandKind::UpdateDuration => "update-duration",
            CommandKind::UpdateProgress => "update-progress",
            CommandKind::Exit => "exit",
        }
    }

    /// One line help text for the menu.
    pub fn description(&self) -> &'static str {
        match self {
            CommandKind::Login => "Select an existing user.",
            CommandKind::CreateUser => "Create a new user profile.",
            CommandKind::Log => {
                "Record a completed workout (activity type, duration, and date)."
            }
            CommandKind::Track => {
                "View total progress for a specific activity (time spent & calories burned)."
            }
            CommandKind::SetGoal => "Set a fitness goal with a target value and a time period.",
            CommandKind::UpdateGoalTitle => "Change the name of an existing fitness goal.",
            CommandKind::UpdateActivity => "Update the activity type for a past workout.",
            CommandKind::ViewGoals => "Show the fitness goals that are still active.",
            CommandKind::ViewWorkouts => "List all workouts recorded.",
            CommandKind::ViewUser => "Show user profile details (name and ID).",
            CommandKind::UpdateDuration => "Change the duration of a past workout.",
            CommandKind::UpdateProgress => "Add progress towards an existing fitness goal.",
            CommandKind::Exit => "Quit the program.",
        }
    }

    /// Position in the menu, starting at 1.
    pub fn menu_number(&self) -> usize {
        Self::ALL
            .iter()
            .position(|kind| kind == self)
            .map_or(0, |index| index + 1)
    }

    /// Resolve a menu number or command name, ignoring case.
    pub fn from_input(input: &str) -> Option<Self> {
        let input = input.trim();

        if let Ok(number) = input.parse::<usize>() {
            return number
                .checked_sub(1)
                .and_then(|index| Self::ALL.get(index))
                .copied();
        }

        Self::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(input))
    }

    /// Whether a user must be logged in before the command runs.
    pub fn requires_user(&self) -> bool {
        !matches!(
            self,
            CommandKind::Login | CommandKind::CreateUser | CommandKind::Exit
        )
    }

    /// Fields collected for this command, in argument order.
    pub fn fields(&self) -> &'static [Field] {
        match self {
            CommandKind::Login => &[Field::UserId],
            CommandKind::CreateUser => &[Field::UserName, Field::NewUserId],
            CommandKind::Log => &[Field::Activity, Field::Minutes, Field::WorkoutDate],
            CommandKind::Track => &[Field::Activity],
            CommandKind::SetGoal => &[
                Field::GoalTitle,
                Field::TargetValue,
                Field::StartDate,
                Field::EndDate,
            ],
            CommandKind::UpdateGoalTitle => &[Field::GoalIndex, Field::GoalTitle],
            CommandKind::UpdateActivity => &[Field::WorkoutIndex, Field::Activity],
            CommandKind::UpdateDuration => &[Field::WorkoutIndex, Field::Minutes],
            CommandKind::UpdateProgress => &[Field::GoalIndex, Field::ProgressDelta],
            CommandKind::ViewGoals
            | CommandKind::ViewWorkouts
            | CommandKind::ViewUser
            | CommandKind::Exit => &[],
        }
    }

    /// Usage line, e.g. `log <activityType> <durationMinutes> [date]`.
    pub fn usage(&self) -> String {
        std::iter::once(self.name())
            .chain(self.fields().iter().map(Field::placeholder))
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn usage_error(&self) -> SessionError {
        SessionError::Usage(self.usage())
    }

    /// Group whitespace separated script tokens into one value per field.
    ///
    /// A free text field (a user name or goal title) absorbs any extra tokens,
    /// so `set-goal Weekly Minutes 300 2024-01-01 2024-12-31` keeps the title
    /// whole. A missing optional field comes back as an empty string.
    pub fn split_args(&self, tokens: &[&str]) -> Result<Vec<String>, SessionError> {
        let fields = self.fields();
        let required = fields.iter().filter(|field| !field.is_optional()).count();
        if tokens.len() < required {
            return Err(self.usage_error());
        }

        let extra = tokens.len().saturating_sub(fields.len());
        let text_at = fields.iter().position(Field::is_text);
        if extra > 0 && text_at.is_none() {
            return Err(self.usage_error());
        }

        let mut rest = tokens;
        let mut values = Vec::with_capacity(fields.len());
        for index in 0..fields.len() {
            let take = if Some(index) == text_at { 1 + extra } else { 1 };
            let (head, tail) = rest.split_at(take.min(rest.len()));
            values.push(head.join(" "));
            rest = tail;
        }

        Ok(values)
    }

    /// Build a typed command from one raw value per field.
    ///
    /// An empty workout date means `today`.
    pub fn parse(&self, values: &[String], today: NaiveDate) -> Result<Command, SessionError> {
        let value = |index: usize| values.get(index).map_or("", |v| v.trim());
        let required = |index: usize| {
            let v = value(index);
            if v.is_empty() {
                Err(self.usage_error())
            } else {
                Ok(v.to_string())
            }
        };

        let command = match self {
            CommandKind::Login => Command::Login {
                user_id: required(0)?,
            },
            CommandKind::CreateUser => Command::CreateUser {
                name: required(0)?,
                user_id: required(1)?,
            },
            CommandKind::Log => Command::LogWorkout {
                activity: ActivityType::lookup(&required(0)?)?,
                duration: parse_minutes(value(1))?,
                date: match value(2) {
                    "" => today,
                    raw => parse_date(raw)?,
                },
            },
            CommandKind::Track => Command::Track {
                activity: ActivityType::lookup(&required(0)?)?,
            },
            CommandKind::SetGoal => Command::SetGoal {
                title: required(0)?,
                target_value: parse_number("target value", value(1))?,
                start_date: parse_date(value(2))?,
                end_date: parse_date(value(3))?,
            },
            CommandKind::UpdateGoalTitle => Command::UpdateGoalTitle {
                index: parse_index(value(0))?,
                title: required(1)?,
            },
            CommandKind::UpdateActivity => Command::UpdateActivity {
                index: parse_index(value(0))?,
                activity: ActivityType::lookup(&required(1)?)?,
            },
            CommandKind::UpdateDuration => Command::UpdateDuration {
                index: parse_index(value(0))?,
                duration: parse_minutes(value(1))?,
            },
            CommandKind::UpdateProgress => Command::UpdateProgress {
                index: parse_index(value(0))?,
                delta: parse_number("progress amount", value(1))?,
            },
            CommandKind::ViewGoals => Command::ViewGoals,
            CommandKind::ViewWorkouts => Command::ViewWorkouts,
            CommandKind::ViewUser => Command::ViewUser,
            CommandKind::Exit => Command::Exit,
        };

        Ok(command)
    }
}

impl std::fmt::Display for CommandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A value a command needs from the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    UserId,
    NewUserId,
    UserName,
    Activity,
    Minutes,
    WorkoutDate,
    GoalTitle,
    TargetValue,
    StartDate,
    EndDate,
    WorkoutIndex,
    GoalIndex,
    ProgressDelta,
}

impl Field {
    /// Placeholder shown in usage lines.
    pub fn placeholder(&self) -> &'static str {
        match self {
            Field::UserId | Field::NewUserId => "<userId>",
            Field::UserName => "<name>",
            Field::Activity => "<activityType>",
            Field::Minutes => "<durationMinutes>",
            Field::WorkoutDate => "[date]",
            Field::GoalTitle => "<goalTitle>",
            Field::TargetValue => "<targetValue>",
            Field::StartDate => "<startDate>",
            Field::EndDate => "<endDate>",
            Field::WorkoutIndex => "<workoutIndex>",
            Field::GoalIndex => "<goalIndex>",
            Field::ProgressDelta => "<amount>",
        }
    }

    /// Interactive prompt text.
    pub fn prompt(&self) -> String {
        match self {
            Field::UserId => "Enter your user ID: ".to_string(),
            Field::NewUserId => "Enter a unique user ID: ".to_string(),
            Field::UserName => "Enter your name: ".to_string(),
            Field::Activity => format!("Enter activity type ({}): ", ActivityType::choices()),
            Field::Minutes => "Enter duration in minutes: ".to_string(),
            Field::WorkoutDate => "Enter date (YYYY-MM-DD) or press Enter for today: ".to_string(),
            Field::GoalTitle => "Enter goal title: ".to_string(),
            Field::TargetValue => "Enter target value (e.g., distance or duration goal): ".to_string(),
            Field::StartDate => "Enter start date (YYYY-MM-DD): ".to_string(),
            Field::EndDate => "Enter end date (YYYY-MM-DD): ".to_string(),
            Field::WorkoutIndex => "Enter workout index: ".to_string(),
            Field::GoalIndex => "Enter goal index: ".to_string(),
            Field::ProgressDelta => "Enter progress to add: ".to_string(),
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Field::WorkoutDate)
    }

    /// Free text fields may contain spaces.
    pub fn is_text(&self) -> bool {
        matches!(self, Field::UserName | Field::GoalTitle)
    }
}

/// A fully parsed command, ready for [`super::Session::execute`].
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Login {
        user_id: String,
    },
    CreateUser {
        name: String,
        user_id: String,
    },
    LogWorkout {
        activity: ActivityType,
        duration: Duration,
        date: NaiveDate,
    },
    Track {
        activity: ActivityType,
    },
    SetGoal {
        title: String,
        target_value: f64,
        start_date: NaiveDate,
        end_date: NaiveDate,
    },
    UpdateGoalTitle {
        index: i64,
        title: String,
    },
    UpdateActivity {
        index: i64,
        activity: ActivityType,
    },
    UpdateDuration {
        index: i64,
        duration: Duration,
    },
    UpdateProgress {
        index: i64,
        delta: f64,
    },
    ViewGoals,
    ViewWorkouts,
    ViewUser,
    Exit,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::Login { .. } => CommandKind::Login,
            Command::CreateUser { .. } => CommandKind::CreateUser,
            Command::LogWorkout { .. } => CommandKind::Log,
            Command::Track { .. } => CommandKind::Track,
            Command::SetGoal { .. } => CommandKind::SetGoal,
            Command::UpdateGoalTitle { .. } => CommandKind::UpdateGoalTitle,
            Command::UpdateActivity { .. } => CommandKind::UpdateActivity,
            Command::UpdateDuration { .. } => CommandKind::UpdateDuration,
            Command::UpdateProgress { .. } => CommandKind::UpdateProgress,
            Command::ViewGoals => CommandKind::ViewGoals,
            Command::ViewWorkouts => CommandKind::ViewWorkouts,
            Command::ViewUser => CommandKind::ViewUser,
            Command::Exit => CommandKind::Exit,
        }
    }
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, SessionError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| SessionError::InvalidDate(raw.trim().to_string()))
}

fn parse_minutes(raw: &str) -> Result<Duration, SessionError> {
    let invalid = || SessionError::InvalidNumber {
        field: "duration",
        value: raw.to_string(),
    };

    let minutes: i64 = raw.parse().map_err(|_| invalid())?;
    Duration::try_minutes(minutes).ok_or_else(invalid)
}

fn parse_number(field: &'static str, raw: &str) -> Result<f64, SessionError> {
    raw.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| SessionError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
}

fn parse_index(raw: &str) -> Result<i64, SessionError> {
    raw.parse().map_err(|_| SessionError::InvalidNumber {
        field: "index",
        value: raw.to_string(),
    })
}
