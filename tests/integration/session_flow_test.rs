//! Integration tests driving a session through parsed commands.
//!
//! Commands are parsed from raw strings exactly as the console does, then
//! executed against one session.

use chrono::NaiveDate;
use fittrack::session::{CommandKind, Outcome, Session, SessionError};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn exec(session: &mut Session, line: &str) -> Result<Outcome, SessionError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let kind = CommandKind::from_input(tokens[0]).expect("known command");
    session.check_ready(kind)?;
    let values = kind.split_args(&tokens[1..])?;
    let command = kind.parse(&values, today())?;
    session.execute(command, today())
}

fn message(session: &mut Session, line: &str) -> String {
    exec(session, line).unwrap().message().to_string()
}

#[test]
fn test_full_tracking_session() {
    let mut session = Session::new();

    assert_eq!(
        message(&mut session, "create-user Test User User123"),
        "User created successfully! Logged in as Test User."
    );
    message(&mut session, "log Running 60 2024-05-20");
    message(&mut session, "log cycling 30");
    message(&mut session, "log RUNNING 15 2024-06-01");

    assert_eq!(
        message(&mut session, "track Running"),
        "Progress for Running:\n  Total Duration: 75 minutes\n  Total Calories Burned: 750.00"
    );

    message(&mut session, "update-activity 1 Weightlifting");
    message(&mut session, "update-duration 1 40");
    assert_eq!(
        message(&mut session, "track weightlifting"),
        "Progress for Weightlifting:\n  Total Duration: 40 minutes\n  Total Calories Burned: 280.00"
    );

    let workouts = message(&mut session, "view-workouts");
    let lines: Vec<&str> = workouts.lines().collect();
    assert_eq!(lines.len(), 4);
    assert_eq!(
        lines[2],
        "Activity: Weightlifting, Duration: 40 minutes, Date: 2024-06-15, Calories Burned: 280.00"
    );
}

#[test]
fn test_goal_commands() {
    let mut session = Session::new();
    message(&mut session, "create-user Goal Setter gs");

    assert_eq!(
        message(&mut session, "set-goal Weekly Minutes 300 2024-01-01 2024-12-31"),
        "Goal set successfully: Goal Title: Weekly Minutes, Target: 300.00, Current: 0.00, Achieved: false, Period: 2024-01-01 to 2024-12-31"
    );

    let err = exec(&mut session, "set-goal Backwards 10 2024-07-01 2024-06-30").unwrap_err();
    assert_eq!(err.to_string(), "Start date cannot be after end date.");

    let err = exec(&mut session, "set-goal Nothing 0 2024-01-01 2024-02-01").unwrap_err();
    assert_eq!(err.to_string(), "Target value must be positive.");

    message(&mut session, "update-progress 0 120");
    message(&mut session, "update-progress 0 180");
    message(&mut session, "update-goal-title 0 Summer Minutes");

    let goals = message(&mut session, "view-goals");
    assert!(goals.starts_with("Your Active Goals:\nTitle: Summer Minutes"));
    assert!(goals.contains("Current: 300.00"));
    assert!(goals.contains("Achieved: true"));

    let err = exec(&mut session, "update-goal-title 4 Whatever").unwrap_err();
    assert_eq!(err.to_string(), "Invalid goal index: 4 (1 available).");
}

#[test]
fn test_users_are_independent() {
    let mut session = Session::new();
    message(&mut session, "create-user Alice a");
    message(&mut session, "log Running 30");
    message(&mut session, "create-user Bob b");

    assert_eq!(message(&mut session, "view-workouts"), "No workouts logged yet.");

    let err = exec(&mut session, "create-user Alice Again a").unwrap_err();
    assert_eq!(err.to_string(), "User ID already exists. Try a different one.");

    assert_eq!(message(&mut session, "login a"), "Login successful. Welcome, Alice!");
    assert!(message(&mut session, "view-workouts").contains("Running"));
    assert_eq!(session.users().len(), 2);
}

#[test]
fn test_errors_before_login() {
    let mut session = Session::new();

    assert_eq!(exec(&mut session, "login x"), Err(SessionError::NoUsers));
    assert_eq!(
        exec(&mut session, "track Running"),
        Err(SessionError::NotLoggedIn)
    );
    assert!(exec(&mut session, "13").unwrap().is_exit());
}
