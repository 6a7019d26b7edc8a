//! Unit tests for user aggregates and indexed access.

use chrono::{Duration, NaiveDate};
use fittrack::{ActivityType, Goal, TrackerError, User, Workout};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn log(user: &mut User, activity: ActivityType, minutes: i64) {
    let workout = Workout::new(activity, Duration::minutes(minutes), date(2024, 5, 1)).unwrap();
    user.add_workout(workout);
}

#[test]
fn test_no_running_workouts() {
    let mut user = User::new("Rider", "r1");
    log(&mut user, ActivityType::Cycling, 45);

    assert_eq!(user.total_minutes(ActivityType::Running), 0);
    assert_eq!(user.total_calories(ActivityType::Running), 0.0);
}

#[test]
fn test_totals_sum_per_activity() {
    let mut user = User::new("Rider", "r1");
    log(&mut user, ActivityType::Weightlifting, 40);
    log(&mut user, ActivityType::Running, 20);
    log(&mut user, ActivityType::Weightlifting, 20);

    assert_eq!(user.total_minutes(ActivityType::Weightlifting), 60);
    assert_eq!(user.total_calories(ActivityType::Weightlifting), 420.0);
    assert_eq!(user.total_minutes(ActivityType::Running), 20);
}

#[test]
fn test_workout_at_past_end() {
    let mut user = User::new("Rider", "r1");
    log(&mut user, ActivityType::Running, 20);
    log(&mut user, ActivityType::Running, 30);

    assert!(matches!(
        user.workout_at(5),
        Err(TrackerError::IndexOutOfRange { index: 5, len: 2, .. })
    ));
}

#[test]
fn test_indices_stable_across_appends() {
    let mut user = User::new("Rider", "r1");
    log(&mut user, ActivityType::Running, 20);
    let first = user.workout_at(0).unwrap().clone();

    log(&mut user, ActivityType::Cycling, 30);
    log(&mut user, ActivityType::Weightlifting, 40);

    assert_eq!(user.workout_at(0).unwrap(), &first);
    assert_eq!(
        user.workout_at(2).unwrap().activity_type(),
        ActivityType::Weightlifting
    );
}

#[test]
fn test_future_goal_counts_as_active() {
    let mut user = User::new("Rider", "r1");
    user.add_goal(Goal::new("Next Year", 10.0, date(2025, 1, 1), date(2025, 12, 31)).unwrap());
    user.add_goal(Goal::new("Done", 10.0, date(2023, 1, 1), date(2023, 12, 31)).unwrap());

    let active = user.active_goals_on(date(2024, 6, 1));
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].title(), "Next Year");
}
