//! Unit tests for workout calorie calculation and validation.

use chrono::{Duration, NaiveDate};
use fittrack::{ActivityType, TrackerError, Workout};

fn may_20() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 20).unwrap()
}

#[test]
fn test_running_hour_scenario() {
    let workout = Workout::new(ActivityType::Running, Duration::minutes(60), may_20()).unwrap();

    assert_eq!(workout.calories_burned(), 600.0);
    assert_eq!(
        workout.to_string(),
        "Activity: Running, Duration: 60 minutes, Date: 2024-05-20, Calories Burned: 600.00"
    );
}

#[test]
fn test_calories_track_every_mutation() {
    let mut workout =
        Workout::new(ActivityType::Cycling, Duration::minutes(10), may_20()).unwrap();

    for activity in ActivityType::ALL {
        workout.set_activity_type(activity);
        for minutes in [1_i64, 25, 61, 600] {
            workout.set_duration(Duration::minutes(minutes)).unwrap();
            assert_eq!(
                workout.calories_burned(),
                activity.calories_per_minute() * minutes as f64
            );
        }
    }
}

#[test]
fn test_non_positive_durations_rejected() {
    for minutes in [0_i64, -1, -90] {
        let err = Workout::new(ActivityType::Running, Duration::minutes(minutes), may_20())
            .unwrap_err();
        assert_eq!(
            err,
            TrackerError::InvalidArgument("Workout duration must be positive.".to_string())
        );
    }
}

#[test]
fn test_rejected_update_leaves_workout_unchanged() {
    let mut workout =
        Workout::new(ActivityType::Weightlifting, Duration::minutes(30), may_20()).unwrap();
    let before = workout.clone();

    assert!(workout.set_duration(Duration::zero()).is_err());
    assert_eq!(workout, before);
}
