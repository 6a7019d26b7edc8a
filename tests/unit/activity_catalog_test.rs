//! Unit tests for activity lookup.

use fittrack::{ActivityType, TrackerError};

#[test]
fn test_lookup_any_case_returns_same_variant() {
    let lower = ActivityType::lookup("running").unwrap();
    let upper = ActivityType::lookup("RUNNING").unwrap();

    assert_eq!(lower, upper);
    assert_eq!(lower, ActivityType::Running);
}

#[test]
fn test_every_display_name_round_trips_through_lookup() {
    for activity in ActivityType::ALL {
        assert_eq!(ActivityType::lookup(activity.display_name()).unwrap(), activity);
        assert_eq!(
            ActivityType::lookup(&activity.display_name().to_uppercase()).unwrap(),
            activity
        );
        assert_eq!(activity.to_string(), activity.display_name());
    }
}

#[test]
fn test_unknown_activity_error() {
    match ActivityType::lookup("Rowing") {
        Err(TrackerError::InvalidActivityType { name, choices }) => {
            assert_eq!(name, "Rowing");
            assert_eq!(choices, "Running, Weightlifting, Cycling");
        }
        other => panic!("expected InvalidActivityType, got {other:?}"),
    }
}
