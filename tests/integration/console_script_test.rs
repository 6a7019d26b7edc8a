//! Integration tests for the text console.

use std::io::Cursor;

use chrono::NaiveDate;
use fittrack::{Console, Session};

fn fixed_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn run_script(script: &str) -> String {
    let mut session = Session::new();
    let mut console = Console::new(Cursor::new(script.to_string()), Vec::new())
        .with_clock(fixed_today);
    console.run_script(&mut session).unwrap();
    String::from_utf8(console.into_output()).unwrap()
}

#[test]
fn test_script_session() {
    let output = run_script(
        "\
# one user, a few workouts
create-user TestUser User123
log Running 60 2024-05-20
log running 0 2024-05-21
track Running
update-activity 5 Cycling
update-activity -1 Cycling
view-user
exit
",
    );

    assert!(output.contains(
        "Workout logged successfully: Activity: Running, Duration: 60 minutes, Date: 2024-05-20, Calories Burned: 600.00"
    ));
    assert!(output.contains("Error: Workout duration must be positive."));
    assert!(output.contains("Total Duration: 60 minutes"));
    assert!(output.contains("Error: Invalid workout index: 5 (1 available)."));
    assert!(output.contains("Error: Invalid workout index: -1 (1 available)."));
    assert!(output.contains("User Name: TestUser\nUser ID: User123"));
    assert!(output.trim_end().ends_with("Exiting Fitness Tracker. Goodbye!"));
}

#[test]
fn test_script_unknown_command() {
    let output = run_script("unknown-command\n");
    assert!(output.contains("Unknown command: unknown-command\nPlease use a valid command."));
}

#[test]
fn test_interactive_session_by_menu_number() {
    let input = "\
2
Test User
User123
5
Weekly Minutes
300
2024-01-01
2024-12-31
12
0
300
8
11
0
-5
13
";
    let mut session = Session::new();
    let mut console = Console::new(Cursor::new(input.to_string()), Vec::new())
        .with_menu(false)
        .with_clock(fixed_today);
    console.run(&mut session).unwrap();
    let output = String::from_utf8(console.into_output()).unwrap();

    assert!(output.contains("Enter goal title: "));
    assert!(output.contains("Updated goal progress successfully: 300.00 of 300.00 (Achieved: true)"));
    assert!(output.contains("Your Active Goals:\nTitle: Weekly Minutes"));
    assert!(output.contains("Error: Invalid workout index: 0 (0 available)."));
    assert!(output.contains("Goodbye!"));

    let user = session.current_user().unwrap();
    assert!(user.goal_at(0).unwrap().is_achieved());
}
