//! Unit test modules.

mod activity_catalog_test;
mod user_totals_test;
mod workout_calories_test;
