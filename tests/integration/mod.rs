//! Integration test modules.

mod console_script_test;
mod session_flow_test;
