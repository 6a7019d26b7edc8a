//! Tracker session: command parsing, dispatch and the text console.
//!
//! The session owns the user registry and the current user. It drives the
//! domain model but the domain model knows nothing about it.

pub mod commands;
pub mod console;
pub mod dispatcher;

pub use commands::{Command, CommandKind, Field};
pub use console::{local_today, Console};
pub use dispatcher::{Outcome, Session, SessionError};
