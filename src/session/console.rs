//! Text front end for a [`Session`].
//!
//! The console is generic over its reader and writer so the same loop serves
//! stdin/stdout and in-memory buffers in tests.

use std::io::{self, BufRead, Write};

use chrono::{Local, NaiveDate};

use super::commands::CommandKind;
use super::dispatcher::{Outcome, Session, SessionError};

const BANNER: &str = "Welcome to Fitness Tracker!\n===========================";
const RULE: &str = "===========================";

/// Today's date on the local calendar.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Interactive prompt loop and script runner.
pub struct Console<R, W> {
    input: R,
    output: W,
    show_menu: bool,
    greeting: bool,
    today: fn() -> NaiveDate,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self {
            input,
            output,
            show_menu: true,
            greeting: true,
            today: local_today,
        }
    }

    /// Print the command menu before every prompt.
    pub fn with_menu(mut self, show_menu: bool) -> Self {
        self.show_menu = show_menu;
        self
    }

    /// Print the welcome banner when the loop starts.
    pub fn with_greeting(mut self, greeting: bool) -> Self {
        self.greeting = greeting;
        self
    }

    /// Replace the clock used for default dates and active goals.
    pub fn with_clock(mut self, today: fn() -> NaiveDate) -> Self {
        self.today = today;
        self
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the interactive loop until `exit` or end of input.
    pub fn run(&mut self, session: &mut Session) -> io::Result<()> {
        tracing::info!("interactive session started");
        if self.greeting {
            writeln!(self.output, "{BANNER}")?;
        }

        loop {
            if self.show_menu {
                self.print_menu()?;
            }

            let Some(line) = self.prompt("\nEnter command: ")? else {
                break;
            };

            let Some(word) = line.split_whitespace().next() else {
                writeln!(self.output, "Invalid input. Please enter a valid command.")?;
                continue;
            };

            let Some(kind) = CommandKind::from_input(word) else {
                self.print_unknown(word)?;
                continue;
            };

            if let Err(err) = session.check_ready(kind) {
                self.print_error(&err)?;
                continue;
            }

            let mut values = Vec::with_capacity(kind.fields().len());
            for field in kind.fields() {
                match self.prompt(&field.prompt())? {
                    Some(value) => values.push(value),
                    None => return self.finish(),
                }
            }

            let today = (self.today)();
            let result = kind
                .parse(&values, today)
                .and_then(|command| session.execute(command, today));

            if self.report(result)? {
                break;
            }
        }

        self.finish()
    }

    /// Execute one command per input line, e.g. `log Running 60 2024-05-20`.
    ///
    /// Blank lines and lines starting with `#` are skipped. Errors are printed
    /// and the script carries on; `exit` stops it.
    pub fn run_script(&mut self, session: &mut Session) -> io::Result<()> {
        tracing::info!("script session started");

        while let Some(line) = self.read_line()? {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            writeln!(self.output, "> {line}")?;
            let tokens: Vec<&str> = line.split_whitespace().collect();
            let Some(kind) = CommandKind::from_input(tokens[0]) else {
                self.print_unknown(tokens[0])?;
                continue;
            };

            let today = (self.today)();
            let result = session
                .check_ready(kind)
                .and_then(|()| kind.split_args(&tokens[1..]))
                .and_then(|values| kind.parse(&values, today))
                .and_then(|command| session.execute(command, today));

            if self.report(result)? {
                break;
            }
        }

        self.finish()
    }

    fn print_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "Available commands:")?;
        for kind in CommandKind::ALL {
            writeln!(
                self.output,
                "{}. {} - {}",
                kind.menu_number(),
                kind.name(),
                kind.description()
            )?;
        }
        writeln!(self.output, "{RULE}")
    }

    fn print_unknown(&mut self, word: &str) -> io::Result<()> {
        tracing::warn!(command = word, "unknown command");
        writeln!(self.output, "Unknown command: {word}")?;
        writeln!(self.output, "Please use a valid command.")
    }

    fn print_error(&mut self, err: &SessionError) -> io::Result<()> {
        writeln!(self.output, "Error: {err}")
    }

    /// Print a command result. Returns true when the session should end.
    fn report(&mut self, result: Result<Outcome, SessionError>) -> io::Result<bool> {
        match result {
            Ok(outcome) => {
                writeln!(self.output, "{}", outcome.message())?;
                Ok(outcome.is_exit())
            }
            Err(err) => {
                self.print_error(&err)?;
                Ok(false)
            }
        }
    }

    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;
        Ok(self.read_line()?.map(|line| line.trim().to_string()))
    }

    /// Read one line without its terminator; `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn finish(&mut self) -> io::Result<()> {
        tracing::info!("session finished");
        self.output.flush()
    }
}
