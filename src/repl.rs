use std::io::{self, BufRead, Write};

use crate::{
    error::{CalcError, ParseError, RuntimeError},
    interpreter::{evaluator::core::Evaluator, precedence::PrecedenceTable},
};

/// Text printed by `/help`.
pub const HELP: &str = "The program evaluates integer expressions with + - * / and parentheses.
Assign variables with `name = value` and type a name to see its value.
Commands: /help, /exit";

/// What the session wants done after a line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Nothing to print.
    Silent,
    /// Print this line and keep reading.
    Print(String),
    /// Print this line and stop.
    Exit(String),
}

/// A calculator session: one evaluator, fed one line at a time.
///
/// Lines are dispatched in this order:
///
/// 1. `/command`: `/exit` and `/help`, anything else is an unknown command.
/// 2. blank lines are skipped.
/// 3. lines containing `=` are assignments.
/// 4. a bare name prints its value.
/// 5. anything else is evaluated.
///
/// # Example
/// ```
/// use tally::repl::{Reply, Session};
///
/// let mut session = Session::new();
/// assert_eq!(session.execute("a = 4"), Reply::Silent);
/// assert_eq!(session.execute("a * (2 + 3)"), Reply::Print("20".to_string()));
/// assert_eq!(session.execute("/exit"), Reply::Exit("Bye!".to_string()));
/// ```
#[derive(Debug, Default)]
pub struct Session {
    evaluator: Evaluator,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session whose evaluator uses `precedence`.
    #[must_use]
    pub fn with_precedence(precedence: PrecedenceTable) -> Self {
        Self { evaluator: Evaluator::with_precedence(precedence) }
    }

    #[must_use]
    pub const fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    /// Handles a single input line.
    pub fn execute(&mut self, line: &str) -> Reply {
        let line = line.trim();

        if let Some(command) = line.strip_prefix('/') {
            return Self::command(command);
        }
        if line.is_empty() {
            return Reply::Silent;
        }

        if line.contains('=') {
            return match self.evaluator.assign(line) {
                Ok(()) => Reply::Silent,
                Err(e) => Reply::Print(describe(&e, "Invalid assignment")),
            };
        }

        if Evaluator::is_variable(line) {
            return Reply::Print(self.evaluator
                                    .get_value(line)
                                    .map_or_else(|| "Unknown variable".to_string(),
                                                 |v| v.to_string()));
        }

        match self.evaluator.evaluate(line) {
            Ok(value) => Reply::Print(value.to_string()),
            Err(e) => Reply::Print(describe(&e, "Invalid expression")),
        }
    }

    /// Runs the session until `/exit` or the end of `input`.
    ///
    /// # Errors
    /// Propagates I/O errors from reading `input` or writing `output`.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> io::Result<()> {
        for line in input.lines() {
            match self.execute(&line?) {
                Reply::Silent => {},
                Reply::Print(text) => writeln!(output, "{text}")?,
                Reply::Exit(text) => {
                    writeln!(output, "{text}")?;
                    break;
                },
            }
        }
        output.flush()
    }

    fn command(command: &str) -> Reply {
        match command {
            "exit" => Reply::Exit("Bye!".to_string()),
            "help" => Reply::Print(HELP.to_string()),
            _ => Reply::Print("Unknown command".to_string()),
        }
    }
}

/// Maps an error to the line shown to the user.
fn describe(error: &CalcError, invalid: &str) -> String {
    log::debug!("{error}");

    match error {
        CalcError::Parse(ParseError::UnknownVariable { .. })
        | CalcError::Runtime(RuntimeError::UnknownVariable { .. }) => "Unknown variable".to_string(),
        CalcError::Runtime(RuntimeError::DivisionByZero { .. }) => "Division by zero".to_string(),
        CalcError::Runtime(RuntimeError::Overflow { .. }) => "Integer overflow".to_string(),
        _ => invalid.to_string(),
    }
}
