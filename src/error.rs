//! Error taxonomy for the command engine
//!
//! Every expected user-input failure is a variant here, so the REPL can
//! report it and keep going. Only genuine I/O faults during persistence
//! use the `Persist` variant, and even those do not end the session.

use thiserror::Error;

/// Failures produced by command parsing, execution and persistence.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Unrecognized verb. Unreachable under the catch-all add rule, but
    /// kept so a blank or stricter grammar has a failure to report.
    #[error("Invalid command! Type 'commands' to see what I can do.")]
    InvalidCommand,

    /// A verb that needs a name/description got an empty argument.
    #[error("Please provide the {0} task name/description!")]
    MissingArgument(&'static str),

    /// The argument did not match the shape the verb requires.
    #[error("Invalid {context} format! Use: {usage}")]
    InvalidFormat {
        context: &'static str,
        usage: &'static str,
    },

    /// An event's start was not strictly before its end.
    #[error("Invalid event time! The start must be strictly before the end.")]
    InvalidTimeRange,

    /// No supported date or date-time pattern matched.
    #[error("Invalid date! Try formats like 2/12/2019, 2/12/2019 6:00PM or 2/12/2019 1800.")]
    InvalidDate,

    /// mark/unmark/delete was given no index at all.
    #[error("Missing task index! Please provide the desired number.")]
    MissingNumber,

    /// The index argument was neither a numeral nor a number word.
    #[error("Invalid task index! Please provide a valid number.")]
    InvalidNumber,

    /// A 1-based index fell outside the current list.
    #[error("Task index not found on the list! Please try again.")]
    IndexNotFound,

    /// Reading or writing the task file failed at the I/O level. After
    /// a failed save the in-memory change is kept.
    #[error("Task file error: {0}")]
    Persist(String),

    /// A saved line could not be turned back into a task. Recovered
    /// inside the load path; surfaces only as a startup warning.
    #[error("Could not parse saved task: {0}")]
    LoadParse(String),
}
