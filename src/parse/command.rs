//! Command grammar
//!
//! Splits an input line into a case-insensitive verb and its argument,
//! validates the argument shape up front, and produces a [`Command`]
//! value. A constructed command is always executable without further
//! input-shape checks; only runtime conditions like index bounds remain
//! for the executor.

use super::number;
use crate::domain::{validate_event_range, DateFilter, TemporalValue};
use crate::error::EngineError;

const DEADLINE_USAGE: &str = "<description> /by <date>";
const EVENT_USAGE: &str = "<description> /from <start> /to <end>";
const CHECK_USAGE: &str = "check [before|after] <date>";

/// A fully validated command, immutable once constructed.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// End the session.
    Bye,
    /// Show the help screen.
    Help,
    /// List every task.
    List,
    /// Clear the whole list.
    Reset,
    /// Show tasks whose name contains the keyword.
    Find { keyword: String },
    /// Show tasks matching a date query.
    Check {
        filter: DateFilter,
        reference: TemporalValue,
    },
    /// Delete the task at a 1-based index.
    Delete { index: usize },
    /// Mark (or unmark) the task at a 1-based index.
    Mark { index: usize, done: bool },
    /// Add a plain todo task.
    AddTodo { name: String },
    /// Add a deadline task.
    AddDeadline { name: String, due: TemporalValue },
    /// Add an event task. The range invariant was already checked.
    AddEvent {
        name: String,
        start: TemporalValue,
        end: TemporalValue,
    },
}

/// Parses one input line into a command.
///
/// An unmatched verb is not an error: the entire line becomes the name
/// of a plain todo task, so free-text input "just works".
pub fn parse(line: &str) -> Result<Command, EngineError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(EngineError::InvalidCommand);
    }

    let (verb, argument) = match line.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest.trim()),
        None => (line, ""),
    };

    match verb.to_lowercase().as_str() {
        "bye" => Ok(Command::Bye),
        "commands" => Ok(Command::Help),
        "list" => Ok(Command::List),
        "reset" => Ok(Command::Reset),
        "find" => {
            require_argument(argument, "find")?;
            Ok(Command::Find {
                keyword: argument.to_string(),
            })
        }
        "check" => parse_check(argument),
        "delete" => Ok(Command::Delete {
            index: parse_index_argument(argument)?,
        }),
        "mark" => Ok(Command::Mark {
            index: parse_index_argument(argument)?,
            done: true,
        }),
        "unmark" => Ok(Command::Mark {
            index: parse_index_argument(argument)?,
            done: false,
        }),
        "deadline" => parse_deadline(argument),
        "event" => parse_event(argument),
        "todo" => {
            require_argument(argument, "todo")?;
            Ok(Command::AddTodo {
                name: argument.to_string(),
            })
        }
        // Catch-all: the whole line is the task name.
        _ => Ok(Command::AddTodo {
            name: line.to_string(),
        }),
    }
}

fn parse_check(argument: &str) -> Result<Command, EngineError> {
    require_argument(argument, "check")?;

    let (filter, date_text) = match argument.split_once(char::is_whitespace) {
        Some(("before", rest)) => (DateFilter::Before, rest.trim()),
        Some(("after", rest)) => (DateFilter::After, rest.trim()),
        _ if argument == "before" || argument == "after" => {
            return Err(EngineError::InvalidFormat {
                context: "check",
                usage: CHECK_USAGE,
            });
        }
        _ => (DateFilter::On, argument),
    };
    if date_text.is_empty() {
        return Err(EngineError::InvalidFormat {
            context: "check",
            usage: CHECK_USAGE,
        });
    }

    Ok(Command::Check {
        filter,
        reference: TemporalValue::parse(date_text)?,
    })
}

fn parse_deadline(argument: &str) -> Result<Command, EngineError> {
    require_argument(argument, "deadline")?;

    let Some((name, due_text)) = argument.split_once(" /by ") else {
        return Err(EngineError::InvalidFormat {
            context: "deadline",
            usage: DEADLINE_USAGE,
        });
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(EngineError::MissingArgument("deadline"));
    }

    Ok(Command::AddDeadline {
        name: name.to_string(),
        due: TemporalValue::parse(due_text)?,
    })
}

fn parse_event(argument: &str) -> Result<Command, EngineError> {
    require_argument(argument, "event")?;

    // `/from` must come before `/to`; splitting in that order enforces it.
    let Some((name, rest)) = argument.split_once(" /from ") else {
        return Err(EngineError::InvalidFormat {
            context: "event",
            usage: EVENT_USAGE,
        });
    };
    let Some((start_text, end_text)) = rest.split_once(" /to ") else {
        return Err(EngineError::InvalidFormat {
            context: "event",
            usage: EVENT_USAGE,
        });
    };
    let name = name.trim();
    if name.is_empty() {
        return Err(EngineError::MissingArgument("event"));
    }

    let start = TemporalValue::parse(start_text.trim())?;
    let end = TemporalValue::parse(end_text.trim())?;
    validate_event_range(&start, &end)?;

    Ok(Command::AddEvent {
        name: name.to_string(),
        start,
        end,
    })
}

fn parse_index_argument(argument: &str) -> Result<usize, EngineError> {
    if argument.is_empty() {
        return Err(EngineError::MissingNumber);
    }
    number::parse_index(argument).ok_or(EngineError::InvalidNumber)
}

fn require_argument(argument: &str, verb: &'static str) -> Result<(), EngineError> {
    if argument.is_empty() {
        return Err(EngineError::MissingArgument(verb));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temporal(text: &str) -> TemporalValue {
        TemporalValue::parse(text).unwrap()
    }

    #[test]
    fn bare_verbs() {
        assert_eq!(parse("bye").unwrap(), Command::Bye);
        assert_eq!(parse("commands").unwrap(), Command::Help);
        assert_eq!(parse("list").unwrap(), Command::List);
        assert_eq!(parse("reset").unwrap(), Command::Reset);
    }

    #[test]
    fn verbs_are_case_insensitive() {
        assert_eq!(parse("LIST").unwrap(), Command::List);
        assert_eq!(parse("ByE").unwrap(), Command::Bye);
    }

    #[test]
    fn unmatched_verb_becomes_a_todo_with_the_whole_line() {
        assert_eq!(
            parse("Read a book").unwrap(),
            Command::AddTodo {
                name: "Read a book".to_string()
            }
        );
        // A single unknown word is a task too, not an error.
        assert_eq!(
            parse("groceries").unwrap(),
            Command::AddTodo {
                name: "groceries".to_string()
            }
        );
    }

    #[test]
    fn blank_line_is_not_a_command() {
        assert!(matches!(parse("   "), Err(EngineError::InvalidCommand)));
    }

    #[test]
    fn todo_requires_a_description() {
        assert_eq!(
            parse("todo Buy milk").unwrap(),
            Command::AddTodo {
                name: "Buy milk".to_string()
            }
        );
        assert!(matches!(
            parse("todo"),
            Err(EngineError::MissingArgument("todo"))
        ));
    }

    #[test]
    fn deadline_parses_name_and_due() {
        assert_eq!(
            parse("deadline Submit report /by 31/12/2025").unwrap(),
            Command::AddDeadline {
                name: "Submit report".to_string(),
                due: temporal("31/12/2025"),
            }
        );
    }

    #[test]
    fn deadline_without_separator_is_invalid_format() {
        assert!(matches!(
            parse("deadline Submit report by tomorrow"),
            Err(EngineError::InvalidFormat {
                context: "deadline",
                ..
            })
        ));
        assert!(matches!(
            parse("deadline"),
            Err(EngineError::MissingArgument("deadline"))
        ));
        assert!(matches!(
            parse("deadline Submit report /by someday"),
            Err(EngineError::InvalidDate)
        ));
    }

    #[test]
    fn event_parses_name_start_end() {
        assert_eq!(
            parse("event Conference /from 1/6/2026 /to 3/6/2026").unwrap(),
            Command::AddEvent {
                name: "Conference".to_string(),
                start: temporal("1/6/2026"),
                end: temporal("3/6/2026"),
            }
        );
    }

    #[test]
    fn event_separators_must_appear_in_order() {
        assert!(matches!(
            parse("event Conference /to 3/6/2026 /from 1/6/2026"),
            Err(EngineError::InvalidFormat {
                context: "event",
                ..
            })
        ));
        assert!(matches!(
            parse("event Conference /from 1/6/2026"),
            Err(EngineError::InvalidFormat {
                context: "event",
                ..
            })
        ));
    }

    #[test]
    fn event_range_is_validated_at_parse_time() {
        assert!(matches!(
            parse("event Backwards /from 3/6/2026 /to 1/6/2026"),
            Err(EngineError::InvalidTimeRange)
        ));
        assert!(matches!(
            parse("event Mixed /from 1/6/2026 /to 2/6/2026 1800"),
            Err(EngineError::InvalidFormat {
                context: "event",
                ..
            })
        ));
    }

    #[test]
    fn mark_accepts_numerals_and_words() {
        assert_eq!(
            parse("mark 1").unwrap(),
            Command::Mark {
                index: 1,
                done: true
            }
        );
        assert_eq!(
            parse("unmark twenty-one").unwrap(),
            Command::Mark {
                index: 21,
                done: false
            }
        );
        assert_eq!(parse("delete two").unwrap(), Command::Delete { index: 2 });
    }

    #[test]
    fn index_errors_distinguish_missing_from_invalid() {
        assert!(matches!(parse("mark"), Err(EngineError::MissingNumber)));
        assert!(matches!(
            parse("mark banana"),
            Err(EngineError::InvalidNumber)
        ));
        assert!(matches!(parse("delete"), Err(EngineError::MissingNumber)));
    }

    #[test]
    fn find_keeps_the_keyword() {
        assert_eq!(
            parse("find milk").unwrap(),
            Command::Find {
                keyword: "milk".to_string()
            }
        );
        assert!(matches!(
            parse("find"),
            Err(EngineError::MissingArgument("find"))
        ));
    }

    #[test]
    fn check_with_and_without_preposition() {
        assert_eq!(
            parse("check 2/12/2019").unwrap(),
            Command::Check {
                filter: DateFilter::On,
                reference: temporal("2/12/2019"),
            }
        );
        assert_eq!(
            parse("check before 2/12/2019").unwrap(),
            Command::Check {
                filter: DateFilter::Before,
                reference: temporal("2/12/2019"),
            }
        );
        assert_eq!(
            parse("check after 2/12/2019 6:00PM").unwrap(),
            Command::Check {
                filter: DateFilter::After,
                reference: temporal("2/12/2019 6:00PM"),
            }
        );
    }

    #[test]
    fn check_argument_errors() {
        assert!(matches!(
            parse("check"),
            Err(EngineError::MissingArgument("check"))
        ));
        assert!(matches!(
            parse("check before"),
            Err(EngineError::InvalidFormat {
                context: "check",
                ..
            })
        ));
        assert!(matches!(parse("check gibberish"), Err(EngineError::InvalidDate)));
    }
}
