//! Task domain model
//!
//! A task is a description plus a completion flag, with a variant-specific
//! payload: nothing for a plain todo, a due date for a deadline, a start
//! and end for an event. The variant also determines the category rank
//! used to group the list.

use std::fmt;

use chrono::NaiveDateTime;

use super::temporal::TemporalValue;
use crate::error::EngineError;

/// Fixed display/insertion grouping of tasks. Derived ordering follows
/// declaration order: deadlines first, then events, then plain todos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Category {
    Deadline,
    Event,
    Todo,
}

impl Category {
    /// Display label for the category.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Deadline => "deadline",
            Category::Event => "event",
            Category::Todo => "todo",
        }
    }
}

/// Variant payload of a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskKind {
    /// A plain task with no date attached.
    Todo,
    /// A task due by a specific date or date-time.
    Deadline { due: TemporalValue },
    /// A scheduled task with a start and end.
    Event {
        start: TemporalValue,
        end: TemporalValue,
    },
}

/// A single task in the list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    name: String,
    done: bool,
    kind: TaskKind,
}

impl Task {
    /// Creates a plain todo task.
    pub fn todo(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
            kind: TaskKind::Todo,
        }
    }

    /// Creates a deadline task due by the given temporal value.
    pub fn deadline(name: impl Into<String>, due: TemporalValue) -> Self {
        Self {
            name: name.into(),
            done: false,
            kind: TaskKind::Deadline { due },
        }
    }

    /// Creates an event task.
    ///
    /// The start and end must carry the same tag (both dates or both
    /// date-times) and the start must be strictly before the end. This
    /// is the only way to obtain an event, so the invariant holds for
    /// every constructed task, including those decoded from the file.
    pub fn event(
        name: impl Into<String>,
        start: TemporalValue,
        end: TemporalValue,
    ) -> Result<Self, EngineError> {
        validate_event_range(&start, &end)?;
        Ok(Self {
            name: name.into(),
            done: false,
            kind: TaskKind::Event { start, end },
        })
    }

    /// Sets the completion flag, consuming and returning the task.
    /// Used when rebuilding tasks from the saved file.
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// The task description.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True when the task is complete.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Updates the completion flag.
    pub fn set_done(&mut self, done: bool) {
        self.done = done;
    }

    /// The variant payload.
    pub fn kind(&self) -> &TaskKind {
        &self.kind
    }

    /// Category rank, a pure function of the variant tag.
    pub fn category(&self) -> Category {
        match self.kind {
            TaskKind::Deadline { .. } => Category::Deadline,
            TaskKind::Event { .. } => Category::Event,
            TaskKind::Todo => Category::Todo,
        }
    }

    /// The date this task is anchored to for date queries: a deadline's
    /// due date, an event's start. Plain todos have no anchor.
    pub fn date_anchor(&self) -> Option<NaiveDateTime> {
        match &self.kind {
            TaskKind::Todo => None,
            TaskKind::Deadline { due } => Some(due.as_date_time()),
            TaskKind::Event { start, .. } => Some(start.as_date_time()),
        }
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            TaskKind::Todo => write!(f, "{}", self.name),
            TaskKind::Deadline { due } => write!(f, "{} (due by: {due})", self.name),
            TaskKind::Event { start, end } => {
                write!(f, "{} (from: {start} to: {end})", self.name)
            }
        }
    }
}

/// Checks the event range invariant: same temporal kind on both ends,
/// start strictly before end.
pub fn validate_event_range(
    start: &TemporalValue,
    end: &TemporalValue,
) -> Result<(), EngineError> {
    if !start.same_kind(end) {
        return Err(EngineError::InvalidFormat {
            context: "event",
            usage: "<description> /from <start> /to <end>",
        });
    }
    if start.as_date_time() >= end.as_date_time() {
        return Err(EngineError::InvalidTimeRange);
    }
    Ok(())
}
