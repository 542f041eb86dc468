//! Ordered task collection
//!
//! The store keeps tasks grouped by category: deadlines first, then
//! events, then plain todos, with insertion order preserved inside each
//! group. All external indices are 1-based list positions; they are not
//! stable identities, a deletion renumbers everything after it.

use chrono::{NaiveDateTime, NaiveTime};

use super::task::Task;
use super::temporal::TemporalValue;
use crate::error::EngineError;

/// Predicate for date queries against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateFilter {
    /// Strictly earlier than the reference.
    Before,
    /// Strictly later than the reference.
    After,
    /// On the reference date (see [`TaskStore::check`] for the
    /// time-of-day rules).
    On,
}

impl DateFilter {
    /// Preposition used when describing the query back to the user.
    pub fn label(&self) -> &'static str {
        match self {
            DateFilter::Before => "before",
            DateFilter::After => "after",
            DateFilter::On => "on",
        }
    }
}

/// The ordered, mutable task collection.
#[derive(Debug, Default)]
pub struct TaskStore {
    tasks: Vec<Task>,
}

impl TaskStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store from already-ordered tasks (as loaded from file).
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    /// Number of tasks in the store.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// True when the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Read-only ordered view of all tasks.
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Inserts a task at the end of its category group, never disturbing
    /// the relative order of existing tasks. Returns the 1-based
    /// position the task landed at.
    pub fn insert(&mut self, task: Task) -> usize {
        let rank = task.category();
        let pos = self
            .tasks
            .iter()
            .take_while(|existing| existing.category() <= rank)
            .count();
        self.tasks.insert(pos, task);
        pos + 1
    }

    /// Returns the task at a 1-based index.
    pub fn get(&self, index: usize) -> Result<&Task, EngineError> {
        let slot = self.slot(index)?;
        Ok(&self.tasks[slot])
    }

    /// Removes and returns the task at a 1-based index.
    pub fn remove(&mut self, index: usize) -> Result<Task, EngineError> {
        let slot = self.slot(index)?;
        Ok(self.tasks.remove(slot))
    }

    /// Updates the completion flag of the task at a 1-based index and
    /// returns a reference to it.
    pub fn set_done(&mut self, index: usize, done: bool) -> Result<&Task, EngineError> {
        let slot = self.slot(index)?;
        self.tasks[slot].set_done(done);
        Ok(&self.tasks[slot])
    }

    /// Removes every task.
    pub fn clear(&mut self) {
        self.tasks.clear();
    }

    /// Case-insensitive substring search over task names.
    pub fn find(&self, keyword: &str) -> Vec<&Task> {
        let needle = keyword.to_lowercase();
        self.tasks
            .iter()
            .filter(|task| task.name().to_lowercase().contains(&needle))
            .collect()
    }

    /// Tasks whose date anchor satisfies the filter against the
    /// reference. Plain todos carry no anchor and never match.
    ///
    /// `Before` and `After` compare strictly, then fall through to the
    /// exact-match rule, so `before <date>` lists tasks on that date
    /// too. The exact-match rules: dates must be equal; a reference
    /// time of 00:00 counts as "no time supplied", matching every task
    /// on that date; with a real time, a task matches on the exact time
    /// or on midnight (date-only tasks match any time-of-day query).
    pub fn check(&self, filter: DateFilter, reference: &TemporalValue) -> Vec<&Task> {
        let reference_dt = reference.as_date_time();
        self.tasks
            .iter()
            .filter(|task| {
                task.date_anchor().is_some_and(|anchor| {
                    let ordered = match filter {
                        DateFilter::Before => anchor < reference_dt,
                        DateFilter::After => anchor > reference_dt,
                        DateFilter::On => false,
                    };
                    ordered || on_same_date(anchor, reference_dt)
                })
            })
            .collect()
    }

    fn slot(&self, index: usize) -> Result<usize, EngineError> {
        if index == 0 || index > self.tasks.len() {
            return Err(EngineError::IndexNotFound);
        }
        Ok(index - 1)
    }
}

fn on_same_date(anchor: NaiveDateTime, reference: NaiveDateTime) -> bool {
    if anchor.date() != reference.date() {
        return false;
    }
    let reference_has_time = reference.time() != NaiveTime::MIN;
    if reference_has_time {
        anchor.time() == reference.time() || anchor.time() == NaiveTime::MIN
    } else {
        true
    }
}
