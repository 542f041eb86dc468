//! Command execution
//!
//! The engine owns the task store and the database handle. Each parsed
//! command maps to one store operation; every mutating command persists
//! the full store immediately afterwards. A failed save surfaces as an
//! error but the in-memory mutation is kept, so the session can carry
//! on with durability degraded.

use crate::domain::{Category, Task, TaskStore};
use crate::error::EngineError;
use crate::parse::Command;
use crate::storage::Database;

/// Structured result of executing one command, handed to the
/// presentation layer. The engine never formats output itself.
#[derive(Debug)]
pub enum Outcome {
    /// The session should end.
    Exit,
    /// Show the help screen.
    Help,
    /// The whole list, in category order.
    Listed(Vec<Task>),
    /// A task was added at the given 1-based position.
    Added {
        task: Task,
        kind: Category,
        position: usize,
        total: usize,
    },
    /// A task's completion flag changed.
    Marked {
        index: usize,
        done: bool,
        task: Task,
    },
    /// A task was removed.
    Deleted { index: usize, task: Task },
    /// Keyword search results.
    Found { keyword: String, matches: Vec<Task> },
    /// Date query results, with a description like "before 2 Dec 2019".
    Checked {
        description: String,
        matches: Vec<Task>,
    },
    /// The list was cleared.
    Reset,
}

/// Applies commands to the task store and keeps the file in sync.
pub struct Engine {
    store: TaskStore,
    db: Database,
}

impl Engine {
    /// Creates an engine over an already-loaded store.
    pub fn new(db: Database, store: TaskStore) -> Self {
        Self { store, db }
    }

    /// Read access to the store, for inspection.
    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Executes one command. Input-shape validation already happened in
    /// the grammar; only runtime conditions (index bounds, persistence)
    /// can fail here.
    pub fn execute(&mut self, command: Command) -> Result<Outcome, EngineError> {
        match command {
            Command::Bye => Ok(Outcome::Exit),
            Command::Help => Ok(Outcome::Help),
            Command::List => Ok(Outcome::Listed(self.store.all().to_vec())),
            Command::Reset => {
                self.store.clear();
                self.persist()?;
                Ok(Outcome::Reset)
            }
            Command::Find { keyword } => {
                let matches = self.store.find(&keyword).into_iter().cloned().collect();
                Ok(Outcome::Found { keyword, matches })
            }
            Command::Check { filter, reference } => {
                let matches = self
                    .store
                    .check(filter, &reference)
                    .into_iter()
                    .cloned()
                    .collect();
                Ok(Outcome::Checked {
                    description: format!("{} {}", filter.label(), reference),
                    matches,
                })
            }
            Command::Delete { index } => {
                let task = self.store.remove(index)?;
                self.persist()?;
                Ok(Outcome::Deleted { index, task })
            }
            Command::Mark { index, done } => {
                let task = self.store.set_done(index, done)?.clone();
                self.persist()?;
                Ok(Outcome::Marked { index, done, task })
            }
            Command::AddTodo { name } => self.add(Task::todo(name)),
            Command::AddDeadline { name, due } => self.add(Task::deadline(name, due)),
            Command::AddEvent { name, start, end } => self.add(Task::event(name, start, end)?),
        }
    }

    fn add(&mut self, task: Task) -> Result<Outcome, EngineError> {
        let kind = task.category();
        let position = self.store.insert(task.clone());
        self.persist()?;
        Ok(Outcome::Added {
            task,
            kind,
            position,
            total: self.store.len(),
        })
    }

    fn persist(&self) -> Result<(), EngineError> {
        self.db.save(self.store.all())
    }
}
