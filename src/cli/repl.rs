//! Interactive session loop
//!
//! Reads one command per line, fully parsing and executing it before
//! the next line is read. No failure ends the session; errors are
//! reported and the loop continues. The session ends on `bye` or when
//! input runs out.

use std::io::BufRead;

use anyhow::Result;

use super::ui::Presenter;
use crate::domain::TaskStore;
use crate::engine::{Engine, Outcome};
use crate::parse;
use crate::storage::Database;

/// Runs a full interactive session over the given input.
pub fn run(db: Database, ui: &mut dyn Presenter, input: impl BufRead) -> Result<()> {
    // An unreadable file degrades to an empty in-memory session rather
    // than refusing to start; the user is warned that nothing loaded.
    let store = match db.load() {
        Ok(loaded) => {
            ui.on_load_warnings(&loaded.warnings);
            TaskStore::from_tasks(loaded.tasks)
        }
        Err(e) => {
            ui.on_error(&e);
            TaskStore::new()
        }
    };
    let mut engine = Engine::new(db, store);

    ui.on_welcome();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        match parse::parse(&line).and_then(|command| engine.execute(command)) {
            Ok(outcome) => {
                if dispatch(ui, &outcome) {
                    break;
                }
            }
            Err(e) => ui.on_error(&e),
        }
    }

    ui.on_goodbye();
    Ok(())
}

/// Routes an outcome to the presenter. Returns true when the session
/// should end.
fn dispatch(ui: &mut dyn Presenter, outcome: &Outcome) -> bool {
    match outcome {
        Outcome::Exit => return true,
        Outcome::Help => ui.on_help(),
        Outcome::Listed(tasks) => ui.on_listed(tasks),
        Outcome::Added {
            task, kind, total, ..
        } => ui.on_task_added(task, *kind, *total),
        Outcome::Marked { index, done, task } => ui.on_task_marked(*index, *done, task),
        Outcome::Deleted { index, task } => ui.on_task_deleted(*index, task),
        Outcome::Found { keyword, matches } => {
            ui.on_filtered(matches, &format!("containing '{keyword}'"));
        }
        Outcome::Checked {
            description,
            matches,
        } => ui.on_filtered(matches, &format!("occurring {description}")),
        Outcome::Reset => ui.on_reset(),
    }
    false
}
