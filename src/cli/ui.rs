//! Console presentation
//!
//! The engine hands plain data across the [`Presenter`] boundary; all
//! coloring, wording and the optional typing effect live here.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use crossterm::style::{Color, Stylize};

use crate::domain::{Category, Task};
use crate::error::EngineError;
use crate::storage::LoadWarning;

/// Notification boundary between the engine and the user. Implementors
/// decide how (and whether) to render each event; the engine never
/// formats text itself.
pub trait Presenter {
    fn on_welcome(&mut self);
    fn on_goodbye(&mut self);
    fn on_help(&mut self);
    fn on_task_added(&mut self, task: &Task, kind: Category, total: usize);
    fn on_task_marked(&mut self, index: usize, done: bool, task: &Task);
    fn on_task_deleted(&mut self, index: usize, task: &Task);
    fn on_listed(&mut self, tasks: &[Task]);
    fn on_filtered(&mut self, matches: &[Task], description: &str);
    fn on_reset(&mut self);
    fn on_error(&mut self, error: &EngineError);
    fn on_load_warnings(&mut self, warnings: &[LoadWarning]);
}

const HELP: &str = "\
Here is what I understand:

  Adding tasks
    todo <description>                           add a todo
    deadline <description> /by <date>            add a deadline
    event <description> /from <start> /to <end>  add an event
    <description>                                anything else becomes a todo

  Viewing tasks
    list                         show every task, grouped by type
    find <keyword>               show tasks whose name contains the keyword
    check [before|after] <date>  show tasks on, before or after a date

  Changing tasks
    mark <index>      mark a task as done ('mark one' works too)
    unmark <index>    mark a task as not done
    delete <index>    remove a task
    reset             remove every task

  Leaving
    bye               save and exit

Dates read day-first: 2/12/2019, 2-12-2019 6:00PM, 2 12 2019 1800 ...";

/// Interactive console output with optional color and typing effect.
pub struct ConsoleUi {
    color: bool,
    typing_delay: Duration,
}

impl ConsoleUi {
    /// Creates a console presenter. `typing_delay_ms` of 0 prints
    /// normally; anything larger prints character by character.
    pub fn new(color: bool, typing_delay_ms: u64) -> Self {
        Self {
            color,
            typing_delay: Duration::from_millis(typing_delay_ms),
        }
    }

    fn say(&self, text: &str) {
        if self.typing_delay.is_zero() {
            println!("{text}");
            return;
        }
        let mut stdout = io::stdout();
        for c in text.chars() {
            print!("{c}");
            let _ = stdout.flush();
            thread::sleep(self.typing_delay);
        }
        println!();
    }

    fn paint(&self, text: &str, color: Color) -> String {
        if self.color {
            format!("{}", text.with(color))
        } else {
            text.to_string()
        }
    }

    fn say_task_lines(&self, tasks: &[Task]) {
        for (i, task) in tasks.iter().enumerate() {
            self.say(&render_line(i + 1, task));
        }
    }
}

impl Presenter for ConsoleUi {
    fn on_welcome(&mut self) {
        self.say(&self.paint("tusk — your tasks, one line at a time", Color::Cyan));
        self.say("Type 'commands' to see what I can do!");
    }

    fn on_goodbye(&mut self) {
        self.say(&self.paint("Goodbye! Your tasks are saved.", Color::Cyan));
    }

    fn on_help(&mut self) {
        self.say(HELP);
    }

    fn on_task_added(&mut self, task: &Task, kind: Category, total: usize) {
        self.say(&format!(
            "{} {}",
            self.paint(&format!("Added {}:", kind.label()), Color::Green),
            task
        ));
        self.say(&format!("You now have {total} task(s) on the list."));
    }

    fn on_task_marked(&mut self, index: usize, done: bool, task: &Task) {
        let verdict = if done {
            "Nice! Marked as done:"
        } else {
            "OK, marked as not done yet:"
        };
        self.say(&format!(
            "{} {}",
            self.paint(verdict, Color::Green),
            render_line(index, task)
        ));
    }

    fn on_task_deleted(&mut self, index: usize, task: &Task) {
        self.say(&format!(
            "{} {}",
            self.paint(&format!("Removed task {index}:"), Color::Green),
            task
        ));
    }

    fn on_listed(&mut self, tasks: &[Task]) {
        if tasks.is_empty() {
            self.say("Your list is empty. Add something!");
            return;
        }
        self.say(&self.paint("Here is your list:", Color::Cyan));
        self.say_task_lines(tasks);
    }

    fn on_filtered(&mut self, matches: &[Task], description: &str) {
        if matches.is_empty() {
            self.say(&format!("No tasks found {description}!"));
            return;
        }
        self.say(&self.paint(&format!("Tasks {description}:"), Color::Cyan));
        self.say_task_lines(matches);
    }

    fn on_reset(&mut self) {
        self.say("All tasks cleared. A clean slate!");
    }

    fn on_error(&mut self, error: &EngineError) {
        // Errors skip the typing effect; they should land immediately.
        eprintln!("{}", self.paint(&error.to_string(), Color::Red));
    }

    fn on_load_warnings(&mut self, warnings: &[LoadWarning]) {
        for warning in warnings {
            eprintln!(
                "{}",
                self.paint(
                    &format!(
                        "Skipped line {} of the task file ({}): {}",
                        warning.line, warning.reason, warning.content
                    ),
                    Color::Yellow
                )
            );
        }
    }
}

fn render_line(position: usize, task: &Task) -> String {
    let check = if task.is_done() { "[x]" } else { "[ ]" };
    format!("{position}. {check} {task}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TemporalValue;

    #[test]
    fn line_rendering_shows_status_and_details() {
        let todo = Task::todo("Buy milk");
        assert_eq!(render_line(2, &todo), "2. [ ] Buy milk");

        let due = TemporalValue::parse("31/12/2025 6:00PM").unwrap();
        let deadline = Task::deadline("Submit report", due).with_done(true);
        assert_eq!(
            render_line(1, &deadline),
            "1. [x] Submit report (due by: 31 Dec 2025, 6:00PM)"
        );
    }

    #[test]
    fn paint_is_a_no_op_without_color() {
        let ui = ConsoleUi::new(false, 0);
        assert_eq!(ui.paint("hello", Color::Red), "hello");

        let ui = ConsoleUi::new(true, 0);
        assert_ne!(ui.paint("hello", Color::Red), "hello");
    }
}
