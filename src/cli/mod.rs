//! # Command-Line Interface
//!
//! The outer shell of the program: argument parsing, the interactive
//! line-reading loop, and console presentation. The engine underneath
//! never prints; everything user-visible flows through the
//! [`Presenter`] boundary so the wording and styling stay in one place.
//!
//! Call [`run()`] to parse arguments and start a session on stdin.

mod app;
mod repl;
mod ui;

pub use app::{run, Cli};
pub use ui::{ConsoleUi, Presenter};
