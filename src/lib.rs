//! tusk - a conversational task manager for your terminal
//!
//! Type commands as lines of text (`todo Buy milk`,
//! `deadline Submit report /by 31/12/2025`, `mark one`); tusk parses
//! them, keeps the list grouped by task type, and saves to a flat text
//! file after every change.

pub mod cli;
pub mod domain;
pub mod engine;
pub mod error;
pub mod parse;
pub mod storage;

pub use domain::{Category, DateFilter, Task, TaskKind, TaskStore, TemporalValue};
pub use engine::{Engine, Outcome};
pub use error::EngineError;
pub use parse::Command;
