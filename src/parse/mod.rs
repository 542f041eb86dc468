//! Input parsing: the command grammar and the number-word parser.

mod command;
pub mod number;

pub use command::{parse, Command};
