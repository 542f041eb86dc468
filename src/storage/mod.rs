//! Persistence layer: the flat task file and user configuration.
//!
//! | Data   | Format                | Location                  |
//! |--------|-----------------------|---------------------------|
//! | Tasks  | pipe-delimited lines  | `tasks.txt` (configurable)|
//! | Config | TOML                  | `tusk.toml` / config dir  |
//!
//! Task writes are atomic (temp file + rename) and guarded by file
//! locks; loads tolerate unparseable lines, skipping them with a
//! recorded warning.

mod config;
mod flatfile;

pub use config::Config;
pub use flatfile::{decode_task, encode_task, Database, LoadWarning, Loaded};
