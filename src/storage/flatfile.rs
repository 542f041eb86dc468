//! Flat-file task persistence
//!
//! One task per line, pipe-delimited: `T | 0 | name`,
//! `D | 1 | name | 31/12/2025 1800`, `E | 0 | name | from | to`.
//! Temporal fields use the storage form from
//! [`TemporalValue::storage_form`], so every saved line re-parses.
//!
//! Saves rewrite the whole file through a temp file + rename, with file
//! locking for concurrent access safety. Loads never fail on content: a
//! bad line becomes a [`LoadWarning`] and is skipped.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use crate::domain::{Task, TaskKind, TemporalValue};
use crate::error::EngineError;

/// Handle to the task file.
pub struct Database {
    path: PathBuf,
}

/// A saved line that could not be turned back into a task.
#[derive(Debug)]
pub struct LoadWarning {
    /// 1-based line number in the file.
    pub line: usize,
    /// The offending line, verbatim.
    pub content: String,
    /// Why it was skipped.
    pub reason: String,
}

/// Result of loading the task file: the tasks that parsed, plus a
/// diagnostic list of skipped lines.
#[derive(Debug, Default)]
pub struct Loaded {
    pub tasks: Vec<Task>,
    pub warnings: Vec<LoadWarning>,
}

impl Database {
    /// Creates a database handle for the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the path to the task file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every task to the file, one line per task, replacing the
    /// previous contents.
    pub fn save(&self, tasks: &[Task]) -> Result<(), EngineError> {
        self.write_all(tasks)
            .map_err(|e| EngineError::Persist(format!("{e:#}")))
    }

    /// Reads the file back into tasks. A missing file is an empty list;
    /// unparseable lines are skipped and reported as warnings.
    pub fn load(&self) -> Result<Loaded, EngineError> {
        self.read_all()
            .map_err(|e| EngineError::Persist(format!("{e:#}")))
    }

    fn write_all(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
            }
        }

        // Write to a temp file first, then rename over the real file so
        // a crash mid-write cannot truncate the saved list.
        let mut temp_name = self.path.as_os_str().to_os_string();
        temp_name.push(".tmp");
        let temp_path = PathBuf::from(temp_name);

        {
            let file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&temp_path)
                .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;

            file.lock_exclusive()
                .context("Failed to acquire write lock on task file")?;

            let mut writer = BufWriter::new(&file);
            for task in tasks {
                writeln!(writer, "{}", encode_task(task)).context("Failed to write task")?;
            }
            writer.flush().context("Failed to flush task file")?;
        }

        fs::rename(&temp_path, &self.path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                self.path.display()
            )
        })?;

        Ok(())
    }

    fn read_all(&self) -> Result<Loaded> {
        if !self.path.exists() {
            return Ok(Loaded::default());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open task file: {}", self.path.display()))?;
        file.lock_shared()
            .context("Failed to acquire read lock on task file")?;

        let reader = BufReader::new(&file);
        let mut loaded = Loaded::default();

        for (line_num, line) in reader.lines().enumerate() {
            let line = line.with_context(|| format!("Failed to read line {}", line_num + 1))?;
            let line = line.trim_end_matches('\r');
            if line.trim().is_empty() {
                continue;
            }
            match decode_task(line) {
                Ok(task) => loaded.tasks.push(task),
                Err(e) => loaded.warnings.push(LoadWarning {
                    line: line_num + 1,
                    content: line.to_string(),
                    reason: e.to_string(),
                }),
            }
        }

        Ok(loaded)
    }
}

/// Serializes one task to its saved line.
pub fn encode_task(task: &Task) -> String {
    let done = if task.is_done() { "1" } else { "0" };
    match task.kind() {
        TaskKind::Todo => format!("T | {done} | {}", task.name()),
        TaskKind::Deadline { due } => {
            format!("D | {done} | {} | {}", task.name(), due.storage_form())
        }
        TaskKind::Event { start, end } => format!(
            "E | {done} | {} | {} | {}",
            task.name(),
            start.storage_form(),
            end.storage_form()
        ),
    }
}

/// Parses one saved line back into a task. Goes through the ordinary
/// task constructors, so invariants (like the event range) hold for
/// loaded tasks too.
///
/// Names are free text and may contain the delimiter themselves, so
/// the temporal fields are taken from the right and the name keeps
/// whatever remains. Every line [`encode_task`] can produce re-parses.
pub fn decode_task(line: &str) -> Result<Task, EngineError> {
    let bad = |reason: String| EngineError::LoadParse(reason);

    let mut fields = line.splitn(3, " | ");
    let (Some(tag), Some(done), Some(rest)) = (fields.next(), fields.next(), fields.next())
    else {
        return Err(bad("expected at least 3 fields".to_string()));
    };
    let done = done == "1";

    match tag {
        "T" => Ok(Task::todo(rest).with_done(done)),
        "D" => {
            let (name, due_text) = rest
                .rsplit_once(" | ")
                .ok_or_else(|| bad("wrong field count for tag 'D'".to_string()))?;
            let due = TemporalValue::parse(due_text.trim()).map_err(|e| bad(e.to_string()))?;
            Ok(Task::deadline(name, due).with_done(done))
        }
        "E" => {
            let (front, end_text) = rest
                .rsplit_once(" | ")
                .ok_or_else(|| bad("wrong field count for tag 'E'".to_string()))?;
            let (name, start_text) = front
                .rsplit_once(" | ")
                .ok_or_else(|| bad("wrong field count for tag 'E'".to_string()))?;
            let start = TemporalValue::parse(start_text.trim()).map_err(|e| bad(e.to_string()))?;
            let end = TemporalValue::parse(end_text.trim()).map_err(|e| bad(e.to_string()))?;
            Ok(Task::event(name, start, end)
                .map_err(|e| bad(e.to_string()))?
                .with_done(done))
        }
        tag => Err(bad(format!("unknown task tag '{tag}'"))),
    }
}
