//! Core domain types: tasks, temporal values and the ordered store.

mod store;
mod task;
mod temporal;

pub use store::{DateFilter, TaskStore};
pub use task::{validate_event_range, Category, Task, TaskKind};
pub use temporal::TemporalValue;
