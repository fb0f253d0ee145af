//! Runtime adapters: task submission models and input sources.

pub mod api;
pub mod input;

pub use api::{TaskSubmission, default_task_id};
pub use input::{prompt_tasks, read_tasks_json};
