//! Request models for handing tasks to a simulation from outside the crate.

use serde::{Deserialize, Serialize};

use crate::core::{SchedulerError, Task};

/// Task submission payload as received from an external source.
///
/// Fields are signed so that out-of-range input reaches validation instead of
/// failing deserialization with an unhelpful message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskSubmission {
    /// Task identifier; `Task-{position}` is used when absent.
    #[serde(default)]
    pub id: Option<String>,
    /// Arrival time, must not be negative.
    pub arrival_time: i64,
    /// Service time, must be positive.
    pub service_time: i64,
    /// Latency requirement, 1 (most urgent) to 5.
    pub latency_requirement: i64,
}

impl TaskSubmission {
    /// Validate and convert into a [`Task`], naming it after `position` when no id was given.
    pub fn into_task(self, position: usize) -> Result<Task, SchedulerError> {
        let id = self.id.unwrap_or_else(|| default_task_id(position));
        let arrival_time = u64::try_from(self.arrival_time).map_err(|_| {
            SchedulerError::InvalidTaskParameter(format!(
                "{id}: arrival_time {} must not be negative",
                self.arrival_time
            ))
        })?;
        let service_time = u64::try_from(self.service_time).map_err(|_| {
            SchedulerError::InvalidTaskParameter(format!(
                "{id}: service_time {} must be greater than 0",
                self.service_time
            ))
        })?;
        let latency_requirement = u8::try_from(self.latency_requirement).map_err(|_| {
            SchedulerError::InvalidTaskParameter(format!(
                "{id}: latency_requirement {} outside 1..=5",
                self.latency_requirement
            ))
        })?;
        Task::new(id, arrival_time, service_time, latency_requirement)
    }
}

impl TryFrom<TaskSubmission> for Task {
    type Error = SchedulerError;

    fn try_from(submission: TaskSubmission) -> Result<Self, Self::Error> {
        submission.into_task(0)
    }
}

/// Identifier given to the task at `position` when the input names none.
#[must_use]
pub fn default_task_id(position: usize) -> String {
    format!("Task-{position}")
}
