//! Task acquisition: JSON task lists and the interactive prompt.

use std::io::{BufRead, Read, Write};

use tracing::debug;

use crate::core::{SchedulerError, Task};
use crate::runtime::api::{TaskSubmission, default_task_id};

/// Read a JSON array of [`TaskSubmission`] and validate every entry, keeping input order.
pub fn read_tasks_json<R: Read>(reader: R) -> Result<Vec<Task>, SchedulerError> {
    let submissions: Vec<TaskSubmission> = serde_json::from_reader(reader)
        .map_err(|e| SchedulerError::InvalidInput(format!("task list: {e}")))?;
    let tasks = submissions
        .into_iter()
        .enumerate()
        .map(|(position, submission)| submission.into_task(position))
        .collect::<Result<Vec<_>, _>>()?;
    debug!(count = tasks.len(), "loaded tasks from json");
    Ok(tasks)
}

/// Ask for a task count and then each task's parameters, one answer per line.
pub fn prompt_tasks<R: BufRead, W: Write>(
    mut input: R,
    mut output: W,
) -> Result<Vec<Task>, SchedulerError> {
    let count = ask(&mut input, &mut output, "Enter the number of tasks: ")?;
    let count = usize::try_from(count)
        .map_err(|_| SchedulerError::InvalidInput(format!("task count {count} is negative")))?;

    // The count is untrusted, so the vector grows with the answers actually read.
    let mut tasks = Vec::new();
    for position in 0..count {
        let id = default_task_id(position);
        let arrival_time = ask(
            &mut input,
            &mut output,
            &format!("Enter the arrival time for {id}: "),
        )?;
        let service_time = ask(
            &mut input,
            &mut output,
            &format!("Enter the service time for {id}: "),
        )?;
        let latency_requirement = ask(
            &mut input,
            &mut output,
            &format!("Enter the latency requirement for {id} (1-5): "),
        )?;
        let submission = TaskSubmission {
            id: Some(id),
            arrival_time,
            service_time,
            latency_requirement,
        };
        tasks.push(submission.into_task(position)?);
    }
    Ok(tasks)
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, prompt: &str) -> Result<i64, SchedulerError> {
    output
        .write_all(prompt.as_bytes())
        .and_then(|()| output.flush())
        .map_err(|e| SchedulerError::InvalidInput(format!("prompt: {e}")))?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| SchedulerError::InvalidInput(format!("read: {e}")))?;
    if read == 0 {
        return Err(SchedulerError::InvalidInput(
            "unexpected end of input".into(),
        ));
    }
    let answer = line.trim();
    answer
        .parse()
        .map_err(|_| SchedulerError::InvalidInput(format!("`{answer}` is not an integer")))
}
