//! Simulation outputs: the schedule, the load-balance series and helpers for reporting them.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::PlacementClass;

/// Outcome of dispatching one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleRecord {
    /// Task identifier.
    pub task_id: String,
    /// Datacenter that ran the task.
    pub datacenter_id: String,
    /// Virtual machine index within the datacenter.
    pub resource_id: usize,
    /// Placement class of the task.
    pub placement_class: PlacementClass,
    /// Arrival time of the task.
    pub arrival_time: u64,
    /// Time the machine started the task.
    pub start_time: u64,
    /// Time the machine finished the task.
    pub end_time: u64,
    /// `end_time - arrival_time`.
    pub turnaround_time: u64,
}

/// Event that triggered a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SnapshotCause {
    /// A task was routed into a pending queue.
    Submission,
    /// A task was dispatched onto a machine.
    Dispatch,
}

/// Load-balance degree of every datacenter at one simulation step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadBalanceSnapshot {
    /// Zero-based step number.
    pub step: usize,
    /// What happened at this step.
    pub cause: SnapshotCause,
    /// Task involved in the step.
    pub task_id: String,
    /// One degree per datacenter, in datacenter order.
    pub degrees: Vec<u64>,
}

/// Aggregate figures over a finished run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Number of scheduled tasks.
    pub tasks: usize,
    /// Latest end time across all tasks.
    pub makespan: u64,
    /// Mean turnaround time, 0 when nothing ran.
    pub mean_turnaround: f64,
    /// Largest turnaround time.
    pub max_turnaround: u64,
    /// Degree of each datacenter after the last step.
    pub final_degrees: Vec<u64>,
}

/// Everything a run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Identifier of this run.
    pub run_id: Uuid,
    /// Datacenter identifiers in snapshot column order.
    pub datacenter_ids: Vec<String>,
    /// Schedule in dispatch order.
    pub schedule: Vec<ScheduleRecord>,
    /// One snapshot per submission followed by one per dispatch.
    pub snapshots: Vec<LoadBalanceSnapshot>,
}

impl SimulationReport {
    /// Degree series of one datacenter across all steps, `None` for an unknown index.
    #[must_use]
    pub fn series(&self, datacenter: usize) -> Option<Vec<u64>> {
        if datacenter >= self.datacenter_ids.len() {
            return None;
        }
        // A row shorter than the datacenter list yields None.
        self.snapshots
            .iter()
            .map(|snapshot| snapshot.degrees.get(datacenter).copied())
            .collect()
    }

    /// Summary statistics for the run.
    #[must_use]
    pub fn summary(&self) -> ReportSummary {
        let tasks = self.schedule.len();
        // Widened so that large turnaround times cannot overflow the total.
        let total: u128 = self
            .schedule
            .iter()
            .map(|r| u128::from(r.turnaround_time))
            .sum();
        #[allow(clippy::cast_precision_loss)]
        let mean_turnaround = if tasks == 0 {
            0.0
        } else {
            total as f64 / tasks as f64
        };
        ReportSummary {
            tasks,
            makespan: self.schedule.iter().map(|r| r.end_time).max().unwrap_or(0),
            mean_turnaround,
            max_turnaround: self
                .schedule
                .iter()
                .map(|r| r.turnaround_time)
                .max()
                .unwrap_or(0),
            final_degrees: self
                .snapshots
                .last()
                .map_or_else(|| vec![0; self.datacenter_ids.len()], |s| s.degrees.clone()),
        }
    }

    /// Tab-separated schedule table, one row per dispatched task.
    #[must_use]
    pub fn render_schedule_table(&self) -> String {
        let mut out =
            String::from("Task ID\tVM ID\tLocation\tStart Time\tEnd Time\tTurnaround Time\n");
        for r in &self.schedule {
            let _ = writeln!(
                out,
                "{}\t{}\t{}\t{}\t{}\t{}",
                r.task_id, r.resource_id, r.placement_class, r.start_time, r.end_time, r.turnaround_time
            );
        }
        out
    }

    /// Serialize the report as pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
