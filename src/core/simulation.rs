//! Two-phase batch simulation driver.
//!
//! A run first routes every task into a datacenter's pending queue
//! ([`SimulationPhase::Submitting`]), then drains the datacenters one after the
//! other in index order ([`SimulationPhase::Draining`]). No dispatch happens
//! before the last submission, so every datacenter still reports a degree of
//! zero while tasks are routed and the default policy sends all edge tasks of a
//! run to the first edge datacenter.
//!
//! ```rust
//! use edge_cloud_scheduler::config::SimulationConfig;
//! use edge_cloud_scheduler::core::{Simulation, Task};
//!
//! let config = SimulationConfig::default();
//! let tasks = vec![
//!     Task::new("Task-0", 0, 5, 1).unwrap(),
//!     Task::new("Task-1", 0, 3, 5).unwrap(),
//! ];
//! let report = Simulation::new(&config).unwrap().run(tasks).unwrap();
//! assert_eq!(report.schedule.len(), 2);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::builders::build_datacenters;
use crate::config::SimulationConfig;
use crate::core::{
    build_audit_event, AuditAction, Datacenter, LatencyAwareRouting, LoadBalanceSnapshot,
    RoutingPolicy, ScheduleRecord, SchedulerError, SharedAuditSink, SimulationReport,
    SnapshotCause, Task,
};

/// Lifecycle of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimulationPhase {
    /// Tasks are being routed into pending queues.
    Submitting,
    /// Pending queues are being dispatched onto machines.
    Draining,
    /// Every queue is empty.
    Done,
}

impl fmt::Display for SimulationPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Submitting => "submitting",
            Self::Draining => "draining",
            Self::Done => "done",
        };
        f.write_str(name)
    }
}

/// Owner of every datacenter in a run and of the outputs it records.
pub struct Simulation<R = LatencyAwareRouting> {
    run_id: Uuid,
    phase: SimulationPhase,
    datacenters: Vec<Datacenter>,
    policy: R,
    schedule: Vec<ScheduleRecord>,
    snapshots: Vec<LoadBalanceSnapshot>,
    audit: Option<SharedAuditSink>,
}

impl Simulation<LatencyAwareRouting> {
    /// Build a simulation with the default routing policy.
    pub fn new(config: &SimulationConfig) -> Result<Self, SchedulerError> {
        Self::with_policy(config, LatencyAwareRouting)
    }
}

impl<R: RoutingPolicy> Simulation<R> {
    /// Build a simulation from configuration with a custom routing policy.
    pub fn with_policy(config: &SimulationConfig, policy: R) -> Result<Self, SchedulerError> {
        Ok(Self::from_datacenters(build_datacenters(config)?, policy))
    }

    /// Assemble a simulation from already-constructed datacenters.
    pub fn from_datacenters(datacenters: Vec<Datacenter>, policy: R) -> Self {
        Self {
            run_id: Uuid::new_v4(),
            phase: SimulationPhase::Submitting,
            datacenters,
            policy,
            schedule: Vec::new(),
            snapshots: Vec::new(),
            audit: None,
        }
    }

    /// Attach an audit sink receiving every routing and dispatch decision.
    #[must_use]
    pub fn with_audit(mut self, audit: SharedAuditSink) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Identifier of this run.
    #[must_use]
    pub const fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> SimulationPhase {
        self.phase
    }

    /// Datacenters in fixed order; index 0 is the cloud.
    #[must_use]
    pub fn datacenters(&self) -> &[Datacenter] {
        &self.datacenters
    }

    /// Current load-balance degree of every datacenter.
    #[must_use]
    pub fn degrees(&self) -> Vec<u64> {
        self.datacenters
            .iter()
            .map(Datacenter::load_balance_degree)
            .collect()
    }

    /// Route one task into a pending queue and record a snapshot.
    ///
    /// Returns the index of the receiving datacenter.
    pub fn submit(&mut self, task: Task) -> Result<usize, SchedulerError> {
        self.expect_phase(SimulationPhase::Submitting)?;

        let target = self.policy.route(&task, &self.datacenters)?;
        let datacenter = self.datacenters.get_mut(target).ok_or_else(|| {
            SchedulerError::Configuration(format!(
                "policy {} routed to unknown datacenter {target}",
                self.policy.name()
            ))
        })?;

        debug!(
            task_id = task.id(),
            placement = %task.placement_class(),
            datacenter = datacenter.id(),
            "routed task"
        );
        let task_id = task.id().to_owned();
        let datacenter_id = datacenter.id().to_owned();
        let detail = format!(
            "placement={} degree={}",
            task.placement_class(),
            datacenter.load_balance_degree()
        );
        datacenter.enqueue(task);

        self.record(AuditAction::Route, &task_id, &datacenter_id, detail);
        self.record_snapshot(SnapshotCause::Submission, task_id);
        Ok(target)
    }

    /// Dispatch every pending task, datacenter by datacenter in index order.
    pub fn drain(&mut self) -> Result<(), SchedulerError> {
        self.expect_phase(SimulationPhase::Submitting)?;
        self.phase = SimulationPhase::Draining;
        info!(run_id = %self.run_id, submitted = self.snapshots.len(), "draining datacenters");

        for index in 0..self.datacenters.len() {
            while self.datacenters[index].has_pending() {
                let record = self.datacenters[index].dispatch_next()?;
                let task_id = record.task_id.clone();
                let datacenter_id = record.datacenter_id.clone();
                let detail = format!(
                    "vm={} start={} end={}",
                    record.resource_id, record.start_time, record.end_time
                );
                self.schedule.push(record);

                self.record(AuditAction::Dispatch, &task_id, &datacenter_id, detail);
                self.record_snapshot(SnapshotCause::Dispatch, task_id);
            }
        }

        self.phase = SimulationPhase::Done;
        info!(run_id = %self.run_id, dispatched = self.schedule.len(), "simulation done");
        Ok(())
    }

    /// Finish the run, draining first if that has not happened yet.
    pub fn finish(mut self) -> Result<SimulationReport, SchedulerError> {
        if self.phase == SimulationPhase::Submitting {
            self.drain()?;
        }
        Ok(SimulationReport {
            run_id: self.run_id,
            datacenter_ids: self
                .datacenters
                .iter()
                .map(|dc| dc.id().to_owned())
                .collect(),
            schedule: self.schedule,
            snapshots: self.snapshots,
        })
    }

    /// Submit every task in arrival order, drain, and return the report.
    pub fn run(
        mut self,
        tasks: impl IntoIterator<Item = Task>,
    ) -> Result<SimulationReport, SchedulerError> {
        info!(run_id = %self.run_id, policy = self.policy.name(), "submitting tasks");
        for task in tasks {
            self.submit(task)?;
        }
        self.finish()
    }

    fn expect_phase(&self, expected: SimulationPhase) -> Result<(), SchedulerError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(SchedulerError::InvalidPhase {
                expected,
                actual: self.phase,
            })
        }
    }

    fn record_snapshot(&mut self, cause: SnapshotCause, task_id: String) {
        let snapshot = LoadBalanceSnapshot {
            step: self.snapshots.len(),
            cause,
            task_id,
            degrees: self.degrees(),
        };
        self.snapshots.push(snapshot);
    }

    fn record(&self, action: AuditAction, task_id: &str, datacenter_id: &str, detail: String) {
        if let Some(audit) = &self.audit {
            let event = build_audit_event(
                self.run_id,
                self.snapshots.len(),
                task_id,
                datacenter_id,
                action,
                Some(detail),
            );
            audit.lock().record(event);
        }
    }
}
