//! Core scheduling abstractions: tasks, machines, datacenters, routing and the simulation driver.

pub mod audit;
pub mod datacenter;
pub mod error;
pub mod report;
pub mod resource;
pub mod routing;
pub mod simulation;
pub mod task;

pub use audit::{AuditAction, AuditEvent, AuditSink, InMemoryAuditSink, SharedAuditSink, build_audit_event};
pub use datacenter::{Datacenter, TaskQueue};
pub use error::{AppResult, SchedulerError};
pub use report::{LoadBalanceSnapshot, ReportSummary, ScheduleRecord, SimulationReport, SnapshotCause};
pub use resource::VirtualMachine;
pub use routing::{CLOUD_DATACENTER, LatencyAwareRouting, RoutingPolicy};
pub use simulation::{Simulation, SimulationPhase};
pub use task::{PlacementClass, PriorityKey, Task};
