//! # Edge/Cloud Scheduler
//!
//! A deterministic simulator for placing tasks across a fixed pool of datacenters
//! and balancing load between their virtual machines.
//!
//! Each task carries an arrival time, a service time and a latency requirement
//! from 1 (most urgent) to 5. Requirements up to 3 make a task an *edge* task,
//! the rest are *cloud* tasks. The simulator works in two strictly sequential
//! phases:
//!
//! 1. **Submission** — every task, in arrival order, is routed by a
//!    [`RoutingPolicy`](core::RoutingPolicy). Cloud tasks go to datacenter 0;
//!    edge tasks go to the edge datacenter with the smallest load-balance
//!    degree. A load-balance snapshot is taken after each submission.
//! 2. **Draining** — datacenters are visited in index order. Each pops its most
//!    urgent task (lowest latency requirement, then shortest service time) and
//!    runs it on its least-loaded virtual machine, producing a
//!    [`ScheduleRecord`](core::ScheduleRecord) and another snapshot.
//!
//! The *load-balance degree* of a datacenter is the spread between its busiest
//! and idlest machine clock.
//!
//! ## Example
//!
//! ```rust
//! use edge_cloud_scheduler::builders::SimulationBuilder;
//! use edge_cloud_scheduler::config::SimulationConfig;
//! use edge_cloud_scheduler::core::Task;
//!
//! let config = SimulationConfig {
//!     num_datacenters: 2,
//!     resources_per_datacenter: 2,
//!     ..SimulationConfig::default()
//! };
//! let tasks = vec![
//!     Task::new("T0", 0, 5, 1).unwrap(),
//!     Task::new("T1", 0, 3, 5).unwrap(),
//! ];
//!
//! let report = SimulationBuilder::new(config).build().unwrap().run(tasks).unwrap();
//! assert_eq!(report.summary().final_degrees, vec![3, 5]);
//! print!("{}", report.render_schedule_table());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Core scheduling abstractions: tasks, machines, datacenters, routing, simulation.
pub mod core;
/// Configuration models for simulation runs.
pub mod config;
/// Builders to construct simulations from configuration.
pub mod builders;
/// Infrastructure adapters for pending queues.
pub mod infra;
/// Runtime adapters: submission models and task input sources.
pub mod runtime;
/// Shared utilities.
pub mod util;
