//! Tests for builder modules

use edge_cloud_scheduler::builders::{SimulationBuilder, build_datacenters};
use edge_cloud_scheduler::config::SimulationConfig;
use edge_cloud_scheduler::core::{
    AuditAction, Datacenter, RoutingPolicy, SchedulerError, SimulationPhase, Task,
};

fn config(datacenters: usize, resources: usize) -> SimulationConfig {
    SimulationConfig {
        num_datacenters: datacenters,
        resources_per_datacenter: resources,
        ..SimulationConfig::default()
    }
}

/// Sends every task to the last datacenter.
struct LastDatacenter;

impl RoutingPolicy for LastDatacenter {
    fn route(&self, _task: &Task, datacenters: &[Datacenter]) -> Result<usize, SchedulerError> {
        Ok(datacenters.len() - 1)
    }

    fn name(&self) -> &'static str {
        "last"
    }
}

#[test]
fn test_builder_defaults() {
    let builder = SimulationBuilder::new(config(4, 3));
    assert_eq!(builder.config().num_datacenters, 4);

    let sim = builder.build().unwrap();
    assert_eq!(sim.phase(), SimulationPhase::Submitting);
    assert_eq!(sim.datacenters().len(), 4);
    assert_eq!(sim.datacenters()[0].id(), "Datacenter-0");
    assert!(sim.datacenters().iter().all(|dc| dc.machines().len() == 3));
}

#[test]
fn test_builder_rejects_invalid_config() {
    let err = SimulationBuilder::new(config(1, 3)).build().err().unwrap();
    assert!(matches!(err, SchedulerError::Configuration(_)));
    assert!(build_datacenters(&config(3, 0)).is_err());
}

#[test]
fn test_builder_custom_policy() {
    let sim = SimulationBuilder::new(config(3, 1))
        .with_policy(LastDatacenter)
        .build()
        .unwrap();
    let report = sim
        .run(vec![
            Task::new("a", 0, 2, 1).unwrap(),
            Task::new("b", 0, 2, 5).unwrap(),
        ])
        .unwrap();
    assert!(report.schedule.iter().all(|r| r.datacenter_id == "Datacenter-2"));
}

#[test]
fn test_builder_in_memory_audit() {
    let (builder, sink) = SimulationBuilder::new(config(2, 1)).with_in_memory_audit();
    let report = builder
        .build()
        .unwrap()
        .run(vec![Task::new("a", 0, 2, 1).unwrap()])
        .unwrap();

    let events = sink.lock().events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, AuditAction::Route);
    assert_eq!(events[1].action, AuditAction::Dispatch);
    assert_eq!(events[1].datacenter, "Datacenter-1");
    assert_eq!(events[0].detail.as_deref(), Some("placement=edge degree=0"));
    assert_eq!(events[1].detail.as_deref(), Some("vm=0 start=0 end=2"));
    assert!(events.iter().all(|e| e.run_id == report.run_id));
}
