//! Tests for runtime input adapters

use edge_cloud_scheduler::config::SimulationConfig;
use edge_cloud_scheduler::core::{SchedulerError, Simulation};
use edge_cloud_scheduler::runtime::{prompt_tasks, read_tasks_json};

#[test]
fn test_json_tasks_feed_a_simulation() {
    let json = r#"[
        {"arrival_time": 0, "service_time": 5, "latency_requirement": 1},
        {"arrival_time": 0, "service_time": 3, "latency_requirement": 5},
        {"arrival_time": 1, "service_time": 2, "latency_requirement": 2}
    ]"#;
    let tasks = read_tasks_json(json.as_bytes()).unwrap();
    let report = Simulation::new(&SimulationConfig::default())
        .unwrap()
        .run(tasks)
        .unwrap();
    assert_eq!(report.schedule.len(), 3);
    assert_eq!(report.snapshots.len(), 6);
}

#[test]
fn test_prompt_matches_json() {
    let prompted = prompt_tasks("1\n3\n4\n2\n".as_bytes(), Vec::new()).unwrap();
    let loaded = read_tasks_json(
        r#"[{"arrival_time": 3, "service_time": 4, "latency_requirement": 2}]"#.as_bytes(),
    )
    .unwrap();
    assert_eq!(prompted, loaded);
}

#[test]
fn test_json_tasks_overflowing_the_clock_fail_cleanly() {
    let json = r#"[
        {"arrival_time": 9223372036854775807, "service_time": 9223372036854775807, "latency_requirement": 5},
        {"arrival_time": 0, "service_time": 9223372036854775807, "latency_requirement": 5}
    ]"#;
    let tasks = read_tasks_json(json.as_bytes()).unwrap();
    let config = SimulationConfig {
        num_datacenters: 2,
        resources_per_datacenter: 1,
        ..SimulationConfig::default()
    };
    let err = Simulation::new(&config).unwrap().run(tasks).unwrap_err();
    assert!(matches!(err, SchedulerError::InvalidTaskParameter(_)));
}
