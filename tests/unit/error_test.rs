//! Tests for error types

use edge_cloud_scheduler::core::{SchedulerError, SimulationPhase};

#[test]
fn test_invalid_task_parameter_error() {
    let err = SchedulerError::InvalidTaskParameter("Task-3: service_time must be greater than 0".to_string());
    assert_eq!(
        format!("{}", err),
        "invalid task parameter: Task-3: service_time must be greater than 0"
    );
}

#[test]
fn test_empty_queue_dispatch_error() {
    let err = SchedulerError::EmptyQueueDispatch("Datacenter-2".to_string());
    assert_eq!(format!("{}", err), "dispatch from empty queue: Datacenter-2");
}

#[test]
fn test_configuration_error() {
    let err = SchedulerError::Configuration("no edge datacenter configured".to_string());
    assert_eq!(format!("{}", err), "configuration error: no edge datacenter configured");
}

#[test]
fn test_invalid_phase_error() {
    let err = SchedulerError::InvalidPhase {
        expected: SimulationPhase::Submitting,
        actual: SimulationPhase::Done,
    };
    assert_eq!(format!("{}", err), "invalid phase: expected submitting, found done");
}

#[test]
fn test_invalid_input_error() {
    let err = SchedulerError::InvalidInput("unexpected end of input".to_string());
    assert_eq!(format!("{}", err), "invalid input: unexpected end of input");
}
