//! Tests for audit sink

use edge_cloud_scheduler::core::{AuditAction, AuditSink, InMemoryAuditSink, build_audit_event};
use uuid::Uuid;

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);
    let run_id = Uuid::new_v4();

    let event = build_audit_event(
        run_id,
        0,
        "Task-0",
        "Datacenter-1",
        AuditAction::Route,
        Some("edge".to_string()),
    );

    sink.record(event);
    assert_eq!(sink.events().len(), 1);

    let events = sink.events();
    assert_eq!(events[0].run_id, run_id);
    assert_eq!(events[0].task_id, "Task-0");
    assert_eq!(events[0].action, AuditAction::Route);
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);
    let run_id = Uuid::new_v4();

    sink.record(build_audit_event(run_id, 0, "t0", "Datacenter-0", AuditAction::Route, None));
    sink.record(build_audit_event(run_id, 1, "t1", "Datacenter-0", AuditAction::Route, None));
    sink.record(build_audit_event(run_id, 2, "t0", "Datacenter-0", AuditAction::Dispatch, None));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].step, 1); // First one popped
    assert_eq!(events[1].step, 2);
}

#[test]
fn test_build_audit_event() {
    let run_id = Uuid::new_v4();
    let event = build_audit_event(
        run_id,
        7,
        "Task-4",
        "Datacenter-3",
        AuditAction::Dispatch,
        Some("vm 2".to_string()),
    );

    assert_eq!(event.step, 7);
    assert_eq!(event.task_id, "Task-4");
    assert_eq!(event.datacenter, "Datacenter-3");
    assert_eq!(event.action, AuditAction::Dispatch);
    assert_eq!(event.detail, Some("vm 2".to_string()));
}
