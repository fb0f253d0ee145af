//! Tests for configuration validation

use edge_cloud_scheduler::config::SimulationConfig;

#[test]
fn test_default_config_is_reference_pool() {
    let cfg = SimulationConfig::default();
    assert_eq!(cfg.num_datacenters, 6);
    assert_eq!(cfg.resources_per_datacenter, 6);
    assert_eq!(cfg.edge_datacenters(), 5);
    assert!(cfg.validate().is_ok());
}

#[test]
fn test_config_requires_an_edge_datacenter() {
    let invalid = SimulationConfig {
        num_datacenters: 1,
        ..SimulationConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_invalid_resources() {
    let invalid = SimulationConfig {
        resources_per_datacenter: 0,
        ..SimulationConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_invalid_audit_capacity() {
    let invalid = SimulationConfig {
        audit_capacity: 0,
        ..SimulationConfig::default()
    };
    assert!(invalid.validate().is_err());
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "num_datacenters": 3,
        "resources_per_datacenter": 2
    }"#;

    let config = SimulationConfig::from_json_str(json).unwrap();
    assert_eq!(config.num_datacenters, 3);
    assert_eq!(config.resources_per_datacenter, 2);
    assert_eq!(config.audit_capacity, 1024);
}

#[test]
fn test_config_from_json_rejects_invalid() {
    assert!(SimulationConfig::from_json_str(r#"{"resources_per_datacenter": 0}"#).is_err());
    assert!(SimulationConfig::from_json_str("{").is_err());
}
