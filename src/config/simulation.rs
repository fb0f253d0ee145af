//! Simulation configuration structures.

use serde::{Deserialize, Serialize};

/// Environment variable overriding [`SimulationConfig::num_datacenters`].
pub const ENV_DATACENTERS: &str = "EDGE_SIM_DATACENTERS";
/// Environment variable overriding [`SimulationConfig::resources_per_datacenter`].
pub const ENV_RESOURCES: &str = "EDGE_SIM_RESOURCES";
/// Environment variable overriding [`SimulationConfig::audit_capacity`].
pub const ENV_AUDIT_CAPACITY: &str = "EDGE_SIM_AUDIT_CAPACITY";

/// Shape of the datacenter pool for one simulation run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Total datacenters; index 0 is the cloud, the rest are edge.
    pub num_datacenters: usize,
    /// Virtual machines in every datacenter.
    pub resources_per_datacenter: usize,
    /// Events retained by the in-memory audit log.
    pub audit_capacity: usize,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            num_datacenters: 6,
            resources_per_datacenter: 6,
            audit_capacity: 1024,
        }
    }
}

impl SimulationConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.num_datacenters < 2 {
            return Err("num_datacenters must be at least 2 (one cloud, one edge)".into());
        }
        if self.resources_per_datacenter == 0 {
            return Err("resources_per_datacenter must be greater than 0".into());
        }
        if self.audit_capacity == 0 {
            return Err("audit_capacity must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Defaults overridden by `EDGE_SIM_*` variables from the environment or a `.env` file.
    pub fn from_env() -> Result<Self, String> {
        let mut cfg = Self::default();
        if let Some(v) = env_usize(ENV_DATACENTERS)? {
            cfg.num_datacenters = v;
        }
        if let Some(v) = env_usize(ENV_RESOURCES)? {
            cfg.resources_per_datacenter = v;
        }
        if let Some(v) = env_usize(ENV_AUDIT_CAPACITY)? {
            cfg.audit_capacity = v;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Number of edge datacenters.
    #[must_use]
    pub const fn edge_datacenters(&self) -> usize {
        self.num_datacenters.saturating_sub(1)
    }
}

fn env_usize(key: &str) -> Result<Option<usize>, String> {
    match dotenvy::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| format!("{key}={raw}: {e}")),
        Err(_) => Ok(None),
    }
}
