//! Builders to construct datacenters and simulations from configuration.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::SimulationConfig;
use crate::core::{
    Datacenter, InMemoryAuditSink, LatencyAwareRouting, RoutingPolicy, SchedulerError,
    SharedAuditSink, Simulation,
};

/// Build the fixed datacenter collection described by `cfg`, cloud first.
pub fn build_datacenters(cfg: &SimulationConfig) -> Result<Vec<Datacenter>, SchedulerError> {
    cfg.validate()
        .map_err(|e| SchedulerError::Configuration(format!("config invalid: {e}")))?;

    (0..cfg.num_datacenters)
        .map(|index| Datacenter::new(index, cfg.resources_per_datacenter))
        .collect()
}

/// Fluent construction of a [`Simulation`].
pub struct SimulationBuilder<R = LatencyAwareRouting> {
    config: SimulationConfig,
    policy: R,
    audit: Option<SharedAuditSink>,
}

impl SimulationBuilder<LatencyAwareRouting> {
    /// Start from a configuration with the default routing policy.
    #[must_use]
    pub fn new(config: SimulationConfig) -> Self {
        Self {
            config,
            policy: LatencyAwareRouting,
            audit: None,
        }
    }
}

impl<R: RoutingPolicy> SimulationBuilder<R> {
    /// Configuration the simulation will be built from.
    #[must_use]
    pub const fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Replace the routing policy.
    pub fn with_policy<P: RoutingPolicy>(self, policy: P) -> SimulationBuilder<P> {
        SimulationBuilder {
            config: self.config,
            policy,
            audit: self.audit,
        }
    }

    /// Record decisions into the given sink.
    #[must_use]
    pub fn with_audit(mut self, audit: SharedAuditSink) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Record decisions into a fresh in-memory sink sized by `audit_capacity`.
    ///
    /// Returns the builder and a handle for reading the events back.
    #[must_use]
    pub fn with_in_memory_audit(self) -> (Self, Arc<Mutex<InMemoryAuditSink>>) {
        let sink = Arc::new(Mutex::new(InMemoryAuditSink::new(self.config.audit_capacity)));
        let shared: SharedAuditSink = sink.clone();
        (self.with_audit(shared), sink)
    }

    /// Validate the configuration and create the simulation.
    pub fn build(self) -> Result<Simulation<R>, SchedulerError> {
        let datacenters = build_datacenters(&self.config)?;
        let simulation = Simulation::from_datacenters(datacenters, self.policy);
        Ok(match self.audit {
            Some(audit) => simulation.with_audit(audit),
            None => simulation,
        })
    }
}
