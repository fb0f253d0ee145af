//! Task value type and its priority key.

use serde::{Deserialize, Serialize};

use crate::core::SchedulerError;

/// Lowest (most urgent) accepted latency requirement.
pub const MIN_LATENCY_REQUIREMENT: u8 = 1;
/// Highest (least urgent) accepted latency requirement.
pub const MAX_LATENCY_REQUIREMENT: u8 = 5;
/// Latency requirements at or below this value are placed on the edge.
pub const EDGE_LATENCY_THRESHOLD: u8 = 3;

/// Where a task is allowed to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlacementClass {
    /// Latency-sensitive work, balanced across edge datacenters.
    Edge,
    /// Latency-tolerant work, sent to the central cloud datacenter.
    Cloud,
}

impl PlacementClass {
    /// Derive the placement class from a latency requirement.
    #[must_use]
    pub const fn from_latency(latency_requirement: u8) -> Self {
        if latency_requirement <= EDGE_LATENCY_THRESHOLD {
            Self::Edge
        } else {
            Self::Cloud
        }
    }

    /// Lowercase label used in tabular output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Edge => "edge",
            Self::Cloud => "cloud",
        }
    }
}

impl std::fmt::Display for PlacementClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Queue ordering key: lower latency requirement first, then shorter service time.
pub type PriorityKey = (u8, u64);

/// An immutable unit of work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Task {
    id: String,
    arrival_time: u64,
    service_time: u64,
    placement_class: PlacementClass,
    latency_requirement: u8,
}

impl Task {
    /// Create a task, rejecting a zero service time or a latency requirement outside 1..=5.
    pub fn new(
        id: impl Into<String>,
        arrival_time: u64,
        service_time: u64,
        latency_requirement: u8,
    ) -> Result<Self, SchedulerError> {
        let id = id.into();
        if service_time == 0 {
            return Err(SchedulerError::InvalidTaskParameter(format!(
                "{id}: service_time must be greater than 0"
            )));
        }
        if !(MIN_LATENCY_REQUIREMENT..=MAX_LATENCY_REQUIREMENT).contains(&latency_requirement) {
            return Err(SchedulerError::InvalidTaskParameter(format!(
                "{id}: latency_requirement {latency_requirement} outside \
                 {MIN_LATENCY_REQUIREMENT}..={MAX_LATENCY_REQUIREMENT}"
            )));
        }
        Ok(Self {
            placement_class: PlacementClass::from_latency(latency_requirement),
            id,
            arrival_time,
            service_time,
            latency_requirement,
        })
    }

    /// Task identifier.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Simulated arrival time.
    #[must_use]
    pub const fn arrival_time(&self) -> u64 {
        self.arrival_time
    }

    /// Simulated processing duration.
    #[must_use]
    pub const fn service_time(&self) -> u64 {
        self.service_time
    }

    /// Placement derived from the latency requirement.
    #[must_use]
    pub const fn placement_class(&self) -> PlacementClass {
        self.placement_class
    }

    /// Latency requirement, 1 (most urgent) to 5.
    #[must_use]
    pub const fn latency_requirement(&self) -> u8 {
        self.latency_requirement
    }

    /// Key used by pending queues; smaller keys are dispatched first.
    #[must_use]
    pub const fn priority_key(&self) -> PriorityKey {
        (self.latency_requirement, self.service_time)
    }
}
