//! Routing policies choosing the datacenter that receives each task.

use crate::core::{Datacenter, PlacementClass, SchedulerError, Task};

/// Index of the datacenter that receives every cloud task.
pub const CLOUD_DATACENTER: usize = 0;

/// Decides, once and at submission time, which datacenter queues a task.
pub trait RoutingPolicy {
    /// Return the index into `datacenters` that should receive `task`.
    fn route(&self, task: &Task, datacenters: &[Datacenter]) -> Result<usize, SchedulerError>;

    /// Short policy name for logs and reports.
    fn name(&self) -> &'static str;
}

/// Cloud tasks go to the cloud datacenter; edge tasks go to the edge datacenter
/// with the smallest load-balance degree right now, lowest index on ties.
#[derive(Debug, Clone, Copy, Default)]
pub struct LatencyAwareRouting;

impl RoutingPolicy for LatencyAwareRouting {
    fn route(&self, task: &Task, datacenters: &[Datacenter]) -> Result<usize, SchedulerError> {
        match task.placement_class() {
            PlacementClass::Cloud => {
                if datacenters.len() > CLOUD_DATACENTER {
                    Ok(CLOUD_DATACENTER)
                } else {
                    Err(SchedulerError::Configuration(
                        "no cloud datacenter configured".into(),
                    ))
                }
            }
            PlacementClass::Edge => datacenters
                .iter()
                .enumerate()
                .skip(CLOUD_DATACENTER + 1)
                .min_by_key(|(_, dc)| dc.load_balance_degree())
                .map(|(index, _)| index)
                .ok_or_else(|| {
                    SchedulerError::Configuration("no edge datacenter configured".into())
                }),
        }
    }

    fn name(&self) -> &'static str {
        "latency-aware"
    }
}
