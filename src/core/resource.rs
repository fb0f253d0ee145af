//! Virtual machine: a serial execution clock.

use serde::Serialize;

use crate::core::SchedulerError;

/// A single-server resource tracking the time until which it is busy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VirtualMachine {
    id: usize,
    committed_until: u64,
}

impl VirtualMachine {
    /// Create an idle machine.
    #[must_use]
    pub const fn new(id: usize) -> Self {
        Self {
            id,
            committed_until: 0,
        }
    }

    /// Index of the machine within its datacenter.
    #[must_use]
    pub const fn id(&self) -> usize {
        self.id
    }

    /// End of the last committed piece of work.
    #[must_use]
    pub const fn committed_until(&self) -> u64 {
        self.committed_until
    }

    /// Commit `service_time` units of work that cannot start before `arrival_time`.
    ///
    /// Returns `(start, end)`. The clock only ever moves forward; when `end`
    /// would not fit in a `u64` the machine is left untouched and an error is returned.
    pub fn assign(
        &mut self,
        service_time: u64,
        arrival_time: u64,
    ) -> Result<(u64, u64), SchedulerError> {
        let start = self.committed_until.max(arrival_time);
        let end = start.checked_add(service_time).ok_or_else(|| {
            SchedulerError::InvalidTaskParameter(format!(
                "clock overflow on vm {}: start {start} + service_time {service_time}",
                self.id
            ))
        })?;
        self.committed_until = end;
        Ok((start, end))
    }
}
