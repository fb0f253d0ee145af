//! Datacenter: a fixed set of virtual machines fed by a priority queue.

use tracing::debug;

use crate::core::{ScheduleRecord, SchedulerError, Task, VirtualMachine};
use crate::infra::queue::InMemoryQueue;

/// Abstraction for pending-task queues.
pub trait TaskQueue {
    /// Insert a task under the queue's priority ordering.
    fn enqueue(&mut self, task: Task);
    /// Remove and return the highest-priority task.
    fn dequeue(&mut self) -> Option<Task>;
    /// The task `dequeue` would return next, left in place.
    fn peek(&self) -> Option<&Task>;
    /// Current depth.
    fn len(&self) -> usize;
    /// Whether nothing is pending.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A datacenter exclusively owning its machines and pending queue.
#[derive(Debug)]
pub struct Datacenter {
    id: String,
    index: usize,
    machines: Vec<VirtualMachine>,
    queue: InMemoryQueue,
}

impl Datacenter {
    /// Create datacenter `index` with `num_machines` idle machines.
    ///
    /// Fails with [`SchedulerError::Configuration`] when `num_machines` is zero.
    pub fn new(index: usize, num_machines: usize) -> Result<Self, SchedulerError> {
        let id = format!("Datacenter-{index}");
        if num_machines == 0 {
            return Err(SchedulerError::Configuration(format!(
                "{id} must have at least one virtual machine"
            )));
        }
        Ok(Self {
            id,
            index,
            machines: (0..num_machines).map(VirtualMachine::new).collect(),
            queue: InMemoryQueue::new(),
        })
    }

    /// Display identifier, `Datacenter-{index}`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Position in the simulation's fixed datacenter order.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Machines in identifier order.
    #[must_use]
    pub fn machines(&self) -> &[VirtualMachine] {
        &self.machines
    }

    /// Number of tasks waiting for dispatch.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.queue.len()
    }

    /// Whether any task is waiting for dispatch.
    #[must_use]
    pub fn has_pending(&self) -> bool {
        !self.queue.is_empty()
    }

    /// Queue a task for later dispatch. Machines are untouched.
    pub fn enqueue(&mut self, task: Task) {
        self.queue.enqueue(task);
    }

    /// Spread between the busiest and the idlest machine clock.
    #[must_use]
    pub fn load_balance_degree(&self) -> u64 {
        let clocks = self.machines.iter().map(VirtualMachine::committed_until);
        let max = clocks.clone().max().unwrap_or(0);
        let min = clocks.min().unwrap_or(0);
        max - min
    }

    /// Pop the most urgent pending task and run it on the least-loaded machine.
    ///
    /// Ties between machines go to the lowest identifier. If the task cannot be
    /// placed (its end time overflows the machine clock) it stays queued.
    pub fn dispatch_next(&mut self) -> Result<ScheduleRecord, SchedulerError> {
        let task = self
            .queue
            .peek()
            .ok_or_else(|| SchedulerError::EmptyQueueDispatch(self.id.clone()))?;

        // min_by_key keeps the first minimum, which is the lowest id.
        let machine = self
            .machines
            .iter_mut()
            .min_by_key(|vm| vm.committed_until())
            .ok_or_else(|| SchedulerError::Configuration(format!("{} has no machines", self.id)))?;

        let (start_time, end_time) = machine.assign(task.service_time(), task.arrival_time())?;
        let resource_id = machine.id();
        let task = self
            .queue
            .dequeue()
            .ok_or_else(|| SchedulerError::EmptyQueueDispatch(self.id.clone()))?;
        debug!(
            datacenter = %self.id,
            task_id = task.id(),
            vm = resource_id,
            start_time,
            end_time,
            "dispatched task"
        );

        Ok(ScheduleRecord {
            task_id: task.id().to_owned(),
            datacenter_id: self.id.clone(),
            resource_id,
            placement_class: task.placement_class(),
            arrival_time: task.arrival_time(),
            start_time,
            end_time,
            turnaround_time: end_time - task.arrival_time(),
        })
    }
}
