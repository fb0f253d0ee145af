//! In-memory pending queue ordered by task priority key.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::core::{Task, TaskQueue};

/// Wrapper making a task orderable by priority key (smallest first) and FIFO among equal keys.
#[derive(Debug)]
struct PendingTask {
    task: Task,
    seq: u64,
}

impl PartialEq for PendingTask {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq
    }
}

impl Eq for PendingTask {}

impl PartialOrd for PendingTask {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for PendingTask {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap, so both comparisons are reversed.
        other
            .task
            .priority_key()
            .cmp(&self.task.priority_key())
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// In-memory queue storing pending tasks using a priority heap.
/// This provides O(log n) enqueue and O(log n) dequeue operations.
#[derive(Debug, Default)]
pub struct InMemoryQueue {
    tasks: BinaryHeap<PendingTask>,
    next_seq: u64,
}

impl InMemoryQueue {
    /// Create an empty queue.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl TaskQueue for InMemoryQueue {
    fn enqueue(&mut self, task: Task) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.tasks.push(PendingTask { task, seq });
    }

    fn dequeue(&mut self) -> Option<Task> {
        self.tasks.pop().map(|pending| pending.task)
    }

    fn peek(&self) -> Option<&Task> {
        self.tasks.peek().map(|pending| &pending.task)
    }

    fn len(&self) -> usize {
        self.tasks.len()
    }
}
