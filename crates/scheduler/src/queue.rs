//! Two-lane cooperative task queue.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Execution lane for a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    Background,
}

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce()>;

/// Two-lane task queue.
///
/// Urgent tasks always run before background tasks: the queue never hands
/// out a background task while an urgent one is waiting, even one scheduled
/// mid-drain. Within a lane, tasks run in the order they were scheduled.
///
/// The queue is a single-threaded cell. It does not spawn or block; callers
/// drain it with [`TaskQueue::run_next`] or [`TaskQueue::run_until_idle`]
/// whenever they have time for deferred work.
#[derive(Default)]
pub struct TaskQueue {
    urgent: VecDeque<Task>,
    background: VecDeque<Task>,
}

impl TaskQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a task on the given lane.
    pub fn schedule(&mut self, priority: Priority, task: impl FnOnce() + 'static) {
        let task: Task = Box::new(task);
        match priority {
            Priority::Urgent => self.urgent.push_back(task),
            Priority::Background => self.background.push_back(task),
        }
    }

    /// Remove the next task without running it, urgent lane first.
    pub fn take_next(&mut self) -> Option<Task> {
        self.urgent
            .pop_front()
            .or_else(|| self.background.pop_front())
    }

    /// Run the next task, urgent lane first. Returns false when idle.
    ///
    /// The task runs after it has left the queue, so it may schedule
    /// follow-up work through whatever handle it captured.
    pub fn run_next(&mut self) -> bool {
        match self.take_next() {
            Some(task) => {
                task();
                true
            }
            None => false,
        }
    }

    /// Drain both lanes, returning how many tasks ran.
    pub fn run_until_idle(&mut self) -> usize {
        let mut ran = 0;
        while self.run_next() {
            ran += 1;
        }
        ran
    }

    /// True while background work has been deferred but not yet run. This is
    /// the flag a UI shows as "stale results, refresh in flight".
    pub fn is_pending(&self) -> bool {
        !self.background.is_empty()
    }

    pub fn is_idle(&self) -> bool {
        self.urgent.is_empty() && self.background.is_empty()
    }

    /// Total tasks waiting across both lanes.
    pub fn len(&self) -> usize {
        self.urgent.len() + self.background.len()
    }

    pub fn is_empty(&self) -> bool {
        self.is_idle()
    }
}

impl std::fmt::Debug for TaskQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskQueue")
            .field("urgent", &self.urgent.len())
            .field("background", &self.background.len())
            .finish()
    }
}
