//! Deadline-ordered task queue driven by an explicit clock.
//!
//! # Invariants
//! - Tasks fire only through `drain_due`; nothing runs in the background.
//! - A cancelled handle never fires.
//! - Tasks with equal deadlines fire in scheduling order.
//! - Dropping the scheduler drops every pending task.

use uuid::Uuid;

/// Handle used to cancel one scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(Uuid);

#[derive(Debug)]
struct ScheduledTask<T> {
    handle: TaskHandle,
    due_ms: i64,
    seq: u64,
    payload: T,
}

/// Pending tasks keyed by due time.
#[derive(Debug)]
pub struct TaskScheduler<T> {
    tasks: Vec<ScheduledTask<T>>,
    next_seq: u64,
}

impl<T> Default for TaskScheduler<T> {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_seq: 0,
        }
    }
}

impl<T> TaskScheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `payload` to fire once the clock reaches `due_ms`.
    pub fn schedule(&mut self, due_ms: i64, payload: T) -> TaskHandle {
        let handle = TaskHandle(Uuid::new_v4());
        self.tasks.push(ScheduledTask {
            handle,
            due_ms,
            seq: self.next_seq,
            payload,
        });
        self.next_seq += 1;
        handle
    }

    /// Cancels one task; returns `false` if it already fired or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.handle != handle);
        self.tasks.len() != before
    }

    /// Cancels every pending task and returns how many were dropped.
    pub fn cancel_all(&mut self) -> usize {
        let dropped = self.tasks.len();
        self.tasks.clear();
        dropped
    }

    /// Removes and returns payloads due at `now_ms`, earliest first.
    pub fn drain_due(&mut self, now_ms: i64) -> Vec<T> {
        let (mut due, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|task| task.due_ms <= now_ms);
        self.tasks = pending;
        due.sort_by_key(|task| (task.due_ms, task.seq));
        due.into_iter().map(|task| task.payload).collect()
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    /// Earliest pending deadline, if any.
    pub fn next_due(&self) -> Option<i64> {
        self.tasks.iter().map(|task| task.due_ms).min()
    }
}
