//! Time-based deferred tasks

use std::time::Instant;

/// Work the dashboard performs after a delay.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ScheduledTask {
    /// Finish a data export started from the quick actions.
    ExportComplete,
}

#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: Vec<(Instant, ScheduledTask)>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, due: Instant, task: ScheduledTask) {
        self.tasks.push((due, task));
    }

    /// Removes and returns every task due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<ScheduledTask> {
        let (mut due, pending): (Vec<_>, Vec<_>) =
            self.tasks.drain(..).partition(|(at, _)| *at <= now);
        self.tasks = pending;
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, task)| task).collect()
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.tasks.iter().map(|(at, _)| *at).min()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}
