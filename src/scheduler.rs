//! Deterministic task scheduler.
//!
//! Owns a monotonic virtual clock. The event loop advances it by real elapsed
//! time; tests advance it by hand. Due tasks come back as values for the
//! caller to dispatch, so nothing runs behind the caller's back.

use std::time::Duration;

/// Identifies a scheduled task for cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct ScheduledTask<A> {
    handle: TaskHandle,
    due: Duration,
    period: Option<Duration>,
    action: A,
}

#[derive(Debug)]
pub struct Scheduler<A> {
    now: Duration,
    next_id: u64,
    tasks: Vec<ScheduledTask<A>>,
}

impl<A: Clone> Default for Scheduler<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Clone> Scheduler<A> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            tasks: Vec::new(),
        }
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn pending(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_scheduled(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|t| t.handle == handle)
    }

    pub fn schedule_once(&mut self, delay: Duration, action: A) -> TaskHandle {
        self.push(delay, None, action)
    }

    /// Fires every `period`, first after one full period. A zero period is
    /// clamped to one millisecond so `advance` always terminates.
    pub fn schedule_repeating(&mut self, period: Duration, action: A) -> TaskHandle {
        let period = period.max(Duration::from_millis(1));
        self.push(period, Some(period), action)
    }

    /// Returns false if the task already fired (one-shot) or was cancelled.
    pub fn cancel(&mut self, handle: TaskHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.handle != handle);
        self.tasks.len() != before
    }

    /// Time until the earliest pending task, if any.
    pub fn next_due_in(&self) -> Option<Duration> {
        self.tasks
            .iter()
            .map(|t| t.due.saturating_sub(self.now))
            .min()
    }

    /// Moves the clock forward and returns every action that came due, in
    /// due-time order with ties broken by scheduling order. A repeating task
    /// that is several periods behind fires once per missed period.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<A> {
        let target = self.now + elapsed;
        let mut fired = Vec::new();

        loop {
            let next = self
                .tasks
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due <= target)
                .min_by_key(|(_, t)| (t.due, t.handle.0))
                .map(|(idx, _)| idx);

            let Some(idx) = next else { break };

            self.now = self.now.max(self.tasks[idx].due);
            match self.tasks[idx].period {
                Some(period) => {
                    let task = &mut self.tasks[idx];
                    task.due += period;
                    fired.push(task.action.clone());
                }
                None => {
                    let task = self.tasks.remove(idx);
                    fired.push(task.action);
                }
            }
        }

        self.now = target;
        fired
    }

    fn push(&mut self, delay: Duration, period: Option<Duration>, action: A) -> TaskHandle {
        let handle = TaskHandle(self.next_id);
        self.next_id += 1;
        self.tasks.push(ScheduledTask {
            handle,
            due: self.now + delay,
            period,
            action,
        });
        handle
    }
}
