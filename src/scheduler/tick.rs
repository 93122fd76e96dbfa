//! Host-driven tick scheduler.

use super::handle::{DelayedTaskScheduler, Task, TaskHandle};
use crate::error::SchedulerError;
use parking_lot::Mutex;
use std::collections::BTreeMap;
use tracing::{trace, warn};

struct Pending {
    task: Task,
    handle: TaskHandle,
}

#[derive(Default)]
struct State {
    now: u64,
    seq: u64,
    /// Keyed by `(due tick, submission order)` so same-tick tasks run FIFO.
    pending: BTreeMap<(u64, u64), Pending>,
    shutdown: bool,
}

/// A scheduler advanced explicitly by the host's game loop.
///
/// Tasks never run inside `schedule`. A task with delay `d` runs during
/// the `advance` that moves the clock to `now + max(d, 1)`. Tasks may
/// schedule further tasks; those become due on later ticks.
#[derive(Default)]
pub struct TickScheduler {
    state: Mutex<State>,
}

impl TickScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// The current tick.
    pub fn now(&self) -> u64 {
        self.state.lock().now
    }

    /// Tasks waiting to run, cancelled ones included.
    pub fn pending(&self) -> usize {
        self.state.lock().pending.len()
    }

    /// Advance the clock by `ticks`, running every task that becomes due.
    ///
    /// Returns the number of tasks run (cancelled tasks are not counted).
    pub fn advance(&self, ticks: u64) -> usize {
        let mut ran = 0;
        for _ in 0..ticks {
            let now = {
                let mut state = self.state.lock();
                state.now += 1;
                state.now
            };
            // The lock is released while a task runs so it can schedule more.
            while let Some(pending) = self.pop_due(now) {
                if pending.handle.is_cancelled() {
                    trace!(task = pending.handle.id(), tick = now, "Skipping cancelled task");
                    continue;
                }
                trace!(task = pending.handle.id(), tick = now, "Running scheduled task");
                (pending.task)();
                ran += 1;
            }
        }
        ran
    }

    fn pop_due(&self, now: u64) -> Option<Pending> {
        let mut state = self.state.lock();
        let entry = state.pending.first_entry()?;
        if entry.key().0 > now {
            return None;
        }
        Some(entry.remove())
    }

    /// Reject all further work and drop everything pending.
    ///
    /// Returns the number of tasks dropped.
    pub fn shutdown(&self) -> usize {
        let mut state = self.state.lock();
        state.shutdown = true;
        let dropped = state.pending.len();
        state.pending.clear();
        dropped
    }
}

impl DelayedTaskScheduler for TickScheduler {
    fn schedule(&self, delay_ticks: u32, task: Task) -> Result<TaskHandle, SchedulerError> {
        let mut state = self.state.lock();
        if state.shutdown {
            warn!("Rejecting task: tick scheduler is shut down");
            return Err(SchedulerError::Shutdown);
        }

        let due = state.now + u64::from(delay_ticks.max(1));
        let seq = state.seq;
        state.seq += 1;

        let handle = TaskHandle::new();
        trace!(task = handle.id(), due, "Task scheduled");
        state.pending.insert(
            (due, seq),
            Pending {
                task,
                handle: handle.clone(),
            },
        );
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    type Log = Arc<Mutex<Vec<&'static str>>>;

    fn push(log: &Log, what: &'static str) -> Task {
        let log = log.clone();
        Box::new(move || log.lock().push(what))
    }

    #[test]
    fn runs_after_delay_not_before() {
        let scheduler = TickScheduler::new();
        let log = Log::default();
        scheduler.schedule(5, push(&log, "relink")).unwrap();

        assert_eq!(scheduler.advance(4), 0);
        assert!(log.lock().is_empty());
        assert_eq!(scheduler.advance(1), 1);
        assert_eq!(*log.lock(), vec!["relink"]);
        assert_eq!(scheduler.pending(), 0);
        assert_eq!(scheduler.now(), 5);
    }

    #[test]
    fn zero_delay_waits_one_tick() {
        let scheduler = TickScheduler::new();
        let log = Log::default();
        scheduler.schedule(0, push(&log, "soon")).unwrap();
        assert!(log.lock().is_empty());
        assert_eq!(scheduler.advance(1), 1);
    }

    #[test]
    fn same_tick_is_fifo_and_earlier_first() {
        let scheduler = TickScheduler::new();
        let log = Log::default();
        scheduler.schedule(2, push(&log, "b1")).unwrap();
        scheduler.schedule(1, push(&log, "a")).unwrap();
        scheduler.schedule(2, push(&log, "b2")).unwrap();

        assert_eq!(scheduler.advance(2), 3);
        assert_eq!(*log.lock(), vec!["a", "b1", "b2"]);
    }

    #[test]
    fn cancelled_task_never_runs() {
        let scheduler = TickScheduler::new();
        let log = Log::default();
        let handle = scheduler.schedule(1, push(&log, "x")).unwrap();
        handle.cancel();

        assert_eq!(scheduler.advance(3), 0);
        assert!(log.lock().is_empty());
        assert_eq!(scheduler.pending(), 0);
    }

    #[test]
    fn task_can_schedule_more_work() {
        let scheduler = Arc::new(TickScheduler::new());
        let log = Log::default();

        let inner_scheduler = scheduler.clone();
        let inner_log = log.clone();
        scheduler
            .schedule(
                1,
                Box::new(move || {
                    inner_log.lock().push("outer");
                    let again = inner_log.clone();
                    inner_scheduler
                        .schedule(1, Box::new(move || again.lock().push("inner")))
                        .unwrap();
                }),
            )
            .unwrap();

        assert_eq!(scheduler.advance(1), 1);
        assert_eq!(*log.lock(), vec!["outer"]);
        assert_eq!(scheduler.advance(1), 1);
        assert_eq!(*log.lock(), vec!["outer", "inner"]);
    }

    #[test]
    fn shutdown_rejects_and_drops() {
        let scheduler = TickScheduler::new();
        let log = Log::default();
        scheduler.schedule(1, push(&log, "x")).unwrap();

        assert_eq!(scheduler.shutdown(), 1);
        assert_eq!(
            scheduler.schedule(1, push(&log, "y")).unwrap_err(),
            SchedulerError::Shutdown
        );
        assert_eq!(scheduler.advance(5), 0);
        assert!(log.lock().is_empty());
    }
}
