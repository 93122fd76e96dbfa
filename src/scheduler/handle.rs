//! Scheduler capability and cancellation handles.

use crate::error::SchedulerError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// A unit of deferred work.
pub type Task = Box<dyn FnOnce() + Send + 'static>;

/// Accepts work to run after a delay measured in host ticks.
///
/// Implementations must never run the task inside `schedule` itself and
/// must run it at most once, after at least `delay_ticks` ticks.
pub trait DelayedTaskScheduler {
    fn schedule(&self, delay_ticks: u32, task: Task) -> Result<TaskHandle, SchedulerError>;
}

impl<S: DelayedTaskScheduler + ?Sized> DelayedTaskScheduler for &S {
    fn schedule(&self, delay_ticks: u32, task: Task) -> Result<TaskHandle, SchedulerError> {
        (**self).schedule(delay_ticks, task)
    }
}

impl<S: DelayedTaskScheduler + ?Sized> DelayedTaskScheduler for Arc<S> {
    fn schedule(&self, delay_ticks: u32, task: Task) -> Result<TaskHandle, SchedulerError> {
        (**self).schedule(delay_ticks, task)
    }
}

static NEXT_TASK_ID: AtomicU64 = AtomicU64::new(1);

/// Cancellation token for a scheduled task.
///
/// Clones share the same flag. Cancelling after the task has run is a
/// no-op.
#[derive(Debug, Clone)]
pub struct TaskHandle {
    id: u64,
    cancelled: Arc<AtomicBool>,
}

impl TaskHandle {
    pub(crate) fn new() -> Self {
        Self {
            id: NEXT_TASK_ID.fetch_add(1, Ordering::Relaxed),
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Process-unique id, for logging.
    #[inline]
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Prevent the task from running if it has not started yet.
    pub fn cancel(&self) {
        if !self.cancelled.swap(true, Ordering::AcqRel) {
            tracing::debug!(task = self.id, "Scheduled task cancelled");
        }
    }

    #[inline]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

impl PartialEq for TaskHandle {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TaskHandle {}
