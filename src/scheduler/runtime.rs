//! Wall-clock scheduler on a tokio runtime.

use super::handle::{DelayedTaskScheduler, Task, TaskHandle};
use crate::error::SchedulerError;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::runtime::Handle;
use tracing::{debug, trace, warn};

#[derive(Default)]
struct Shared {
    shutdown: AtomicBool,
    /// Spawned tasks still sleeping.
    waiting: AtomicUsize,
}

/// Runs tasks on a tokio runtime after `delay_ticks * tick`.
pub struct TokioScheduler {
    runtime: Handle,
    tick: Duration,
    shared: Arc<Shared>,
}

impl TokioScheduler {
    /// Bind to the runtime of the calling context.
    pub fn new(tick: Duration) -> Result<Self, SchedulerError> {
        let runtime = Handle::try_current().map_err(|_| SchedulerError::NoRuntime)?;
        Ok(Self::with_handle(runtime, tick))
    }

    /// Bind to an explicit runtime handle.
    pub fn with_handle(runtime: Handle, tick: Duration) -> Self {
        Self {
            runtime,
            tick,
            shared: Arc::default(),
        }
    }

    #[inline]
    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Tasks waiting to run, cancelled ones included.
    pub fn pending(&self) -> usize {
        self.shared.waiting.load(Ordering::Acquire)
    }

    /// Reject all further work and drop everything pending.
    ///
    /// Returns the number of tasks dropped.
    pub fn shutdown(&self) -> usize {
        self.shared.shutdown.store(true, Ordering::Release);
        let dropped = self.pending();
        debug!(dropped, "Tokio scheduler shut down");
        dropped
    }
}

impl DelayedTaskScheduler for TokioScheduler {
    fn schedule(&self, delay_ticks: u32, task: Task) -> Result<TaskHandle, SchedulerError> {
        if self.shared.shutdown.load(Ordering::Acquire) {
            warn!("Rejecting task: tokio scheduler is shut down");
            return Err(SchedulerError::Shutdown);
        }

        let handle = TaskHandle::new();
        let delay = self.tick.saturating_mul(delay_ticks.max(1));
        let watch = handle.clone();
        let shared = Arc::clone(&self.shared);
        shared.waiting.fetch_add(1, Ordering::AcqRel);
        trace!(task = handle.id(), ?delay, "Task scheduled");

        self.runtime.spawn(async move {
            tokio::time::sleep(delay).await;
            shared.waiting.fetch_sub(1, Ordering::AcqRel);
            if shared.shutdown.load(Ordering::Acquire) {
                trace!(task = watch.id(), "Dropping task after shutdown");
                return;
            }
            if watch.is_cancelled() {
                trace!(task = watch.id(), "Skipping cancelled task");
                return;
            }
            trace!(task = watch.id(), "Running scheduled task");
            task();
        });
        Ok(handle)
    }
}
