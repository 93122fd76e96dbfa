//! Delayed task execution.
//!
//! The core never sleeps or spawns on its own. Work that has to happen
//! "a few ticks later" is handed to a [`DelayedTaskScheduler`] supplied by
//! the host:
//! - [`TickScheduler`]: driven by the host's game loop, fully deterministic
//! - [`TokioScheduler`]: wall-clock delays on a tokio runtime

mod handle;
mod runtime;
mod tick;

pub use self::handle::{DelayedTaskScheduler, Task, TaskHandle};
pub use self::runtime::TokioScheduler;
pub use self::tick::TickScheduler;
