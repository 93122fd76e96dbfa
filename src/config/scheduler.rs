//! Host scheduler configuration.

use super::defaults::default_tick_millis;
use serde::Deserialize;
use std::time::Duration;

/// Host scheduler configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SchedulerConfig {
    /// Wall-clock length of one tick in milliseconds (default: 50).
    /// Only used by the tokio-backed scheduler.
    #[serde(default = "default_tick_millis")]
    pub tick_millis: u64,
}

impl SchedulerConfig {
    /// One tick as a [`Duration`].
    #[inline]
    pub fn tick(&self) -> Duration {
        Duration::from_millis(self.tick_millis)
    }
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            tick_millis: default_tick_millis(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tick_is_50ms() {
        assert_eq!(SchedulerConfig::default().tick(), Duration::from_millis(50));
    }
}
