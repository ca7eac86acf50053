//! Request cache settings.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Five minutes, the default freshness window for cached queries.
const fn default_stale_time_secs() -> u64 {
    300
}

const fn default_max_entries() -> u64 {
    1_000
}

/// Idle fetches get one automatic retry; mutations get none.
const fn default_retry_count() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    #[serde(default = "default_stale_time_secs")]
    pub stale_time_secs: u64,

    #[serde(default = "default_max_entries")]
    pub max_entries: u64,

    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
}

impl CacheConfig {
    #[must_use]
    pub const fn stale_time(&self) -> Duration {
        Duration::from_secs(self.stale_time_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            stale_time_secs: default_stale_time_secs(),
            max_entries: default_max_entries(),
            retry_count: default_retry_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = CacheConfig::default();
        assert_eq!(config.stale_time(), Duration::from_secs(300));
        assert_eq!(config.max_entries, 1_000);
        assert_eq!(config.retry_count, 1);
    }
}
