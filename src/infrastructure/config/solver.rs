//! Solver backend configuration.

use std::time::Duration;

use serde::Deserialize;

/// Settings for the ILP backend.
#[derive(Debug, Clone, Deserialize)]
pub struct SolverConfig {
    /// Wall-clock limit per formation solve in seconds (default: 10).
    #[serde(default = "default_time_limit_secs")]
    pub time_limit_secs: u64,
}

const fn default_time_limit_secs() -> u64 {
    10
}

impl SolverConfig {
    /// Per-formation time limit.
    #[must_use]
    pub fn time_limit(&self) -> Duration {
        Duration::from_secs(self.time_limit_secs)
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            time_limit_secs: default_time_limit_secs(),
        }
    }
}
