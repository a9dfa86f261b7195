//! Configuration for the admission engine.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants;

/// Runtime knobs for the admission engine and segmentation resolver.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Bound on a single Referral Tree Oracle call, in milliseconds.
    /// Elapsed timeouts degrade to the oracle-unavailable fallback.
    pub oracle_timeout_ms: u64,
}

impl EngineConfig {
    #[must_use]
    pub fn oracle_timeout(&self) -> Duration {
        Duration::from_millis(self.oracle_timeout_ms)
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            oracle_timeout_ms: constants::DEFAULT_ORACLE_TIMEOUT_MS,
        }
    }
}
