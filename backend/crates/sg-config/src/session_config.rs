use crate::{ConfigError, ConfigErrorResult, DEFAULT_LATENCY_MS, MAX_LATENCY_MS};

use std::time::Duration;

use serde::Deserialize;

/// Session store behaviour
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Simulated round-trip for sign-in and sign-up, in milliseconds
    pub latency_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            latency_ms: DEFAULT_LATENCY_MS,
        }
    }
}

impl SessionConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.latency_ms > MAX_LATENCY_MS {
            return Err(ConfigError::session(format!(
                "session.latency_ms must be 0-{}, got {}",
                MAX_LATENCY_MS, self.latency_ms
            )));
        }
        Ok(())
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}
