use std::time::Duration;

/// Default simulated round-trip for sign-in and sign-up
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(1000);

/// Configuration for the session store
#[derive(Debug, Clone)]
pub struct SessionStoreConfig {
    /// How long sign-in and sign-up suspend before completing
    pub latency: Duration,
}

impl Default for SessionStoreConfig {
    fn default() -> Self {
        Self {
            latency: DEFAULT_LATENCY,
        }
    }
}
