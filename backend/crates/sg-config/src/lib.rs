mod config;
mod error;
mod log_level;
mod logging_config;
mod session_config;
mod validation_config;

pub use config::Config;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use session_config::SessionConfig;
pub use validation_config::ValidationConfig;

const CONFIG_DIR_ENV: &str = "SG_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".sg";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_LATENCY_MS: u64 = 1000;
const MAX_LATENCY_MS: u64 = 60_000;

const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;
const MIN_MIN_PASSWORD_LENGTH: usize = 1;
const MAX_MIN_PASSWORD_LENGTH: usize = 128;

#[cfg(test)]
mod tests;
