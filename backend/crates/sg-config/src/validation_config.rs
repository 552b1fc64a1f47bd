use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_MIN_PASSWORD_LENGTH, MAX_MIN_PASSWORD_LENGTH,
    MIN_MIN_PASSWORD_LENGTH,
};

use serde::Deserialize;

/// Form validation limits applied by the presentation layer
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Shortest password the registration form accepts
    pub min_password_length: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
        }
    }
}

impl ValidationConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_password_length < MIN_MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_MIN_PASSWORD_LENGTH
        {
            return Err(ConfigError::validation(format!(
                "validation.min_password_length must be {}-{}, got {}",
                MIN_MIN_PASSWORD_LENGTH, MAX_MIN_PASSWORD_LENGTH, self.min_password_length
            )));
        }
        Ok(())
    }
}
