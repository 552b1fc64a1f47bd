use crate::{CoreError, Result as CoreErrorResult};

/// Raw login screen input
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    #[track_caller]
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(CoreError::validation(
                "Please enter both email and password",
            ));
        }
        Ok(())
    }
}
