use crate::{CoreError, ProfessionalProfile, Registration, Result as CoreErrorResult};

/// Raw registration screen input, including the confirmation field the
/// store never sees.
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub profile: ProfessionalProfile,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            profile: ProfessionalProfile::blank(),
        }
    }
}

impl RegistrationForm {
    /// Validate and convert into a [`Registration`].
    ///
    /// Checks run in a fixed order and the first failure wins:
    /// account fields, required profile fields, confirmation, length.
    #[track_caller]
    pub fn validate(self, min_password_length: usize) -> CoreErrorResult<Registration> {
        if self.email.is_empty()
            || self.password.is_empty()
            || self.first_name.is_empty()
            || self.last_name.is_empty()
        {
            return Err(CoreError::validation(
                "Please fill in all required account fields",
            ));
        }

        if self.profile.specialty.is_empty() || self.profile.experience_years.is_empty() {
            return Err(CoreError::validation(
                "Please fill in required profile fields (Specialty and Experience)",
            ));
        }

        if self.password != self.confirm_password {
            return Err(CoreError::validation("Passwords do not match"));
        }

        if self.password.chars().count() < min_password_length {
            return Err(CoreError::validation(format!(
                "Password must be at least {min_password_length} characters"
            )));
        }

        Ok(Registration {
            email: self.email,
            password: self.password,
            first_name: self.first_name,
            last_name: self.last_name,
            profile: self.profile,
        })
    }
}
