use crate::ProfessionalProfile;

/// Input to sign-up. Produced by [`crate::RegistrationForm::validate`] or built directly.
#[derive(Clone, PartialEq, Eq)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub profile: ProfessionalProfile,
}

// Keep the password out of logs.
impl std::fmt::Debug for Registration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registration")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("profile", &self.profile)
            .finish()
    }
}
