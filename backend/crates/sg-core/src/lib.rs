pub mod error;
pub mod forms;
pub mod models;
pub mod seed;

pub use error::{CoreError, Result};
pub use forms::login_form::LoginForm;
pub use forms::registration_form::RegistrationForm;
pub use models::identity::Identity;
pub use models::identity_id::IdentityId;
pub use models::professional_profile::ProfessionalProfile;
pub use models::registration::Registration;
pub use seed::{DEMO_EMAIL, demo_identity};

#[cfg(test)]
mod tests;
