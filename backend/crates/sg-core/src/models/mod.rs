pub mod identity;
pub mod identity_id;
pub mod professional_profile;
pub mod registration;
