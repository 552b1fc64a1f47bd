//! Identity entity - one registered user.

use crate::{IdentityId, ProfessionalProfile, Registration};

use serde::{Deserialize, Serialize};

/// A registered user. Email is the lookup key but is not guaranteed unique.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: IdentityId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<ProfessionalProfile>,
}

impl Identity {
    /// Build an identity from a registration. The password is dropped here.
    pub fn from_registration(id: IdentityId, registration: Registration) -> Self {
        Self {
            id,
            email: registration.email,
            first_name: registration.first_name,
            last_name: registration.last_name,
            profile: Some(registration.profile),
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_profile(&self) -> bool {
        self.profile.is_some()
    }
}
