//! Surgeon profile attached to an identity.

use serde::{Deserialize, Serialize};

/// Free-form descriptive record of a surgeon's practice.
///
/// Every field is opaque text. Nothing here parses numbers or checks ranges;
/// the only checks are the presence rules applied by the registration form.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfessionalProfile {
    pub specialty: String,
    pub subspecialty: String,
    pub experience_years: String,
    pub cases_completed: String,
    /// Percentage, without the `%` sign
    pub success_rate: String,
    pub certifications: String,
    pub current_workload: String,
    /// Self-reported, "1" (rested) upwards
    pub fatigue_level: String,
}

impl ProfessionalProfile {
    /// Blank profile offered by the registration form
    pub fn blank() -> Self {
        Self {
            fatigue_level: String::from("1"),
            ..Self::default()
        }
    }
}
