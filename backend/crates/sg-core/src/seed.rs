use crate::{Identity, IdentityId, ProfessionalProfile};

/// Email of the pre-populated demo account
pub const DEMO_EMAIL: &str = "doctor@hospital.com";

const DEMO_ID: &str = "1";

/// The single identity every directory starts with, so the documented demo
/// credentials work before anyone signs up.
pub fn demo_identity() -> Identity {
    Identity {
        id: IdentityId::from(DEMO_ID),
        email: String::from(DEMO_EMAIL),
        first_name: String::from("Dr. John"),
        last_name: String::from("Smith"),
        profile: Some(ProfessionalProfile {
            specialty: String::from("Cardiothoracic Surgery"),
            subspecialty: String::from("Pediatric Cardiac Surgery"),
            experience_years: String::from("15"),
            cases_completed: String::from("1,250"),
            success_rate: String::from("96.8"),
            certifications: String::from(
                "Board Certified in Thoracic Surgery, American Board of Surgery",
            ),
            current_workload: String::from("12 surgeries/week"),
            fatigue_level: String::from("3"),
        }),
    }
}
