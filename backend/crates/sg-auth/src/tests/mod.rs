
use crate::{SessionStore, SessionStoreConfig};

use std::time::Duration;

use sg_core::{ProfessionalProfile, Registration};

/// Store with no simulated latency
pub(crate) fn instant_store() -> SessionStore {
    SessionStore::new(SessionStoreConfig {
        latency: Duration::ZERO,
    })
}

pub(crate) fn registration(email: &str) -> Registration {
    Registration {
        email: email.to_string(),
        password: "hunter22".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        profile: ProfessionalProfile {
            specialty: "Orthopedic Surgery".to_string(),
            experience_years: "4".to_string(),
            ..ProfessionalProfile::blank()
        },
    }
}

pub(crate) fn neuro_profile() -> ProfessionalProfile {
    ProfessionalProfile {
        specialty: "Neurosurgery".to_string(),
        subspecialty: "Spine".to_string(),
        experience_years: "20".to_string(),
        cases_completed: "3,100".to_string(),
        success_rate: "98.1".to_string(),
        certifications: "American Board of Neurological Surgery".to_string(),
        current_workload: "9 surgeries/week".to_string(),
        fatigue_level: "2".to_string(),
    }
}
