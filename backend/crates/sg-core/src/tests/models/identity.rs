use crate::{Identity, IdentityId, ProfessionalProfile, Registration};

use googletest::assert_that;
use googletest::prelude::{eq, none, not, some};

fn registration() -> Registration {
    Registration {
        email: "jane@clinic.org".to_string(),
        password: "secret123".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        profile: ProfessionalProfile {
            specialty: "Neurosurgery".to_string(),
            experience_years: "8".to_string(),
            ..ProfessionalProfile::blank()
        },
    }
}

#[test]
fn given_registration_when_converted_then_copies_fields_and_profile() {
    // Given
    let id = IdentityId::from("42");

    // When
    let identity = Identity::from_registration(id.clone(), registration());

    // Then
    assert_that!(identity.id, eq(&id));
    assert_that!(identity.email, eq("jane@clinic.org"));
    assert_that!(identity.display_name(), eq("Jane Doe"));
    assert_that!(
        identity.profile.as_ref().map(|p| p.specialty.as_str()),
        some(eq("Neurosurgery"))
    );
    assert!(identity.has_profile());
}

#[test]
fn given_identity_without_profile_when_serialized_then_profile_is_omitted() {
    // Given
    let identity = Identity {
        id: IdentityId::from("7"),
        email: "a@b.c".to_string(),
        first_name: "A".to_string(),
        last_name: "B".to_string(),
        profile: None,
    };

    // When
    let json = serde_json::to_value(&identity).unwrap();

    // Then
    assert_that!(json.get("profile"), none());
    assert_that!(json["firstName"].as_str(), some(eq("A")));
    assert_that!(json["id"].as_str(), some(eq("7")));
}

#[test]
fn given_two_generated_ids_then_they_differ() {
    assert_that!(IdentityId::new(), not(eq(&IdentityId::new())));
}

#[test]
fn given_registration_when_debug_formatted_then_password_is_redacted() {
    let rendered = format!("{:?}", registration());

    assert!(!rendered.contains("secret123"));
    assert!(rendered.contains("<redacted>"));
}
