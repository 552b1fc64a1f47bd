use crate::{ProfessionalProfile, RegistrationForm};

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

const MIN_PASSWORD_LENGTH: usize = 6;

fn complete_form() -> RegistrationForm {
    RegistrationForm {
        email: "jane@clinic.org".to_string(),
        password: "hunter22".to_string(),
        confirm_password: "hunter22".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        profile: ProfessionalProfile {
            specialty: "Neurosurgery".to_string(),
            experience_years: "8".to_string(),
            ..ProfessionalProfile::blank()
        },
    }
}

fn message_for(form: RegistrationForm) -> String {
    form.validate(MIN_PASSWORD_LENGTH)
        .unwrap_err()
        .user_message()
        .to_string()
}

#[test]
fn given_complete_form_when_validate_then_returns_registration() {
    // When
    let result = complete_form().validate(MIN_PASSWORD_LENGTH);

    // Then
    assert_that!(result, ok(anything()));
    let registration = result.unwrap();
    assert_that!(registration.email, eq("jane@clinic.org"));
    assert_that!(registration.profile.specialty, eq("Neurosurgery"));
    assert_that!(registration.profile.fatigue_level, eq("1"));
}

#[test]
fn given_missing_last_name_when_validate_then_account_fields_error() {
    let form = RegistrationForm {
        last_name: String::new(),
        ..complete_form()
    };

    assert_that!(
        message_for(form),
        eq("Please fill in all required account fields")
    );
}

#[test]
fn given_missing_experience_when_validate_then_profile_fields_error() {
    let mut form = complete_form();
    form.profile.experience_years = String::new();

    assert_that!(
        message_for(form),
        eq("Please fill in required profile fields (Specialty and Experience)")
    );
}

#[test]
fn given_mismatched_confirmation_when_validate_then_mismatch_error() {
    let form = RegistrationForm {
        confirm_password: "hunter23".to_string(),
        ..complete_form()
    };

    assert_that!(message_for(form), eq("Passwords do not match"));
}

#[test]
fn given_short_password_when_validate_then_length_error() {
    let form = RegistrationForm {
        password: "abc".to_string(),
        confirm_password: "abc".to_string(),
        ..complete_form()
    };

    assert_that!(
        message_for(form),
        eq("Password must be at least 6 characters")
    );
}

#[test]
fn given_several_problems_when_validate_then_account_fields_reported_first() {
    let mut form = RegistrationForm {
        email: String::new(),
        confirm_password: "different".to_string(),
        ..complete_form()
    };
    form.profile.specialty = String::new();

    assert_that!(
        message_for(form),
        eq("Please fill in all required account fields")
    );
}

#[test]
fn given_custom_minimum_when_validate_then_message_uses_it() {
    let result = complete_form().validate(12);

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().user_message(),
        eq("Password must be at least 12 characters")
    );
}

#[test]
fn given_default_form_then_profile_is_blank() {
    let form = RegistrationForm::default();

    assert_that!(form.profile, eq(&ProfessionalProfile::blank()));
}
