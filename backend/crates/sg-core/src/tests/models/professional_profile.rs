use crate::ProfessionalProfile;

use googletest::assert_that;
use googletest::prelude::eq;

#[test]
fn given_blank_profile_then_only_fatigue_level_is_set() {
    let profile = ProfessionalProfile::blank();

    assert_that!(profile.fatigue_level, eq("1"));
    assert_that!(profile.specialty, eq(""));
    assert_that!(profile.experience_years, eq(""));
    assert_that!(profile.success_rate, eq(""));
}

#[test]
fn given_profile_when_serialized_then_uses_camel_case_keys() {
    let profile = ProfessionalProfile {
        experience_years: "15".to_string(),
        cases_completed: "1,250".to_string(),
        ..ProfessionalProfile::default()
    };

    let json = serde_json::to_value(&profile).unwrap();

    assert_that!(json["experienceYears"].as_str(), eq(Some("15")));
    assert_that!(json["casesCompleted"].as_str(), eq(Some("1,250")));
}
