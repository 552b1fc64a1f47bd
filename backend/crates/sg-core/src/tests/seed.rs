use crate::{DEMO_EMAIL, demo_identity};

use googletest::assert_that;
use googletest::prelude::{eq, some};

#[test]
fn given_demo_seed_when_built_then_matches_documented_account() {
    // When
    let identity = demo_identity();

    // Then
    assert_that!(identity.id.as_str(), eq("1"));
    assert_that!(identity.email, eq(DEMO_EMAIL));
    assert_that!(identity.first_name, eq("Dr. John"));
    assert_that!(identity.last_name, eq("Smith"));
    assert_that!(
        identity.profile.as_ref().map(|p| p.specialty.as_str()),
        some(eq("Cardiothoracic Surgery"))
    );
    assert_that!(
        identity.profile.as_ref().map(|p| p.fatigue_level.as_str()),
        some(eq("3"))
    );
}

#[test]
fn given_demo_seed_when_built_twice_then_records_are_equal() {
    assert_eq!(demo_identity(), demo_identity());
}
