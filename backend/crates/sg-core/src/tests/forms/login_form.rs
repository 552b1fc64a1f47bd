use crate::LoginForm;

use googletest::assert_that;
use googletest::prelude::{anything, eq, err, ok};

#[test]
fn given_email_and_password_when_validate_then_ok() {
    let form = LoginForm::new("doctor@hospital.com", "anything");

    assert_that!(form.validate(), ok(anything()));
}

#[test]
fn given_missing_password_when_validate_then_asks_for_both_fields() {
    let form = LoginForm::new("doctor@hospital.com", "");

    let result = form.validate();

    assert_that!(result, err(anything()));
    assert_that!(
        result.unwrap_err().user_message(),
        eq("Please enter both email and password")
    );
}

#[test]
fn given_missing_email_when_validate_then_error() {
    let form = LoginForm::new("", "pw");

    assert_that!(form.validate(), err(anything()));
}

#[test]
fn given_whitespace_email_when_validate_then_counts_as_present() {
    let form = LoginForm::new(" ", "pw");

    assert_that!(form.validate(), ok(anything()));
}
