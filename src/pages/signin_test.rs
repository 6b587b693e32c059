use super::*;
use crate::net::error::ApiError;

#[test]
fn validate_signin_trims_and_lowercases_email() {
    let credentials = validate_signin(" Ops@CityCouncil.com ", "secret").expect("valid form");
    assert_eq!(credentials.email, "ops@citycouncil.com");
    assert_eq!(credentials.password, "secret");
}

#[test]
fn validate_signin_requires_email() {
    assert_eq!(validate_signin("   ", "secret"), Err("Email is required"));
}

#[test]
fn validate_signin_rejects_malformed_email() {
    assert_eq!(
        validate_signin("ops.citycouncil.com", "secret"),
        Err("Email is invalid")
    );
}

#[test]
fn validate_signin_requires_password() {
    assert_eq!(validate_signin("a@b.com", ""), Err("Password is required"));
}

#[test]
fn validate_signin_has_no_password_length_rule() {
    // Unlike sign-up, any non-empty password is submitted.
    assert!(validate_signin("a@b.com", "x").is_ok());
}

#[test]
fn failure_message_prefers_server_text() {
    let err = AuthError::Api(ApiError::Status {
        status: 401,
        message: Some("Invalid credentials".to_owned()),
    });
    assert_eq!(signin_failure_message(&err), "Invalid credentials");
}

#[test]
fn failure_message_falls_back_to_generic_text() {
    let err = AuthError::Busy;
    assert_eq!(
        signin_failure_message(&err),
        "Login failed. Please check your credentials."
    );
}
