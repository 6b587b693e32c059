use super::*;
use crate::net::error::ApiError;

#[test]
fn logout_failure_message_prefers_server_text() {
    let err = AuthError::Api(ApiError::Status {
        status: 500,
        message: Some("Logout failed".to_owned()),
    });
    assert_eq!(logout_failure_message(&err), "Logout failed");
}

#[test]
fn logout_failure_message_falls_back_to_generic_text() {
    let err = AuthError::Api(ApiError::Network("connection reset".to_owned()));
    assert_eq!(
        logout_failure_message(&err),
        "Logout failed. Please try again."
    );
}
