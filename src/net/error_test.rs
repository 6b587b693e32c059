use super::*;

#[test]
fn from_error_body_extracts_error_key() {
    let err = ApiError::from_error_body(409, r#"{"error": "Email already exists"}"#);
    assert_eq!(
        err,
        ApiError::Status {
            status: 409,
            message: Some("Email already exists".to_owned()),
        }
    );
    assert_eq!(err.server_message(), Some("Email already exists"));
}

#[test]
fn from_error_body_falls_back_to_message_key() {
    let err = ApiError::from_error_body(401, r#"{"message": "Invalid credentials"}"#);
    assert_eq!(err.server_message(), Some("Invalid credentials"));
}

#[test]
fn from_error_body_prefers_error_over_message() {
    let err = ApiError::from_error_body(500, r#"{"error": "Login failed", "message": "other"}"#);
    assert_eq!(err.server_message(), Some("Login failed"));
}

#[test]
fn from_error_body_without_parsable_message() {
    let err = ApiError::from_error_body(502, "<html>Bad Gateway</html>");
    assert_eq!(
        err,
        ApiError::Status {
            status: 502,
            message: None,
        }
    );
    assert_eq!(err.server_message(), None);
}

#[test]
fn network_errors_carry_no_server_message() {
    assert_eq!(ApiError::Network("timeout".to_owned()).server_message(), None);
}

#[test]
fn display_includes_status() {
    let err = ApiError::Status {
        status: 401,
        message: None,
    };
    assert_eq!(err.to_string(), "server returned status 401");
}
