use super::*;

#[test]
fn user_deserializes_numeric_id() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": 7,
        "username": "dispatch",
        "email": "dispatch@citycouncil.com",
        "created_at": "2024-05-01T08:30:00",
    }))
    .expect("user payload");
    assert_eq!(user.id, "7");
    assert_eq!(user.username, "dispatch");
    assert_eq!(user.created_at.as_deref(), Some("2024-05-01T08:30:00"));
}

#[test]
fn user_deserializes_string_id_and_defaults_missing_fields() {
    let user: User = serde_json::from_value(serde_json::json!({
        "id": "1",
        "username": "a",
    }))
    .expect("minimal user payload");
    assert_eq!(user.id, "1");
    assert_eq!(user.email, "");
    assert_eq!(user.created_at, None);
}

#[test]
fn user_rejects_non_scalar_id() {
    let result: Result<User, _> = serde_json::from_value(serde_json::json!({
        "id": ["1"],
        "username": "a",
    }));
    assert!(result.is_err());
}

#[test]
fn auth_success_with_token() {
    let auth: AuthSuccess = serde_json::from_value(serde_json::json!({
        "access_token": "tok123",
        "user": { "id": "1", "username": "a" },
    }))
    .expect("auth payload");
    assert_eq!(auth.access_token.as_deref(), Some("tok123"));
    assert_eq!(auth.user.username, "a");
}

#[test]
fn auth_success_without_token() {
    let auth: AuthSuccess = serde_json::from_value(serde_json::json!({
        "user": { "id": 2, "username": "b" },
    }))
    .expect("tokenless auth payload");
    assert_eq!(auth.access_token, None);
}

#[test]
fn registration_serializes_expected_keys() {
    let body = serde_json::to_value(Registration {
        username: "ops_lead".to_owned(),
        email: "ops@citycouncil.com".to_owned(),
        password: "secret".to_owned(),
    })
    .expect("registration body");
    assert_eq!(
        body,
        serde_json::json!({
            "username": "ops_lead",
            "email": "ops@citycouncil.com",
            "password": "secret",
        })
    );
}
