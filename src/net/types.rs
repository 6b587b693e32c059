//! Wire DTOs for the auth API boundary.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON bodies so serde round-trips stay
//! lossless. The backend serializes user ids as numbers while older payloads
//! carry strings, so `id` is deserialized tolerantly.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

/// An authenticated user as returned by the auth endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    #[serde(deserialize_with = "deserialize_string_from_id")]
    pub id: String,
    /// Display name chosen at registration.
    pub username: String,
    /// Account email address. Some payloads omit it.
    #[serde(default)]
    pub email: String,
    /// ISO 8601 creation timestamp, when the endpoint includes it.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Success body of the register and login endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthSuccess {
    /// Bearer token to persist for subsequent authenticated requests.
    /// Absent when the server declines to issue one.
    pub access_token: Option<String>,
    /// The newly authenticated user.
    pub user: User,
}

/// Request body for the register endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
}

/// Request body for the login endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

fn deserialize_string_from_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        _ => Err(D::Error::custom("expected string or number id")),
    }
}
