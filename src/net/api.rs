//! Auth REST client for the backend API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, with the persisted
//! bearer token attached to every request that has one available.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::net::error::ApiError;
use crate::net::types::{AuthSuccess, Credentials, Registration, User};
use crate::store::AuthApi;

#[cfg(any(test, feature = "hydrate"))]
fn api_url(path: &str) -> String {
    let base = option_env!("ECOBIN_API_URL").unwrap_or("/api");
    format!("{base}{path}")
}

#[cfg(any(test, feature = "hydrate"))]
fn bearer_header(token: &str) -> String {
    format!("Bearer {token}")
}

/// `gloo-net` implementation of [`AuthApi`].
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpAuthApi;

impl HttpAuthApi {
    pub fn new() -> Self {
        Self
    }
}

impl AuthApi for HttpAuthApi {
    async fn check(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_json("/auth/check").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(not_in_browser())
        }
    }

    async fn register(&self, registration: &Registration) -> Result<AuthSuccess, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json("/auth/register", registration).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = registration;
            Err(not_in_browser())
        }
    }

    async fn login(&self, credentials: &Credentials) -> Result<AuthSuccess, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_json("/auth/login", credentials).await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = credentials;
            Err(not_in_browser())
        }
    }

    async fn logout(&self) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            post_empty("/auth/logout").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(not_in_browser())
        }
    }

    async fn user_profile(&self) -> Result<User, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            get_json("/auth/getUserProfile").await
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(not_in_browser())
        }
    }
}

#[cfg(not(feature = "hydrate"))]
fn not_in_browser() -> ApiError {
    ApiError::Network("not available on server".to_owned())
}

#[cfg(feature = "hydrate")]
fn authorized(builder: gloo_net::http::RequestBuilder) -> gloo_net::http::RequestBuilder {
    match crate::util::token::load() {
        Some(token) => builder.header("Authorization", &bearer_header(&token)),
        None => builder,
    }
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = authorized(gloo_net::http::Request::get(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B: serde::Serialize, T: serde::de::DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let resp = authorized(gloo_net::http::Request::post(&api_url(path)))
        .json(body)
        .map_err(|e| ApiError::Network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_empty(path: &str) -> Result<(), ApiError> {
    let resp = authorized(gloo_net::http::Request::post(&api_url(path)))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if resp.ok() {
        Ok(())
    } else {
        Err(status_error(resp).await)
    }
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(
    resp: gloo_net::http::Response,
) -> Result<T, ApiError> {
    if !resp.ok() {
        return Err(status_error(resp).await);
    }
    resp.json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn status_error(resp: gloo_net::http::Response) -> ApiError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    ApiError::from_error_body(status, &body)
}
