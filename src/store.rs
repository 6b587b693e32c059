//! Client session store coordinating authentication state.
//!
//! ARCHITECTURE
//! ============
//! The store is the single writer of `Session`: check, sign-up, login,
//! logout, and profile fetch are the only transitions. It is constructed at
//! the root composition point with the HTTP client and the durable token
//! slot injected, and shared with pages through Leptos context. Operations
//! return explicit `Result`s; pages own notifications and redirects.
//!
//! CONCURRENCY
//! ===========
//! Single-threaded event-loop model: each operation suspends exactly once at
//! the network boundary. The guarded operations (check, sign-up, login) hold
//! the `pending` flag for their whole lifetime and a second guarded call is
//! rejected with [`AuthError::Busy`] instead of racing. Logout is unguarded
//! and may run concurrently with itself.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use thiserror::Error;

use crate::net::error::ApiError;
use crate::net::types::{AuthSuccess, Credentials, Registration, User};
use crate::state::session::{PendingOp, Session};

/// The auth API collaborator as seen by the store.
///
/// Production uses the `gloo-net` implementation in `net::api`; tests inject
/// scripted fakes.
#[allow(async_fn_in_trait)]
pub trait AuthApi {
    /// `GET /auth/check`: resolve the persisted token to a user.
    async fn check(&self) -> Result<User, ApiError>;
    /// `POST /auth/register`.
    async fn register(&self, registration: &Registration) -> Result<AuthSuccess, ApiError>;
    /// `POST /auth/login`.
    async fn login(&self, credentials: &Credentials) -> Result<AuthSuccess, ApiError>;
    /// `POST /auth/logout`.
    async fn logout(&self) -> Result<(), ApiError>;
    /// `GET /auth/getUserProfile`.
    async fn user_profile(&self) -> Result<User, ApiError>;
}

/// Durable bearer-token slot surviving page reloads.
///
/// A single slot, written only by the store; the HTTP collaborator reads it
/// to attach the `Authorization` header.
pub trait TokenStore {
    fn load(&self) -> Option<String>;
    fn save(&self, token: &str);
    fn clear(&self);
}

/// An error returned by a session-store operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AuthError {
    /// A guarded operation was invoked while another was in flight.
    #[error("another authentication operation is already in flight")]
    Busy,
    /// The auth API call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl AuthError {
    /// The server-supplied failure message, when one was present.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Api(api) => api.server_message(),
            Self::Busy => None,
        }
    }
}

/// Production store wiring: `gloo-net` HTTP client + `localStorage` token
/// slot, assembled at the root composition point and shared via context.
pub type AppSessionStore =
    SessionStore<crate::net::api::HttpAuthApi, crate::util::token::BrowserTokens>;

/// Session store: the authoritative record of the current authenticated
/// user for this browser tab.
///
/// Cloning shares the underlying session; the store lives for the
/// application's lifetime and is reset in place on logout, never replaced.
#[derive(Clone, Debug)]
pub struct SessionStore<A, T> {
    api: A,
    tokens: T,
    session: Rc<RefCell<Session>>,
    // True while a guarded operation holds the network boundary. Kept apart
    // from `Session::pending`: a fresh session reads as `Checking` before
    // the boot call has actually been issued.
    in_flight: Rc<Cell<bool>>,
}

impl<A: AuthApi, T: TokenStore> SessionStore<A, T> {
    pub fn new(api: A, tokens: T) -> Self {
        Self {
            api,
            tokens,
            session: Rc::new(RefCell::new(Session::default())),
            in_flight: Rc::new(Cell::new(false)),
        }
    }

    /// A copy of the current session, for mirroring into a reactive signal.
    pub fn snapshot(&self) -> Session {
        self.session.borrow().clone()
    }

    /// Resolve the persisted token to a user via `GET /auth/check`.
    ///
    /// Any failure resolves to the anonymous state: an expired or invalid
    /// token must not leave a stale `current_user` behind. The caller may
    /// ignore the error; the app shell does, treating failure as "not
    /// signed in".
    ///
    /// # Errors
    ///
    /// [`AuthError::Busy`] while a login or sign-up is in flight, otherwise
    /// the underlying [`ApiError`].
    pub async fn check_session(&self) -> Result<User, AuthError> {
        // A fresh session is born in the checking state; the boot call
        // claims it rather than being rejected by it.
        self.begin(PendingOp::Checking, &[PendingOp::None, PendingOp::Checking])?;
        let result = self.api.check().await;
        self.in_flight.set(false);
        let mut session = self.session.borrow_mut();
        session.pending = PendingOp::None;
        match result {
            Ok(user) => {
                session.current_user = Some(user.clone());
                Ok(user)
            }
            Err(err) => {
                session.current_user = None;
                log::debug!("session check failed: {err}");
                Err(err.into())
            }
        }
    }

    /// Register a new account via `POST /auth/register`.
    ///
    /// Input validation (username/email shape, password length) is the
    /// caller's responsibility; the store submits what it is given.
    ///
    /// # Errors
    ///
    /// [`AuthError::Busy`] while another guarded operation is in flight,
    /// otherwise the underlying [`ApiError`] with the server's message
    /// preserved when present. On failure the session and token slot are
    /// left untouched.
    pub async fn sign_up(&self, registration: &Registration) -> Result<User, AuthError> {
        self.begin(PendingOp::SigningUp, &[PendingOp::None])?;
        let result = self.api.register(registration).await;
        self.finish_auth(result, "sign-up")
    }

    /// Authenticate via `POST /auth/login`. Same contract as [`Self::sign_up`].
    ///
    /// # Errors
    ///
    /// See [`Self::sign_up`].
    pub async fn login(&self, credentials: &Credentials) -> Result<User, AuthError> {
        self.begin(PendingOp::LoggingIn, &[PendingOp::None])?;
        let result = self.api.login(credentials).await;
        self.finish_auth(result, "login")
    }

    /// Notify the server and clear the local session via `POST /auth/logout`.
    ///
    /// # Errors
    ///
    /// The underlying [`ApiError`]. On failure the local session and the
    /// persisted token are left untouched: the user still shows as signed
    /// in locally until a later check or logout settles it.
    pub async fn logout(&self) -> Result<(), AuthError> {
        match self.api.logout().await {
            Ok(()) => {
                self.tokens.clear();
                let mut session = self.session.borrow_mut();
                session.current_user = None;
                session.profile = None;
                Ok(())
            }
            Err(err) => {
                log::warn!("logout request failed: {err}");
                Err(err.into())
            }
        }
    }

    /// Fetch the extended profile via `GET /auth/getUserProfile`.
    ///
    /// # Errors
    ///
    /// The underlying [`ApiError`]; on failure the stored profile is left
    /// unchanged.
    pub async fn fetch_profile(&self) -> Result<User, AuthError> {
        match self.api.user_profile().await {
            Ok(user) => {
                self.session.borrow_mut().profile = Some(user.clone());
                Ok(user)
            }
            Err(err) => {
                log::debug!("profile fetch failed: {err}");
                Err(err.into())
            }
        }
    }

    fn begin(&self, op: PendingOp, allowed_from: &[PendingOp]) -> Result<(), AuthError> {
        if self.in_flight.get() {
            return Err(AuthError::Busy);
        }
        let mut session = self.session.borrow_mut();
        if !allowed_from.contains(&session.pending) {
            return Err(AuthError::Busy);
        }
        self.in_flight.set(true);
        session.pending = op;
        Ok(())
    }

    fn finish_auth(
        &self,
        result: Result<AuthSuccess, ApiError>,
        context: &'static str,
    ) -> Result<User, AuthError> {
        self.in_flight.set(false);
        let mut session = self.session.borrow_mut();
        session.pending = PendingOp::None;
        match result {
            Ok(auth) => {
                if let Some(token) = &auth.access_token {
                    self.tokens.save(token);
                }
                session.current_user = Some(auth.user.clone());
                Ok(auth.user)
            }
            Err(err) => {
                log::debug!("{context} failed: {err}");
                Err(err.into())
            }
        }
    }
}
