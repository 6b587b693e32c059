//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A `Session` snapshot is provided via context as an `RwSignal<Session>` so
//! route guards and user-aware components can coordinate redirects and
//! identity-dependent rendering. All transitions are driven by the
//! `SessionStore`; the signal only mirrors its state.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Authentication state: the current user, the last fetched profile, and
/// which auth operation (if any) is in flight.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub current_user: Option<User>,
    pub profile: Option<User>,
    pub pending: PendingOp,
}

impl Default for Session {
    /// A fresh session starts in the checking state: the boot-time
    /// `check_session` call resolves it to authenticated or anonymous.
    fn default() -> Self {
        Self {
            current_user: None,
            profile: None,
            pending: PendingOp::Checking,
        }
    }
}

impl Session {
    /// True once a user is present.
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }

    /// Display name for navbars, falling back to a generic label.
    pub fn display_name(&self) -> String {
        self.current_user
            .as_ref()
            .map_or_else(|| "User".to_owned(), |user| user.username.clone())
    }
}

/// The auth operation currently in flight, if any.
///
/// At most one guarded operation runs at a time; `SessionStore` rejects a
/// second guarded call instead of racing it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PendingOp {
    #[default]
    None,
    Checking,
    LoggingIn,
    SigningUp,
}
