//! Shared route-guard helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior: protected pages bounce
//! anonymous visitors to the sign-in form, and the auth forms bounce already
//! signed-in users to the dashboard.

#[cfg(test)]
#[path = "redirect_test.rs"]
mod redirect_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::{PendingOp, Session};

/// True when a protected page should bounce to `/signin`: no user and no
/// auth operation left that could still produce one.
pub fn should_redirect_anonymous(session: &Session) -> bool {
    session.pending == PendingOp::None && session.current_user.is_none()
}

/// True when an auth form should bounce to `/dashboard`.
pub fn should_redirect_authenticated(session: &Session) -> bool {
    session.current_user.is_some()
}

/// Redirect to `/signin` whenever the session resolves to anonymous.
pub fn redirect_anonymous<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_anonymous(&session.get()) {
            navigate("/signin", replace_navigation());
        }
    });
}

/// Redirect to `/dashboard` whenever a user is present.
pub fn redirect_authenticated<F>(session: RwSignal<Session>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_authenticated(&session.get()) {
            navigate("/dashboard", replace_navigation());
        }
    });
}

fn replace_navigation() -> NavigateOptions {
    NavigateOptions {
        replace: true,
        ..Default::default()
    }
}
