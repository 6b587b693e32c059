//! Sign-in page with caller-side form validation.

#[cfg(test)]
#[path = "signin_test.rs"]
mod signin_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::notice_tray::show_error;
use crate::net::types::Credentials;
use crate::state::notices::NoticeState;
use crate::state::session::Session;
use crate::store::{AppSessionStore, AuthError};
use crate::util::email::is_valid_email;
use crate::util::redirect::redirect_authenticated;

/// Validate and normalize the sign-in form fields.
fn validate_signin(email: &str, password: &str) -> Result<Credentials, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Email is required");
    }
    if !is_valid_email(email) {
        return Err("Email is invalid");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(Credentials {
        email: email.to_ascii_lowercase(),
        password: password.to_owned(),
    })
}

fn signin_failure_message(err: &AuthError) -> String {
    err.server_message().map_or_else(
        || "Login failed. Please check your credentials.".to_owned(),
        ToOwned::to_owned,
    )
}

/// Sign-in page: authenticates and lands on the dashboard.
#[component]
pub fn SignInPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let store = expect_context::<AppSessionStore>();
    let navigate = use_navigate();

    redirect_authenticated(session, navigate.clone());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let busy = RwSignal::new(false);

    let on_submit = {
        let store = store.clone();
        let navigate = navigate.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if busy.get() {
                return;
            }
            let credentials = match validate_signin(&email.get(), &password.get()) {
                Ok(credentials) => credentials,
                Err(message) => {
                    show_error(notices, message);
                    return;
                }
            };
            busy.set(true);

            #[cfg(feature = "hydrate")]
            {
                let store = store.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let result = store.login(&credentials).await;
                    session.set(store.snapshot());
                    match result {
                        Ok(_) => {
                            crate::components::notice_tray::show_success(
                                notices,
                                "Login successful!",
                            );
                            navigate(
                                "/dashboard",
                                leptos_router::NavigateOptions {
                                    replace: true,
                                    ..Default::default()
                                },
                            );
                        }
                        Err(err) => show_error(notices, signin_failure_message(&err)),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&credentials, &store, &navigate);
                busy.set(false);
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__aside">
                <h2>"Welcome Back to EcoBin"</h2>
                <p>
                    "Access your dashboard to monitor bin levels, track routes, and \
                     optimize collection schedules."
                </p>
            </div>
            <div class="auth-page__panel">
                <div class="auth-card">
                    <a href="/" class="auth-card__brand">
                        "EcoBin IoT"
                    </a>
                    <h1>"Sign In to Your Account"</h1>
                    <p class="auth-card__subtitle">"Enter your credentials to continue."</p>

                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label">
                            "Email"
                            <input
                                class="auth-form__input"
                                type="email"
                                placeholder="you@citycouncil.com"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </label>
                        <label class="auth-form__label">
                            "Password"
                            <input
                                class="auth-form__input"
                                type=move || if show_password.get() { "text" } else { "password" }
                                placeholder="********"
                                prop:value=move || password.get()
                                on:input=move |ev| password.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </label>
                        <button
                            class="auth-form__toggle"
                            type="button"
                            on:click=move |_| show_password.update(|shown| *shown = !*shown)
                        >
                            {move || if show_password.get() { "Hide password" } else { "Show password" }}
                        </button>
                        <button class="auth-form__submit" type="submit" disabled=move || busy.get()>
                            {move || if busy.get() { "Signing In..." } else { "Sign In" }}
                        </button>
                    </form>

                    <p class="auth-card__footer">
                        "New to EcoBin? " <a href="/signup">"Create an account"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
