//! Sign-up page with caller-side form validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation happens here, before the session store is involved: the store
//! submits whatever it is given. Field rules mirror the backend's (trimmed
//! username, basic email shape, password of at least 6 characters).

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::notice_tray::show_error;
use crate::net::types::Registration;
use crate::state::notices::NoticeState;
use crate::state::session::Session;
use crate::store::{AppSessionStore, AuthError};
use crate::util::email::is_valid_email;
use crate::util::redirect::redirect_authenticated;

/// Validate and normalize the sign-up form fields.
fn validate_signup(
    username: &str,
    email: &str,
    password: &str,
) -> Result<Registration, &'static str> {
    let username = username.trim();
    if username.is_empty() {
        return Err("Name is required");
    }
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
    if password.chars().count() < 6 {
        return Err("Password must be at least 6 characters long");
    }
    Ok(Registration {
        username: username.to_owned(),
        email: email.to_ascii_lowercase(),
        password: password.to_owned(),
    })
}

fn signup_failure_message(err: &AuthError) -> String {
    err.server_message()
        .map_or_else(|| "Signup failed. Please try again.".to_owned(), ToOwned::to_owned)
}

/// Sign-up page: registers an account and lands on the dashboard.
#[component]
pub fn SignUpPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let store = expect_context::<AppSessionStore>();
    let navigate = use_navigate();

    // Already signed in? Straight to the dashboard.
    redirect_authenticated(session, navigate.clone());

    let username = RwSignal::new(String::new());
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
            let registration =
                match validate_signup(&username.get(), &email.get(), &password.get()) {
                    Ok(registration) => registration,
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
                    let result = store.sign_up(&registration).await;
                    session.set(store.snapshot());
                    match result {
                        Ok(_) => {
                            crate::components::notice_tray::show_success(
                                notices,
                                "Account created successfully!",
                            );
                            navigate(
                                "/dashboard",
                                leptos_router::NavigateOptions {
                                    replace: true,
                                    ..Default::default()
                                },
                            );
                        }
                        Err(err) => show_error(notices, signup_failure_message(&err)),
                    }
                    busy.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&registration, &store, &navigate);
                busy.set(false);
            }
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-page__aside">
                <h2>"EcoBin IoT Portal"</h2>
                <p>
                    "Intelligent Waste Management Starts Here. Register to access \
                     real-time bin data and route optimization features."
                </p>
            </div>
            <div class="auth-page__panel">
                <div class="auth-card">
                    <a href="/" class="auth-card__brand">
                        "EcoBin IoT"
                    </a>
                    <h1>"Create Your Account"</h1>
                    <p class="auth-card__subtitle">"Get started with smart waste management today."</p>

                    <form class="auth-form" on:submit=on_submit>
                        <label class="auth-form__label">
                            "Full Name"
                            <input
                                class="auth-form__input"
                                type="text"
                                placeholder="John Doe"
                                prop:value=move || username.get()
                                on:input=move |ev| username.set(event_target_value(&ev))
                                disabled=move || busy.get()
                            />
                        </label>
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
                            {move || if busy.get() { "Signing Up..." } else { "Create Account" }}
                        </button>
                    </form>

                    <p class="auth-card__footer">
                        "Already have an account? " <a href="/signin">"Sign in"</a>
                    </p>
                </div>
            </div>
        </div>
    }
}
