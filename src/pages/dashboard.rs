//! Dashboard page with the signed-in header and placeholder waste metrics.
//!
//! SYSTEM CONTEXT
//! ==============
//! The metric values are static display copy; no sensor data flows into the
//! client. The page's real job is consuming the session: greeting, the
//! logout flow, and bouncing anonymous visitors to the sign-in form.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::notices::NoticeState;
use crate::state::session::Session;
use crate::store::{AppSessionStore, AuthError};
use crate::util::redirect::redirect_anonymous;

fn logout_failure_message(err: &AuthError) -> String {
    err.server_message()
        .map_or_else(|| "Logout failed. Please try again.".to_owned(), ToOwned::to_owned)
}

/// Dashboard page: overview metrics plus the logout control.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let notices = expect_context::<RwSignal<NoticeState>>();
    let store = expect_context::<AppSessionStore>();
    let navigate = use_navigate();

    redirect_anonymous(session, navigate.clone());

    let display_name = move || session.get().display_name();
    let logging_out = RwSignal::new(false);

    let on_logout = {
        let store = store.clone();
        let navigate = navigate.clone();
        move |_| {
            if logging_out.get() {
                return;
            }
            logging_out.set(true);

            #[cfg(feature = "hydrate")]
            {
                let store = store.clone();
                let navigate = navigate.clone();
                leptos::task::spawn_local(async move {
                    let result = store.logout().await;
                    session.set(store.snapshot());
                    match result {
                        Ok(()) => {
                            crate::components::notice_tray::show_success(
                                notices,
                                "Logout successful!",
                            );
                            navigate(
                                "/",
                                leptos_router::NavigateOptions {
                                    replace: true,
                                    ..Default::default()
                                },
                            );
                        }
                        // The server call failed, so the local session is
                        // still authenticated; stay on the dashboard.
                        Err(err) => crate::components::notice_tray::show_error(
                            notices,
                            logout_failure_message(&err),
                        ),
                    }
                    logging_out.set(false);
                });
            }
            #[cfg(not(feature = "hydrate"))]
            {
                let _ = (&store, &navigate, &notices);
                logging_out.set(false);
            }
        }
    };

    view! {
        <div class="dashboard-page">
            <nav class="dashboard-nav">
                <span class="dashboard-nav__brand">"EcoBin IoT Dashboard"</span>
                <div class="dashboard-nav__session">
                    <span class="dashboard-nav__user">"Welcome, " {display_name}</span>
                    <button
                        class="dashboard-nav__logout"
                        on:click=on_logout
                        disabled=move || logging_out.get()
                    >
                        {move || if logging_out.get() { "Logging out..." } else { "Logout" }}
                    </button>
                </div>
            </nav>

            <main class="dashboard-main">
                <h1>"Overview"</h1>
                <section class="dashboard-panel">
                    <h2>"Real-Time Waste Metrics"</h2>
                    <div class="dashboard-panel__grid">
                        <MetricCard title="Total Bins Monitored" value="125" tone="info"/>
                        <MetricCard title="Average Fill Level" value="65%" tone="warn"/>
                        <MetricCard title="Critical Alerts" value="4 Bins" tone="alert"/>
                    </div>
                </section>
            </main>
        </div>
    }
}

/// Single placeholder metric tile.
#[component]
fn MetricCard(title: &'static str, value: &'static str, tone: &'static str) -> impl IntoView {
    view! {
        <div class=format!("metric-card metric-card--{tone}")>
            <p class="metric-card__title">{title}</p>
            <p class="metric-card__value">{value}</p>
        </div>
    }
}
