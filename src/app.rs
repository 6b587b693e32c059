//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::notice_tray::NoticeTray;
use crate::net::api::HttpAuthApi;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, not_found::NotFoundPage, signin::SignInPage,
    signup::SignUpPage,
};
use crate::state::notices::NoticeState;
use crate::state::session::{PendingOp, Session};
use crate::store::{AppSessionStore, SessionStore};
use crate::util::token::BrowserTokens;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the session store and provides it, the session snapshot signal, and
/// the notice queue to all child components. Kicks off the boot-time session
/// check and gates the router behind it.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(Session::default());
    let notices = RwSignal::new(NoticeState::default());
    let store: AppSessionStore = SessionStore::new(HttpAuthApi::new(), BrowserTokens);

    provide_context(session);
    provide_context(notices);
    provide_context(store.clone());

    // Boot: resolve the persisted token to a user exactly once. Failure is
    // silent; the UI infers anonymity from the empty session.
    #[cfg(feature = "hydrate")]
    {
        let store = store.clone();
        leptos::task::spawn_local(async move {
            let _ = store.check_session().await;
            session.set(store.snapshot());
        });
    }
    #[cfg(not(feature = "hydrate"))]
    let _ = &store;

    let booting = move || {
        let current = session.get();
        current.pending == PendingOp::Checking && current.current_user.is_none()
    };

    view! {
        <Stylesheet id="leptos" href="/pkg/ecobin-client.css"/>
        <Title text="EcoBin IoT"/>

        <Show
            when=move || !booting()
            fallback=|| {
                view! {
                    <div class="boot-screen">
                        <div class="boot-screen__spinner"></div>
                    </div>
                }
            }
        >
            <Router>
                <Routes fallback=|| view! { <NotFoundPage/> }>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("signup") view=SignUpPage/>
                    <Route path=StaticSegment("signin") view=SignInPage/>
                    <Route path=StaticSegment("dashboard") view=DashboardPage/>
                </Routes>
            </Router>
        </Show>

        <NoticeTray/>
    }
}
