//! Toast-style notification tray.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages push notices through `show_success`/`show_error` after auth
//! operations resolve; the tray renders them in a fixed overlay and each
//! notice dismisses itself after a few seconds or on click.

use leptos::prelude::*;

use crate::state::notices::{NoticeLevel, NoticeState};

#[cfg(feature = "hydrate")]
const AUTO_DISMISS_MS: u32 = 4_000;

/// Push a success notice and schedule its dismissal.
pub fn show_success(notices: RwSignal<NoticeState>, message: impl Into<String>) {
    show(notices, NoticeLevel::Success, message.into());
}

/// Push an error notice and schedule its dismissal.
pub fn show_error(notices: RwSignal<NoticeState>, message: impl Into<String>) {
    show(notices, NoticeLevel::Error, message.into());
}

fn show(notices: RwSignal<NoticeState>, level: NoticeLevel, message: String) {
    let Some(id) = notices.try_update(|state| state.push(level, message)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(AUTO_DISMISS_MS).await;
        notices.update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

/// Fixed overlay rendering the live notices.
#[component]
pub fn NoticeTray() -> impl IntoView {
    let notices = expect_context::<RwSignal<NoticeState>>();

    view! {
        <div class="notice-tray">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div
                                class=format!("notice notice--{}", notice.level.class_suffix())
                                on:click=move |_| notices.update(|state| state.dismiss(id))
                            >
                                {notice.message}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
