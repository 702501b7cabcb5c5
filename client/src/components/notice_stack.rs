//! Toast-style notices pinned to the corner of every page.

use leptos::prelude::*;

use crate::state::ui::{Notice, NoticeKind, UiState};

/// Show a notice; it dismisses itself after `NOTICE_TIMEOUT_MS` in the browser.
pub fn push_notice(ui: RwSignal<UiState>, kind: NoticeKind, title: &str, message: impl Into<String>) {
    let mut id = 0;
    let message = message.into();
    ui.update(|state| id = state.notify(kind, title, message));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(crate::state::ui::NOTICE_TIMEOUT_MS).await;
        // The app may have been torn down while the timer ran.
        let _ = ui.try_update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

#[component]
pub fn NoticeStack() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    view! {
        <div class="notice-stack" aria-live="polite">
            <For
                each=move || ui.get().notices
                key=|notice| notice.id
                children=move |notice: Notice| {
                    let id = notice.id;
                    view! {
                        <div class=notice.kind.css_class() role="status">
                            <div class="notice__body">
                                <strong class="notice__title">{notice.title}</strong>
                                <p class="notice__message">{notice.message}</p>
                            </div>
                            <button
                                class="notice__close"
                                title="Dismiss"
                                on:click=move |_| ui.update(|state| state.dismiss(id))
                            >
                                "×"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
