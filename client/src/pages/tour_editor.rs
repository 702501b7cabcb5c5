//! `/dashboard/tours/:id`: create (`new`) or edit a tour.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the `TourFormState` signal for the lifetime of the route. Submission
//! goes through `submit_tour`: validation, config check, sequential image
//! uploads, then create or update on the tour source. On failure the form is
//! left exactly as the user filled it; on success the editor returns to the
//! tour list.

#[cfg(test)]
#[path = "tour_editor_test.rs"]
mod tour_editor_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;
use leptos_router::hooks::{use_navigate, use_params_map};
use leptos_router::NavigateOptions;

use crate::components::notice_stack::push_notice;
use crate::components::tour_form::{FormSignal, TourFormView};
use crate::net::source::TourSource;
use crate::net::upload::ImageHostUploader;
use crate::state::session::SessionState;
use crate::state::tour_form::{submit_tour, SubmitError, TourFormState, ValidationErrors};
use crate::state::ui::{NoticeKind, UiState};
use crate::util::config::ClientConfig;
use crate::util::preview::ObjectUrlPreviews;

pub const NEW_TOUR_ID: &str = "new";
pub const TOURS_ROUTE: &str = "/dashboard/tours";

pub fn is_new_tour(id: &str) -> bool {
    id == NEW_TOUR_ID
}

#[derive(Clone, Debug, PartialEq)]
pub enum EditorPhase {
    Loading,
    Ready,
    NotFound,
    Failed(String),
}

#[component]
pub fn TourEditorPage() -> impl IntoView {
    let source = expect_context::<TourSource>();
    let config = expect_context::<ClientConfig>();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let params = use_params_map();
    let navigate = use_navigate();

    let form: FormSignal = RwSignal::new_local(TourFormState::new());
    let phase = RwSignal::new(EditorPhase::Loading);
    let busy = RwSignal::new(false);
    let saved = RwSignal::new(false);
    let tour_id = Memo::new(move |_| params.with(|p| p.get("id").unwrap_or_default()));

    on_cleanup(move || {
        let _ = form.try_update(|f| f.release_all(&ObjectUrlPreviews));
    });

    let load_source = source.clone();
    Effect::new(move || {
        let id = tour_id.get();
        form.update(|f| f.release_all(&ObjectUrlPreviews));
        if is_new_tour(&id) {
            form.set(TourFormState::new());
            phase.set(EditorPhase::Ready);
            return;
        }
        phase.set(EditorPhase::Loading);
        let source = load_source.clone();
        leptos::task::spawn_local(async move {
            match source.get(&id).await {
                Ok(tour) => {
                    form.set(TourFormState::from_tour(&tour));
                    phase.set(EditorPhase::Ready);
                }
                Err(e) if e.status() == Some(404) => phase.set(EditorPhase::NotFound),
                Err(e) => {
                    leptos::logging::warn!("loading tour {id} failed: {e}");
                    phase.set(EditorPhase::Failed(e.to_string()));
                }
            }
        });
    });

    Effect::new(move || {
        if saved.get() {
            navigate(TOURS_ROUTE, NavigateOptions::default());
        }
    });

    let on_submit = Callback::new(move |()| {
        if busy.get_untracked() {
            return;
        }
        form.update(|f| f.errors = ValidationErrors::default());
        let snapshot = form.get_untracked();
        let id = tour_id.get_untracked();
        let provider_id = session_state.with_untracked(|s| s.provider_id().map(str::to_owned));
        let source = source.clone();
        let config = config.clone();
        busy.set(true);

        leptos::task::spawn_local(async move {
            let result = submit_tour(&snapshot, &config, ImageHostUploader::new, |mut draft| async move {
                if is_new_tour(&id) {
                    draft.provider_id = provider_id;
                    source.create(&draft).await
                } else {
                    source.update(&id, provider_id.as_deref(), &draft).await
                }
            })
            .await;
            busy.set(false);

            match result {
                Ok(tour) => {
                    form.update(|f| f.release_all(&ObjectUrlPreviews));
                    push_notice(ui, NoticeKind::Success, "Tour saved", format!("\"{}\" is up to date.", tour.title));
                    saved.set(true);
                }
                Err(SubmitError::Invalid(errors)) => {
                    push_notice(ui, NoticeKind::Error, "Check the form", errors.to_string());
                    form.update(|f| f.errors = errors);
                }
                Err(e) => {
                    leptos::logging::error!("tour submission failed: {e}");
                    push_notice(ui, NoticeKind::Error, "Could not save tour", e.to_string());
                }
            }
        });
    });

    let heading = move || if is_new_tour(&tour_id.get()) { "Create a new tour" } else { "Edit tour" };
    let submit_label = if is_new_tour(&tour_id.get_untracked()) { "Create tour" } else { "Save changes" };

    view! {
        <div class="page">
            <h1>{heading}</h1>
            {move || match phase.get() {
                EditorPhase::Loading => view! { <p class="empty-state">"Loading tour..."</p> }.into_any(),
                EditorPhase::NotFound => {
                    view! {
                        <div class="empty-state">
                            <p>"Tour not found."</p>
                            <a href=TOURS_ROUTE>"Back to my tours"</a>
                        </div>
                    }
                        .into_any()
                }
                EditorPhase::Failed(message) => view! { <p class="form-alert">{message}</p> }.into_any(),
                EditorPhase::Ready => {
                    view! {
                        <TourFormView form=form busy=busy submit_label=submit_label on_submit=on_submit/>
                    }
                        .into_any()
                }
            }}
        </div>
    }
}
