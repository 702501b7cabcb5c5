//! Provider tour list with delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ToursState` lives in context so the dashboard home and this page share one
//! list. Deleting confirms with the user, calls the tour source, drops the row
//! locally, then re-fetches so the table matches the server.

#[cfg(test)]
#[path = "tours_test.rs"]
mod tours_test;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::notice_stack::push_notice;
use crate::components::tour_table::TourTable;
use crate::net::source::TourSource;
use crate::net::types::TourFilters;
use crate::state::session::SessionState;
use crate::state::tours::ToursState;
use crate::state::ui::{NoticeKind, UiState};
use crate::util::nav;

/// Upper bound on tours fetched for one provider.
pub const PROVIDER_TOUR_LIMIT: usize = 100;

/// Filters for the signed-in provider's own tours.
pub fn provider_filters(provider_id: Option<&str>) -> TourFilters {
    match provider_id {
        Some(id) => TourFilters::for_provider(id, PROVIDER_TOUR_LIMIT),
        None => TourFilters { limit: PROVIDER_TOUR_LIMIT.to_string(), ..TourFilters::default() },
    }
}

/// Load the provider's tours into `tours`.
pub fn fetch_tours(source: TourSource, filters: TourFilters, tours: RwSignal<ToursState>) {
    tours.update(ToursState::begin_load);
    leptos::task::spawn_local(async move {
        match source.list(&filters).await {
            Ok(items) => tours.update(|t| t.loaded(items)),
            Err(e) => {
                leptos::logging::warn!("tour list failed: {e}");
                tours.update(|t| t.failed(e.to_string()));
            }
        }
    });
}

/// Re-fetch whenever the session changes.
pub fn install_tour_loader(source: TourSource, session_state: RwSignal<SessionState>, tours: RwSignal<ToursState>) {
    Effect::new(move || {
        let (loading, filters) = session_state.with(|s| (s.loading, provider_filters(s.provider_id())));
        if !loading {
            fetch_tours(source.clone(), filters, tours);
        }
    });
}

#[component]
pub fn ToursPage() -> impl IntoView {
    let source = expect_context::<TourSource>();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let tours = expect_context::<RwSignal<ToursState>>();
    let ui = expect_context::<RwSignal<UiState>>();

    install_tour_loader(source.clone(), session_state, tours);

    let on_delete = Callback::new(move |id: String| {
        if tours.with_untracked(|t| t.deleting.is_some()) {
            return;
        }
        if !nav::confirm("Delete this tour? This cannot be undone.") {
            return;
        }
        tours.update(|t| t.deleting = Some(id.clone()));
        let source = source.clone();
        leptos::task::spawn_local(async move {
            match source.delete(&id).await {
                Ok(()) => {
                    tours.update(|t| t.remove(&id));
                    push_notice(ui, NoticeKind::Success, "Tour deleted", "The tour was removed.");
                    let filters = session_state.with_untracked(|s| provider_filters(s.provider_id()));
                    fetch_tours(source, filters, tours);
                }
                Err(e) => {
                    tours.update(|t| t.deleting = None);
                    push_notice(ui, NoticeKind::Error, "Could not delete tour", e.to_string());
                }
            }
        });
    });

    let items = Signal::derive(move || tours.with(|t| t.items.clone()));
    let deleting = Signal::derive(move || tours.with(|t| t.deleting.clone()));

    view! {
        <div class="page">
            <div class="page__header">
                <h1>"My tours"</h1>
                <A href="/dashboard/tours/new">"New tour"</A>
            </div>
            {move || tours.with(|t| t.error.clone()).map(|e| view! { <p class="form-alert">{e}</p> })}
            <Show
                when=move || !tours.with(|t| t.loading && t.items.is_empty())
                fallback=|| view! { <p class="empty-state">"Loading tours..."</p> }
            >
                <TourTable tours=items deleting=deleting on_delete=on_delete/>
            </Show>
        </div>
    }
}
