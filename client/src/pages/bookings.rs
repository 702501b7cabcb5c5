//! Bookings for the signed-in provider's tours.

#[cfg(test)]
#[path = "bookings_test.rs"]
mod bookings_test;

use leptos::prelude::*;

use crate::components::booking_table::BookingTable;
use crate::components::notice_stack::push_notice;
use crate::net::api::ApiClient;
use crate::net::bookings;
use crate::net::source::TourSource;
use crate::net::types::Booking;
use crate::state::bookings::BookingsState;
use crate::state::session::SessionState;
use crate::state::ui::{NoticeKind, UiState};
use crate::util::nav;

/// Keep bookings for `tour_ids`; an empty id list keeps everything.
pub fn provider_bookings(items: Vec<Booking>, tour_ids: &[String]) -> Vec<Booking> {
    if tour_ids.is_empty() {
        return items;
    }
    items.into_iter().filter(|b| tour_ids.iter().any(|id| *id == b.tour_id)).collect()
}

#[component]
pub fn BookingsPage() -> impl IntoView {
    let api = expect_context::<ApiClient>();
    let source = expect_context::<TourSource>();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let state = RwSignal::new(BookingsState::default());
    let mock_mode = source.is_local();

    let load_api = api.clone();
    Effect::new(move || {
        let (loading, tour_ids) =
            session_state.with(|s| (s.loading, s.provider.as_ref().map(|p| p.tours.clone()).unwrap_or_default()));
        if loading || mock_mode {
            return;
        }
        state.update(BookingsState::begin_load);
        let api = load_api.clone();
        leptos::task::spawn_local(async move {
            match bookings::list_bookings(&api).await {
                Ok(items) => state.update(|s| s.loaded(provider_bookings(items, &tour_ids))),
                Err(e) => {
                    leptos::logging::warn!("booking list failed: {e}");
                    state.update(|s| s.failed(e.to_string()));
                }
            }
        });
    });

    let on_cancel = Callback::new(move |id: String| {
        if !nav::confirm("Cancel this booking?") {
            return;
        }
        let api = api.clone();
        leptos::task::spawn_local(async move {
            match bookings::cancel_booking(&api, &id).await {
                Ok(()) => {
                    state.update(|s| s.mark_cancelled(&id));
                    push_notice(ui, NoticeKind::Success, "Booking cancelled", "The traveller's booking was cancelled.");
                }
                Err(e) => push_notice(ui, NoticeKind::Error, "Could not cancel booking", e.to_string()),
            }
        });
    });

    let items = Signal::derive(move || state.with(|s| s.items.clone()));
    let active_count = move || state.with(|s| s.active().count());

    view! {
        <div class="page">
            <div class="page__header">
                <h1>"Bookings"</h1>
                <span class="badge">{active_count} " active"</span>
            </div>
            {mock_mode.then(|| view! { <p class="empty-state">"Bookings are not available with demo data."</p> })}
            {move || state.with(|s| s.error.clone()).map(|e| view! { <p class="form-alert">{e}</p> })}
            <Show
                when=move || !state.with(|s| s.loading)
                fallback=|| view! { <p class="empty-state">"Loading bookings..."</p> }
            >
                <BookingTable bookings=items on_cancel=on_cancel/>
            </Show>
        </div>
    }
}
