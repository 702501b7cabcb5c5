//! Dashboard home: welcome, quick stats, and the create-tour action.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::components::A;

use super::tours::install_tour_loader;
use crate::net::source::TourSource;
use crate::state::session::SessionState;
use crate::state::tours::{DashboardStats, ToursState};
use crate::util::format::format_rating;

/// Heading on the home page, e.g. `"Casa Tours dashboard"`.
pub fn dashboard_title(provider_name: Option<&str>) -> String {
    let name = provider_name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or("Provider");
    format!("{name} dashboard")
}

/// `(label, value)` pairs for the stat cards, in display order.
pub fn stat_cards(stats: &DashboardStats) -> Vec<(&'static str, String)> {
    vec![
        ("Tours", stats.total_tours.to_string()),
        ("Reviews", stats.total_reviews.to_string()),
        ("Average rating", format_rating(stats.average_rating)),
        ("With discount", stats.discounted.to_string()),
    ]
}

#[component]
pub fn DashboardHome() -> impl IntoView {
    let source = expect_context::<TourSource>();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let tours = expect_context::<RwSignal<ToursState>>();
    let mock_mode = source.is_local();

    install_tour_loader(source, session_state, tours);

    let welcome = move || {
        session_state.with(|s| s.user.as_ref().map(|u| format!("Welcome, {}", u.name)).unwrap_or_default())
    };
    let title = move || {
        session_state.with(|s| dashboard_title(s.provider.as_ref().map(|p| p.name.as_str())))
    };
    let cards = move || {
        let stats = tours.with(ToursState::stats);
        stat_cards(&stats)
            .into_iter()
            .map(|(label, value)| {
                view! {
                    <div class="stat-card">
                        <p class="stat-card__label">{label}</p>
                        <p class="stat-card__value">{value}</p>
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="page">
            <p class="page__eyebrow">{welcome}</p>
            <h1>{title}</h1>
            <p class="page__lead">"Manage your tours, bookings and settings from here."</p>
            {mock_mode.then(|| view! { <p class="badge">"Demo data: changes stay in this browser."</p> })}
            <div class="stat-grid">{cards}</div>
            <div class="action-grid">
                <div class="action-card">
                    <h2>"Create a tour"</h2>
                    <p>"Add a new experience for travellers."</p>
                    <A href="/dashboard/tours/new">"New tour"</A>
                </div>
                <div class="action-card">
                    <h2>"My tours"</h2>
                    <p>"Edit or remove your published tours."</p>
                    <A href="/dashboard/tours">"View tours"</A>
                </div>
                <div class="action-card">
                    <h2>"Bookings"</h2>
                    <p>"Review and cancel reservations."</p>
                    <A href="/dashboard/bookings">"View bookings"</A>
                </div>
            </div>
        </div>
    }
}
