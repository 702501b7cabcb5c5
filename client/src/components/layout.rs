//! Dashboard shell: sidebar navigation, session display, and the routed outlet.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every `/dashboard/*` route renders inside this layout, so it is also where
//! the unauthenticated redirect is installed. Pages below it can assume a
//! signed-in user once they are visible.

use leptos::prelude::*;
use leptos_router::components::{A, Outlet};
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::net::auth;
use crate::state::session::{SessionState, SessionStore};
use crate::state::ui::UiState;
use crate::util::auth::{install_unauth_redirect, LOGIN_ROUTE};

#[component]
pub fn DashboardLayout() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    install_unauth_redirect(session_state, use_navigate());

    let ready = move || session_state.with(|s| !s.loading && s.user.is_some());
    let pending_text = move || {
        if session_state.with(|s| s.loading) { "Loading..." } else { "Redirecting to login..." }
    };

    view! {
        <Show
            when=ready
            fallback=move || view! { <div class="dashboard-pending">{pending_text}</div> }
        >
            <div class="dashboard-shell" class:dashboard-shell--menu-open=move || ui.get().sidebar_open>
                <aside class="sidebar">
                    <div class="sidebar__brand">"Tour Admin"</div>
                    <SessionCard/>
                    <nav class="sidebar__nav">
                        <A href="/dashboard" exact=true>"Dashboard"</A>
                        <A href="/dashboard/tours" exact=true>"My tours"</A>
                        <A href="/dashboard/tours/new">"New tour"</A>
                        <A href="/dashboard/bookings">"Bookings"</A>
                    </nav>
                    <LogoutButton/>
                </aside>
                <div class="dashboard-shell__main">
                    <header class="dashboard-header">
                        <button
                            class="btn btn--ghost"
                            title="Toggle menu"
                            on:click=move |_| ui.update(UiState::toggle_sidebar)
                        >
                            "☰"
                        </button>
                    </header>
                    <main class="dashboard-content">
                        <Outlet/>
                    </main>
                </div>
            </div>
        </Show>
    }
}

/// Avatar initial, display name, email, and provider verification status.
#[component]
fn SessionCard() -> impl IntoView {
    let session_state = expect_context::<RwSignal<SessionState>>();

    let name = move || session_state.with(|s| s.display_name().unwrap_or("Provider").to_owned());
    let initial = move || name().chars().next().map(|c| c.to_uppercase().to_string()).unwrap_or_default();
    let email = move || session_state.with(|s| s.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());
    let status = move || {
        session_state.with(|s| s.provider.as_ref().map(|p| p.verification_status.label()).unwrap_or(""))
    };

    view! {
        <div class="session-card">
            <div class="session-card__avatar">{initial}</div>
            <div>
                <p class="session-card__name">{name}</p>
                <p class="session-card__email">{email}</p>
                <p class="session-card__status">{status}</p>
            </div>
        </div>
    }
}

#[component]
fn LogoutButton() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let session_state = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth::logout(&session);
        session_state.set(SessionState { loading: false, ..SessionState::default() });
        navigate(LOGIN_ROUTE, NavigateOptions::default());
    };

    view! {
        <button class="btn btn--ghost sidebar__logout" on:click=on_logout>
            "Log out"
        </button>
    }
}
