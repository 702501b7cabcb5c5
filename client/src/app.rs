//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::DashboardLayout;
use crate::components::notice_stack::NoticeStack;
use crate::net::api::ApiClient;
use crate::net::source::TourSource;
use crate::net::transport::FetchTransport;
use crate::pages::{
    bookings::BookingsPage, dashboard::DashboardHome, login::LoginPage, register::RegisterPage,
    root::RootRedirect, tour_editor::TourEditorPage, tours::ToursPage,
};
use crate::state::session::{SessionState, SessionStore};
use crate::state::tours::ToursState;
use crate::state::ui::UiState;
use crate::util::auth::LOGIN_ROUTE;
use crate::util::config::ClientConfig;
use crate::util::nav::hard_redirect;
use crate::util::storage::{BrowserStorage, KeyValueStore};

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
/// Builds the API client and tour source from build-time config, provides
/// them and the shared state signals as context, and sets up routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let storage: Arc<dyn KeyValueStore> = Arc::new(BrowserStorage);
    let session = SessionStore::new(storage.clone());
    let api = ApiClient::new(&config.api_url, Arc::new(FetchTransport), session.clone())
        .on_session_expired(|| hard_redirect(LOGIN_ROUTE));
    let source = TourSource::from_config(&config, api.clone(), storage);

    let session_state = RwSignal::new(SessionState::default());
    let ui = RwSignal::new(UiState::default());
    let tours = RwSignal::new(ToursState::default());

    // Storage is only readable in the browser; effects never run during SSR.
    let stored = session.clone();
    Effect::new(move || session_state.set(stored.snapshot()));

    provide_context(config);
    provide_context(session);
    provide_context(api);
    provide_context(source);
    provide_context(session_state);
    provide_context(ui);
    provide_context(tours);

    view! {
        <Stylesheet id="leptos" href="/pkg/tourdesk.css"/>
        <Title text="Tour Admin"/>

        <Router>
            <NoticeStack/>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RootRedirect/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <ParentRoute path=StaticSegment("dashboard") view=DashboardLayout>
                    <Route path=StaticSegment("") view=DashboardHome/>
                    <Route path=StaticSegment("tours") view=ToursPage/>
                    <Route path=(StaticSegment("tours"), ParamSegment("id")) view=TourEditorPage/>
                    <Route path=StaticSegment("bookings") view=BookingsPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
