//! `/`: send visitors to the dashboard or the login page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::state::session::SessionStore;
use crate::util::auth::root_redirect_target;

#[component]
pub fn RootRedirect() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let navigate = use_navigate();

    // Effects only run in the browser, where the stored token is readable.
    Effect::new(move || {
        let target = root_redirect_target(session.access_token().is_some());
        navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
    });

    view! { <div class="dashboard-pending">"Loading..."</div> }
}
