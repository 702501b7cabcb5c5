//! Shared auth UI helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every dashboard route applies the same unauthenticated redirect, and the
//! root route picks its landing page from the same session data.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

pub const LOGIN_ROUTE: &str = "/login";
pub const DASHBOARD_ROUTE: &str = "/dashboard";

/// A loaded session with no user (or no token) must go to `/login`.
pub fn should_redirect_unauth(state: &SessionState) -> bool {
    !state.loading && state.user.is_none()
}

/// Landing page for `/`.
pub fn root_redirect_target(has_access_token: bool) -> &'static str {
    if has_access_token { DASHBOARD_ROUTE } else { LOGIN_ROUTE }
}

/// Redirect to `/login` whenever the session has loaded and no user is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if should_redirect_unauth(&state) {
            navigate(LOGIN_ROUTE, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
