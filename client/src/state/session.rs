//! Session lifecycle for the signed-in provider.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` is the only owner of the persisted session keys. The HTTP
//! client reads and rotates tokens through it, the login page begins a
//! session with it, and logout or a terminal auth failure clears it.
//! `SessionState` is the reactive snapshot components render from.
//!
//! DESIGN
//! ======
//! Lifecycle: `begin` at login, `set_tokens` on refresh, `clear_tokens` on
//! refresh rejection, `end` at logout.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::Arc;

use crate::net::types::{LoginResponse, Provider, User};
use crate::util::storage::{self, KeyValueStore};

pub const USER_KEY: &str = "user";
pub const PROVIDER_KEY: &str = "provider";
pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";

/// Handle over the persisted session keys. Cheap to clone.
#[derive(Clone)]
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("has_access_token", &self.access_token().is_some())
            .finish()
    }
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Persist everything a successful login returned.
    ///
    /// The user's password is never written to storage.
    pub fn begin(&self, login: &LoginResponse) {
        self.set_tokens(&login.access_token, Some(&login.refresh_token));
        match &login.user {
            Some(user) => {
                let mut cached = user.clone();
                cached.password = None;
                storage::save_json(self.store.as_ref(), USER_KEY, &cached);
            }
            None => self.store.remove(USER_KEY),
        }
        match &login.provider {
            Some(provider) => storage::save_json(self.store.as_ref(), PROVIDER_KEY, provider),
            None => self.store.remove(PROVIDER_KEY),
        }
    }

    pub fn access_token(&self) -> Option<String> {
        self.store.get(ACCESS_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.store.get(REFRESH_TOKEN_KEY).filter(|t| !t.is_empty())
    }

    /// Store a new access token, and a rotated refresh token when provided.
    pub fn set_tokens(&self, access_token: &str, refresh_token: Option<&str>) {
        self.store.set(ACCESS_TOKEN_KEY, access_token);
        if let Some(refresh) = refresh_token {
            self.store.set(REFRESH_TOKEN_KEY, refresh);
        }
    }

    /// Drop both tokens but keep the cached profile.
    pub fn clear_tokens(&self) {
        self.store.remove(ACCESS_TOKEN_KEY);
        self.store.remove(REFRESH_TOKEN_KEY);
    }

    /// Forget the whole session.
    pub fn end(&self) {
        self.clear_tokens();
        self.store.remove(USER_KEY);
        self.store.remove(PROVIDER_KEY);
    }

    pub fn user(&self) -> Option<User> {
        storage::load_json(self.store.as_ref(), USER_KEY)
    }

    pub fn provider(&self) -> Option<Provider> {
        storage::load_json(self.store.as_ref(), PROVIDER_KEY)
    }

    /// Snapshot the persisted session for rendering.
    pub fn snapshot(&self) -> SessionState {
        let authenticated = self.access_token().is_some();
        SessionState {
            user: if authenticated { self.user() } else { None },
            provider: if authenticated { self.provider() } else { None },
            loading: false,
        }
    }
}

/// Reactive session snapshot provided through context.
#[derive(Clone, Debug, PartialEq)]
pub struct SessionState {
    pub user: Option<User>,
    pub provider: Option<Provider>,
    /// True until the browser has read local storage.
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self { user: None, provider: None, loading: true }
    }
}

impl SessionState {
    /// Name shown in the sidebar: provider name, then user name.
    pub fn display_name(&self) -> Option<&str> {
        self.provider
            .as_ref()
            .map(|p| p.name.as_str())
            .filter(|n| !n.is_empty())
            .or_else(|| self.user.as_ref().map(|u| u.name.as_str()))
    }

    pub fn provider_id(&self) -> Option<&str> {
        self.provider.as_ref().map(|p| p.id.as_str()).filter(|id| !id.is_empty())
    }
}
