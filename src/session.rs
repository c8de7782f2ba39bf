//! Browser session storage and the shared auth handle.
//!
//! Storage is read once in [`AuthHandle::init`]; pages and guards only look
//! at the context after that.

use leptos::prelude::*;
use scalehealth_core::{AuthContext, SessionStore};
use tracing::warn;

/// `window.sessionStorage`, looked up on each call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserSession;

impl BrowserSession {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.session_storage().ok().flatten())
    }
}

impl SessionStore for BrowserSession {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|s| s.get_item(key).ok().flatten())
    }

    fn write(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    warn!("Failed to write session key {}", key);
                }
            }
            None => warn!("Session storage unavailable"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[derive(Clone, Copy)]
pub struct AuthHandle {
    auth: RwSignal<AuthContext>,
}

impl AuthHandle {
    pub fn init(access_code: &str) -> Self {
        Self {
            auth: RwSignal::new(AuthContext::init(access_code, &BrowserSession)),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.with(|a| a.is_authenticated())
    }

    pub fn login(&self, candidate: &str) -> Result<(), String> {
        let mut result = Ok(());
        self.auth.update(|a| {
            result = a.login(candidate, &BrowserSession).map_err(String::from);
        });
        result
    }

    pub fn logout(&self) {
        self.auth.update(|a| a.logout(&BrowserSession));
    }
}

pub fn use_auth() -> AuthHandle {
    expect_context::<AuthHandle>()
}
