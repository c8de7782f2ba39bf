//! Client-side access gate.
//!
//! The gate is a shared access code compared in the browser; it keeps casual
//! visitors out of the prototype and nothing more. [`AuthContext`] is read
//! once at startup from a [`SessionStore`] and then handed down explicitly;
//! only `login` and `logout` touch storage again.

use std::cell::RefCell;
use std::collections::HashMap;

use tracing::{info, warn};

use crate::error::CoreError;

/// Session-storage key holding the authenticated flag.
pub const SESSION_KEY: &str = "isAuthenticated";

const LOGIN_PATH: &str = "/login";

/// Key/value storage scoped to one browser session.
pub trait SessionStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory [`SessionStore`] for hosts without browser storage.
#[derive(Debug, Default)]
pub struct MemorySession {
    entries: RefCell<HashMap<String, String>>,
}

impl SessionStore for MemorySession {
    fn read(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn write(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    access_code: String,
    authenticated: bool,
}

impl AuthContext {
    /// Build the context from whatever the session already holds.
    pub fn init(access_code: impl Into<String>, store: &impl SessionStore) -> Self {
        let authenticated = store.read(SESSION_KEY).as_deref() == Some("true");
        Self {
            access_code: access_code.into(),
            authenticated,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Compare `candidate` with the access code and persist the flag on a match.
    pub fn login(&mut self, candidate: &str, store: &impl SessionStore) -> Result<(), CoreError> {
        if candidate != self.access_code {
            warn!("Rejected access code attempt");
            return Err(CoreError::IncorrectPassword);
        }
        store.write(SESSION_KEY, "true");
        self.authenticated = true;
        info!("Session authenticated");
        Ok(())
    }

    pub fn logout(&mut self, store: &impl SessionStore) {
        store.remove(SESSION_KEY);
        self.authenticated = false;
        info!("Session cleared");
    }
}

/// State of the access-code form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    code: String,
    error: Option<String>,
}

impl LoginForm {
    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Typing replaces the code and dismisses the previous error.
    pub fn input(&mut self, code: &str) {
        self.code = code.to_string();
        self.error = None;
    }

    /// Run `check` on the typed code. A rejection keeps its message for
    /// display and empties the field.
    pub fn submit(&mut self, check: impl FnOnce(&str) -> Result<(), String>) -> bool {
        match check(&self.code) {
            Ok(()) => {
                self.error = None;
                true
            }
            Err(message) => {
                self.error = Some(message);
                self.code.clear();
                false
            }
        }
    }
}

/// Where to send the user after login.
///
/// Only same-site absolute paths are honoured; anything else (missing,
/// protocol-relative, the login page itself) falls back to `/`.
pub fn redirect_target(from: Option<&str>) -> String {
    match from {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.starts_with(LOGIN_PATH) =>
        {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

/// Path plus query string of the page being requested. `search` may carry
/// its leading `?` or not.
pub fn requested_path(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        pathname.to_string()
    } else {
        format!("{}?{}", pathname, query)
    }
}

/// Login URL that remembers the page the user was trying to reach.
pub fn login_url(requested: &str) -> String {
    if requested.is_empty() || requested == "/" {
        return LOGIN_PATH.to_string();
    }
    format!("{}?from={}", LOGIN_PATH, urlencoding::encode(requested))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_reads_existing_flag() {
        let store = MemorySession::default();
        assert!(!AuthContext::init("sbg123", &store).is_authenticated());

        store.write(SESSION_KEY, "true");
        assert!(AuthContext::init("sbg123", &store).is_authenticated());

        store.write(SESSION_KEY, "yes");
        assert!(!AuthContext::init("sbg123", &store).is_authenticated());
    }

    #[test]
    fn test_login_and_logout() {
        let store = MemorySession::default();
        let mut auth = AuthContext::init("sbg123", &store);

        assert_eq!(auth.login("wrong", &store), Err(CoreError::IncorrectPassword));
        assert!(!auth.is_authenticated());
        assert_eq!(store.read(SESSION_KEY), None);

        auth.login("sbg123", &store).unwrap();
        assert!(auth.is_authenticated());
        assert_eq!(store.read(SESSION_KEY).as_deref(), Some("true"));

        auth.logout(&store);
        assert!(!auth.is_authenticated());
        assert_eq!(store.read(SESSION_KEY), None);
    }

    #[test]
    fn test_incorrect_password_message() {
        assert_eq!(
            CoreError::IncorrectPassword.to_string(),
            "Incorrect password. Please try again."
        );
    }

    #[test]
    fn test_redirect_target() {
        assert_eq!(redirect_target(None), "/");
        assert_eq!(redirect_target(Some("/w/insider")), "/w/insider");
        assert_eq!(redirect_target(Some("https://evil.example")), "/");
        assert_eq!(redirect_target(Some("//evil.example")), "/");
        assert_eq!(redirect_target(Some("/login")), "/");
    }

    #[test]
    fn test_login_form_clears_error_when_typing() {
        let store = MemorySession::default();
        let mut auth = AuthContext::init("sbg123", &store);
        let mut form = LoginForm::default();

        form.input("wrong");
        assert!(!form.submit(|c| auth.login(c, &store).map_err(String::from)));
        assert_eq!(form.error(), Some("Incorrect password. Please try again."));
        assert_eq!(form.code(), "");

        form.input("s");
        assert_eq!(form.error(), None);
        assert_eq!(form.code(), "s");

        form.input("sbg123");
        assert!(form.submit(|c| auth.login(c, &store).map_err(String::from)));
        assert!(auth.is_authenticated());
    }

    #[test]
    fn test_requested_path_keeps_query() {
        assert_eq!(requested_path("/w/intake", ""), "/w/intake");
        assert_eq!(requested_path("/w/intake", "?"), "/w/intake");
        assert_eq!(requested_path("/w/insider", "?ref=mail"), "/w/insider?ref=mail");
        assert_eq!(requested_path("/w/insider", "ref=mail"), "/w/insider?ref=mail");
    }

    #[test]
    fn test_login_url_encodes_path() {
        assert_eq!(login_url("/"), "/login");
        assert_eq!(login_url("/w/scale-health/offer"), "/login?from=%2Fw%2Fscale-health%2Foffer");
    }
}
