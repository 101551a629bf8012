//! Access decision for the protected admin view.
//!
//! The session flag is advisory: anyone can set it by hand in browser storage.
//! This guard only decides which view to show; the backend must still authorize
//! every privileged request.

use crate::Error;
use std::cell::RefCell;
use std::collections::HashMap;

/// Storage key of the session flag.
pub const SESSION_FLAG_KEY: &str = "isLoggedIn";
/// The only stored value that counts as authorized.
pub const SESSION_FLAG_VALUE: &str = "true";
/// Where unauthorized navigations are sent.
pub const LOGIN_PATH: &str = "/login";

/// Key/value persistence for the session flag (browser `localStorage` in the app).
pub trait SessionStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), Error>;
    fn remove(&self, key: &str) -> Result<(), Error>;
}

/// In-memory store used off the browser and in tests.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RefCell<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store
            .entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        store
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), Error> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), Error> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }
}

/// Interprets a raw stored flag. Anything but exactly `"true"` is unauthorized.
pub fn is_authorized(stored: Option<&str>) -> bool {
    stored == Some(SESSION_FLAG_VALUE)
}

/// Session state owned by the auth layer and handed to the guard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub authorized: bool,
}

impl SessionState {
    pub const fn authorized() -> Self {
        Self { authorized: true }
    }

    pub const fn anonymous() -> Self {
        Self { authorized: false }
    }

    /// Reads the session flag from `store`.
    pub fn from_store(store: &impl SessionStore) -> Self {
        Self {
            authorized: is_authorized(store.get(SESSION_FLAG_KEY).as_deref()),
        }
    }
}

/// Records a successful login.
pub fn record_login(store: &impl SessionStore) -> Result<SessionState, Error> {
    store.set(SESSION_FLAG_KEY, SESSION_FLAG_VALUE)?;
    Ok(SessionState::authorized())
}

/// Forgets the login.
pub fn record_logout(store: &impl SessionStore) -> Result<SessionState, Error> {
    store.remove(SESSION_FLAG_KEY)?;
    Ok(SessionState::anonymous())
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    Redirect(&'static str),
}

/// Decides whether the protected view may render for `session`.
pub fn decide(session: SessionState) -> AccessDecision {
    if session.authorized {
        AccessDecision::Allow
    } else {
        AccessDecision::Redirect(LOGIN_PATH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_exact_true_is_authorized() {
        assert!(is_authorized(Some("true")));

        for value in ["false", "", "TRUE", "True", " true", "true ", "1", "yes", "null"] {
            assert!(!is_authorized(Some(value)), "{value:?} must not authorize");
        }
        assert!(!is_authorized(None));
    }

    #[test]
    fn missing_flag_redirects_to_login() {
        let store = MemorySessionStore::new();
        let session = SessionState::from_store(&store);

        assert_eq!(session, SessionState::anonymous());
        assert_eq!(decide(session), AccessDecision::Redirect(LOGIN_PATH));
    }

    #[test]
    fn malformed_flag_redirects_to_login() {
        let store = MemorySessionStore::with_entry(SESSION_FLAG_KEY, "yes please");
        assert_eq!(
            decide(SessionState::from_store(&store)),
            AccessDecision::Redirect(LOGIN_PATH)
        );
    }

    #[test]
    fn login_then_check_allows() {
        let store = MemorySessionStore::new();
        assert!(!SessionState::from_store(&store).authorized);

        let session = record_login(&store).expect("record login");

        assert_eq!(store.get(SESSION_FLAG_KEY).as_deref(), Some("true"));
        assert_eq!(session, SessionState::from_store(&store));
        assert_eq!(decide(session), AccessDecision::Allow);
    }

    #[test]
    fn logout_clears_flag() {
        let store = MemorySessionStore::with_entry(SESSION_FLAG_KEY, "true");

        let session = record_logout(&store).expect("record logout");

        assert_eq!(store.get(SESSION_FLAG_KEY), None);
        assert_eq!(decide(session), AccessDecision::Redirect(LOGIN_PATH));
    }

    #[test]
    fn other_keys_do_not_authorize() {
        let store = MemorySessionStore::with_entry("loggedIn", "true");
        assert!(!SessionState::from_store(&store).authorized);
    }
}
