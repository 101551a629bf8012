//! Session state and context. The provider hydrates the session once on mount
//! from the persisted flag; login and logout go through the context so the
//! flag and the in-memory state never disagree.

use crate::app_lib::{AppError, storage::BrowserSessionStore};
use leptos::prelude::*;
use portfolio_core::guard::{self, SessionState, SessionStore};
use tracing::debug;

#[derive(Clone, Copy)]
/// Session context shared through Leptos.
pub struct AuthContext {
    pub session: RwSignal<SessionState>,
    pub is_authenticated: Signal<bool>,
}

impl AuthContext {
    fn new(session: RwSignal<SessionState>) -> Self {
        let is_authenticated = Signal::derive(move || session.get().authorized);
        Self {
            session,
            is_authenticated,
        }
    }

    /// Persists the session flag and marks the session authorized.
    pub fn record_login(&self) -> Result<(), AppError> {
        let state = guard::record_login(&BrowserSessionStore)?;
        self.session.set(state);
        debug!("session flag set");
        Ok(())
    }

    /// Removes the session flag. The in-memory state is cleared even when
    /// storage refuses the write.
    pub fn record_logout(&self) -> Result<(), AppError> {
        let result = guard::record_logout(&BrowserSessionStore);
        self.session.set(SessionState::anonymous());
        debug!("session flag cleared");
        result.map(|_| ()).map_err(AppError::from)
    }
}

fn hydrate(store: &impl SessionStore) -> SessionState {
    let state = SessionState::from_store(store);
    debug!(authorized = state.authorized, "session hydrated");
    state
}

/// Provides the session context, hydrated from `localStorage`.
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let session = RwSignal::new(hydrate(&BrowserSessionStore));
    provide_context(AuthContext::new(session));

    view! { {children()} }
}

/// Returns the current session context or an anonymous fallback.
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| {
        let session = RwSignal::new(SessionState::anonymous());
        AuthContext::new(session)
    })
}
