//! Projects feature: loads the list once per mount and exposes it as a signal.

mod client;

use futures_util::future::AbortHandle;
use leptos::{prelude::*, task::spawn_local};
use portfolio_core::loader::{LoadOutcome, LoadState, ProjectsView, load_projects};

use client::ApiProjectSource;

/// Writes loader progress into a single signal.
#[derive(Clone, Copy)]
struct SignalView(RwSignal<LoadState>);

impl ProjectsView for SignalView {
    fn begin(&self) {
        self.0.update(LoadState::begin);
    }

    fn finish(&self, outcome: LoadOutcome) {
        self.0.update(|state| state.finish(outcome));
    }
}

/// Starts loading projects for the calling component. The load is aborted when
/// the component is cleaned up, so a late response never touches its state.
pub fn use_projects() -> ReadSignal<LoadState> {
    let state = RwSignal::new(LoadState::new());
    let view = SignalView(state);
    let (abort, registration) = AbortHandle::new_pair();

    on_cleanup(move || abort.abort());

    spawn_local(async move {
        load_projects(&ApiProjectSource, registration, &view).await;
    });

    state.read_only()
}
