#![allow(clippy::unwrap_used, clippy::expect_used)]

use async_trait::async_trait;
use futures_util::future::AbortHandle;
use portfolio_core::fallback_projects;
use portfolio_core::loader::{
    load_projects, LoadOutcome, LoadState, LoadStatus, ProjectOrigin, ProjectSource, ProjectsView,
};
use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use tokio::sync::oneshot;

/// Answers immediately with a fixed reply.
struct StaticSource(Result<Value, String>);

#[async_trait(?Send)]
impl ProjectSource for StaticSource {
    type Error = String;

    async fn fetch_projects(&self) -> Result<Value, String> {
        self.0.clone()
    }
}

/// Answers once the test releases the gate.
struct GatedSource {
    gate: RefCell<Option<oneshot::Receiver<Result<Value, String>>>>,
}

impl GatedSource {
    fn new() -> (Self, oneshot::Sender<Result<Value, String>>) {
        let (tx, rx) = oneshot::channel();
        (
            Self {
                gate: RefCell::new(Some(rx)),
            },
            tx,
        )
    }
}

#[async_trait(?Send)]
impl ProjectSource for GatedSource {
    type Error = String;

    async fn fetch_projects(&self) -> Result<Value, String> {
        let gate = self.gate.borrow_mut().take().expect("fetched once");
        gate.await.unwrap_or_else(|_| Err("gate dropped".to_string()))
    }
}

/// Records every state write and whether it happened after teardown.
#[derive(Default)]
struct SpyView {
    state: RefCell<LoadState>,
    writes: Cell<usize>,
    writes_after_teardown: Cell<usize>,
    torn_down: Cell<bool>,
}

impl SpyView {
    fn record_write(&self) {
        self.writes.set(self.writes.get() + 1);
        if self.torn_down.get() {
            self.writes_after_teardown
                .set(self.writes_after_teardown.get() + 1);
        }
    }

    fn tear_down(&self) {
        self.torn_down.set(true);
    }

    fn snapshot(&self) -> LoadState {
        self.state.borrow().clone()
    }
}

impl ProjectsView for SpyView {
    fn begin(&self) {
        self.record_write();
        self.state.borrow_mut().begin();
    }

    fn finish(&self, outcome: LoadOutcome) {
        self.record_write();
        self.state.borrow_mut().finish(outcome);
    }
}

async fn load_static(reply: Result<Value, String>) -> (LoadStatus, LoadState) {
    let source = StaticSource(reply);
    let view = SpyView::default();
    let (_handle, registration) = AbortHandle::new_pair();

    let status = load_projects(&source, registration, &view).await;
    assert_eq!(view.writes.get(), 2, "begin and finish write exactly once each");

    (status, view.snapshot())
}

fn titles(state: &LoadState) -> Vec<&str> {
    state
        .projects
        .iter()
        .map(|project| project.title.as_str())
        .collect()
}

#[tokio::test]
async fn single_remote_record_is_used() -> anyhow::Result<()> {
    let (status, state) =
        load_static(Ok(json!([{ "title": "A", "desc": "first", "demo": "#" }]))).await;

    assert_eq!(status, LoadStatus::Settled(ProjectOrigin::Remote));
    assert_eq!(titles(&state), vec!["A"]);
    assert!(!state.loading);
    assert_eq!(state.error, None);
    Ok(())
}

#[tokio::test]
async fn empty_data_uses_fallback_without_error() -> anyhow::Result<()> {
    let (status, state) = load_static(Ok(json!({ "data": [] }))).await;

    assert_eq!(status, LoadStatus::Settled(ProjectOrigin::Fallback));
    assert_eq!(state.projects, fallback_projects());
    assert!(!state.loading);
    assert_eq!(state.error, None);
    Ok(())
}

#[tokio::test]
async fn network_error_uses_fallback_with_message() -> anyhow::Result<()> {
    let (status, state) = load_static(Err(
        "Network error: Unable to reach the server: connection refused".to_string(),
    ))
    .await;

    assert_eq!(status, LoadStatus::Settled(ProjectOrigin::Fallback));
    assert_eq!(state.projects.len(), 3);
    assert!(!state.loading);
    let error = state.error.expect("error message");
    assert!(!error.is_empty());
    assert!(error.contains("connection refused"));
    Ok(())
}

#[tokio::test]
async fn projects_field_keeps_order() -> anyhow::Result<()> {
    let (_, state) =
        load_static(Ok(json!({ "projects": [{ "title": "X" }, { "title": "Y" }] }))).await;

    assert_eq!(titles(&state), vec!["X", "Y"]);
    assert_eq!(state.error, None);
    Ok(())
}

#[tokio::test]
async fn unrecognized_shape_uses_fallback_without_error() -> anyhow::Result<()> {
    let (_, state) = load_static(Ok(json!({ "message": "hello" }))).await;

    assert_eq!(state.projects, fallback_projects());
    assert_eq!(state.error, None);
    Ok(())
}

#[tokio::test]
async fn gated_load_settles_when_released() -> anyhow::Result<()> {
    let (source, gate) = GatedSource::new();
    let view = SpyView::default();
    let (_handle, registration) = AbortHandle::new_pair();

    let release = async {
        while view.writes.get() == 0 {
            tokio::task::yield_now().await;
        }
        assert!(view.snapshot().loading);
        gate.send(Ok(json!([{ "title": "Late" }]))).expect("load is waiting");
    };
    let (status, ()) = tokio::join!(load_projects(&source, registration, &view), release);

    assert_eq!(status, LoadStatus::Settled(ProjectOrigin::Remote));
    assert_eq!(titles(&view.snapshot()), vec!["Late"]);
    assert!(!view.snapshot().loading);
    Ok(())
}

#[tokio::test]
async fn teardown_before_response_writes_nothing() -> anyhow::Result<()> {
    let (source, gate) = GatedSource::new();
    let view = SpyView::default();
    let (handle, registration) = AbortHandle::new_pair();

    let teardown = async {
        while view.writes.get() == 0 {
            tokio::task::yield_now().await;
        }
        view.tear_down();
        handle.abort();
        tokio::task::yield_now().await;
        // The response shows up after the view is gone.
        let _ = gate.send(Ok(json!([{ "title": "Stale" }])));
    };
    let (status, ()) = tokio::join!(load_projects(&source, registration, &view), teardown);

    assert_eq!(status, LoadStatus::Abandoned);
    assert_eq!(view.writes_after_teardown.get(), 0);
    assert_eq!(view.writes.get(), 1);
    assert!(view.snapshot().projects.is_empty());
    Ok(())
}

#[tokio::test]
async fn teardown_after_response_before_resume_writes_nothing() -> anyhow::Result<()> {
    let (source, gate) = GatedSource::new();
    let view = SpyView::default();
    let (handle, registration) = AbortHandle::new_pair();

    let teardown = async {
        while view.writes.get() == 0 {
            tokio::task::yield_now().await;
        }
        // Response lands, but the view is torn down before the load resumes.
        gate.send(Err("Server responded 500".to_string()))
            .expect("load is waiting");
        view.tear_down();
        handle.abort();
    };
    let (status, ()) = tokio::join!(load_projects(&source, registration, &view), teardown);

    assert_eq!(status, LoadStatus::Abandoned);
    assert_eq!(view.writes_after_teardown.get(), 0);
    assert_eq!(view.snapshot().error, None);
    Ok(())
}

#[tokio::test]
async fn abort_before_first_poll_writes_nothing() -> anyhow::Result<()> {
    let source = StaticSource(Ok(json!([{ "title": "A" }])));
    let view = SpyView::default();
    let (handle, registration) = AbortHandle::new_pair();
    view.tear_down();
    handle.abort();

    let status = load_projects(&source, registration, &view).await;

    assert_eq!(status, LoadStatus::Abandoned);
    assert_eq!(view.writes.get(), 0);
    assert_eq!(view.writes_after_teardown.get(), 0);
    assert_eq!(view.snapshot(), LoadState::new());
    Ok(())
}
