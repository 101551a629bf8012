//! Resilient loading of the project list.
//!
//! One fetch per mount. Whatever happens on the wire, the view ends up with a
//! non-empty list and `loading == false`, unless the load was abandoned because
//! the view was torn down first, in which case the view is left untouched.

use crate::payload;
use crate::project::{fallback_projects, Project};
use async_trait::async_trait;
use futures_util::future::{AbortRegistration, Abortable};
use serde_json::Value;
use std::fmt;
use tracing::{debug, warn};

/// Message shown when a failure has no usable description of its own.
pub const DEFAULT_ERROR_MESSAGE: &str = "Failed to load projects";

/// Remote side of the loader: performs `GET <base-url>/projects` and decodes
/// the body as JSON. Non-success statuses and undecodable bodies are errors.
#[async_trait(?Send)]
pub trait ProjectSource {
    type Error: fmt::Display;

    async fn fetch_projects(&self) -> Result<Value, Self::Error>;
}

/// State owned by the consuming view.
pub trait ProjectsView {
    /// Called once when the load starts.
    fn begin(&self);
    /// Called at most once, when the load settles while the view is alive.
    fn finish(&self, outcome: LoadOutcome);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ProjectOrigin {
    Remote,
    Fallback,
}

/// Settled result of a load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadOutcome {
    pub projects: Vec<Project>,
    pub error: Option<String>,
    pub origin: ProjectOrigin,
}

impl LoadOutcome {
    /// Outcome of a successful response. An empty or unrecognized body is not
    /// an error; it only means there is nothing to show remotely.
    pub fn from_body(body: Value) -> Self {
        let projects = payload::normalize(body);
        if projects.is_empty() {
            debug!("remote project list empty, using fallback");
            Self {
                projects: fallback_projects(),
                error: None,
                origin: ProjectOrigin::Fallback,
            }
        } else {
            Self {
                projects,
                error: None,
                origin: ProjectOrigin::Remote,
            }
        }
    }

    /// Outcome of a failed request: fallback list plus a displayable message.
    pub fn from_failure(error: &impl fmt::Display) -> Self {
        let message = error.to_string();
        let message = if message.trim().is_empty() {
            DEFAULT_ERROR_MESSAGE.to_string()
        } else {
            message
        };
        warn!(error = %message, "failed to load projects, using fallback");

        Self {
            projects: fallback_projects(),
            error: Some(message),
            origin: ProjectOrigin::Fallback,
        }
    }

    pub fn from_fetch<E: fmt::Display>(result: Result<Value, E>) -> Self {
        match result {
            Ok(body) => Self::from_body(body),
            Err(err) => Self::from_failure(&err),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadStatus {
    Settled(ProjectOrigin),
    /// The view went away before the fetch settled; nothing was written.
    Abandoned,
}

/// View state as plain data, for views that keep it in one cell or signal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadState {
    pub projects: Vec<Project>,
    pub loading: bool,
    pub error: Option<String>,
}

impl LoadState {
    /// Initial state of a freshly mounted view: loading, nothing to show yet.
    pub fn new() -> Self {
        Self {
            projects: Vec::new(),
            loading: true,
            error: None,
        }
    }

    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
    }

    pub fn finish(&mut self, outcome: LoadOutcome) {
        self.projects = outcome.projects;
        self.error = outcome.error;
        self.loading = false;
    }

    /// Whether the "no projects" message applies instead of a grid.
    pub fn is_empty(&self) -> bool {
        !self.loading && self.projects.is_empty()
    }
}

impl Default for LoadState {
    fn default() -> Self {
        Self::new()
    }
}

/// Loads projects from `source` into `view`.
///
/// `registration` pairs with the `AbortHandle` the view aborts on teardown.
/// Once aborted, the pending fetch is dropped and the view is never written,
/// including when the abort lands before the load is first polled.
pub async fn load_projects<S, V>(
    source: &S,
    registration: AbortRegistration,
    view: &V,
) -> LoadStatus
where
    S: ProjectSource + ?Sized,
    V: ProjectsView + ?Sized,
{
    let fetch = async {
        view.begin();
        source.fetch_projects().await
    };

    let Ok(result) = Abortable::new(fetch, registration).await else {
        debug!("project load abandoned before it settled");
        return LoadStatus::Abandoned;
    };

    let outcome = LoadOutcome::from_fetch(result);
    let origin = outcome.origin;
    debug!(count = outcome.projects.len(), ?origin, "projects loaded");
    view.finish(outcome);

    LoadStatus::Settled(origin)
}
