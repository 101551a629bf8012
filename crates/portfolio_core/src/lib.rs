//! Target-independent core of the portfolio site.
//!
//! The browser app wires these pieces to Leptos signals, `localStorage` and
//! `fetch`; everything here builds and tests natively.
//!
//! ## Access guard
//!
//! The admin route is gated by an advisory session flag persisted in the
//! browser. [`guard::SessionState`] is read from a [`guard::SessionStore`] and
//! [`guard::decide`] turns it into an [`guard::AccessDecision`]. The flag is not
//! a security token; the backend must authorize every privileged request.
//!
//! ## Project loading
//!
//! [`loader::load_projects`] issues one fetch through a
//! [`loader::ProjectSource`], normalizes the payload with
//! [`payload::ProjectsPayload`] and always settles on a non-empty list, falling
//! back to [`project::fallback_projects`] when the remote side is empty or
//! unreachable. Teardown aborts the load through a `futures_util`
//! `AbortHandle`, after which no view state is written.

pub mod contact;
mod error;
pub mod guard;
pub mod loader;
pub mod payload;
pub mod project;

pub use error::Error;
pub use project::{fallback_projects, Project};
