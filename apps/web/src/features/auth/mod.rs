//! Login, logout and the client-side admin gate.
//!
//! Flow: the login page posts credentials to `/auth/login`; on success the
//! session flag is written to `localStorage` and the in-memory session state is
//! updated. `RequireAuth` reads that state on every evaluation and redirects to
//! `/login` when it is not authorized. The flag is advisory only: the backend
//! must authorize privileged requests itself.

pub(crate) mod client;
mod guards;
pub(crate) mod state;
pub(crate) mod types;

pub(crate) use guards::RequireAuth;
