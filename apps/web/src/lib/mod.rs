//! Shared frontend utilities: HTTP helpers, configuration, errors, browser
//! storage and console logging.
//!
//! ## Backend endpoints
//!
//! All calls go to the configured API base URL:
//!
//! - `GET /projects` feeds the projects section. Failures never reach the user
//!   as errors; the section falls back to its built-in list.
//! - `POST /contacts` submits the contact form. Only HTTP 200 counts as sent.
//! - `POST /auth/login` backs the login page. A 2xx answer sets the advisory
//!   session flag in `localStorage`; the flag gates `/admin` on the client only.
//!
//! None of these helpers attach credentials or tokens.

pub(crate) mod api;
pub(crate) mod config;
pub(crate) mod errors;
pub(crate) mod storage;
pub(crate) mod telemetry;

pub(crate) use api::{get_json, post_json};
pub(crate) use errors::AppError;
