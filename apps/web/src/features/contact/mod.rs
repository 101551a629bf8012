//! Contact form submission.

pub(crate) mod client;
