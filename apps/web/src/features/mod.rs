//! Domain-level frontend features. Routes and sections import these modules so
//! view code stays focused on markup while HTTP and session handling live here.

pub(crate) mod auth;
pub(crate) mod contact;
pub(crate) mod projects;
