//! Client-side route paths.

pub const HOME: &str = "/";
pub const ADMIN: &str = "/admin";
