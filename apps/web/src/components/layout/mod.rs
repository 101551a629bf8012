//! Layout components shared across routes.

mod app_shell;
mod footer;
mod navbar;

pub(crate) use app_shell::AppShell;
pub(crate) use footer::Footer;
pub(crate) use navbar::Navbar;
