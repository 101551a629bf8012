//! Alert banners for status messages. Messages must be safe to render.

use leptos::prelude::*;

#[derive(Clone, Copy)]
pub enum AlertKind {
    Error,
    Warning,
}

impl AlertKind {
    fn class(self) -> &'static str {
        match self {
            AlertKind::Error => "rounded-lg border border-red-400 bg-red-900/30 px-4 py-3 text-sm text-red-200",
            AlertKind::Warning => "rounded-lg border border-amber-400 bg-amber-900/30 px-4 py-3 text-sm text-amber-200",
        }
    }
}

#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    view! { <div class=kind.class() role="alert">{message}</div> }
}
