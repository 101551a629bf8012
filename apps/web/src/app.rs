//! Root component: session context around the client-side router.

use crate::app_lib::config::AppConfig;
use crate::features::auth::state::AuthProvider;
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;
use tracing::info;

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    info!(api_base_url = %config.api_base_url, "mounting portfolio");

    view! {
        <AuthProvider>
            <Router>
                <AppRoutes />
            </Router>
        </AuthProvider>
    }
}
