mod admin;
mod home;
mod login;
mod not_found;
pub(crate) mod paths;

pub(crate) use admin::AdminPage;
pub(crate) use home::HomePage;
pub(crate) use login::LoginPage;
pub(crate) use not_found::NotFoundPage;

use leptos::prelude::*;
use leptos_router::components::{Route, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Routes fallback=|| view! { <NotFoundPage /> }>
            <Route path=path!("/") view=HomePage />
            <Route path=path!("/login") view=LoginPage />
            <Route path=path!("/admin") view=AdminPage />
            <Route path=path!("/*any") view=NotFoundPage />
        </Routes>
    }
}
