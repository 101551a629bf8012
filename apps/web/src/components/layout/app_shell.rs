//! Page frame: fixed navbar, content, footer. Navigation stays client-side;
//! the backend must enforce access control on its own routes.

use crate::components::layout::{Footer, Navbar};
use leptos::prelude::*;

#[component]
pub fn AppShell(children: Children) -> impl IntoView {
    view! {
        <div class="font-sans scroll-smooth bg-white text-gray-900 min-h-screen flex flex-col">
            <Navbar />
            <main class="flex-1">{children()}</main>
            <Footer />
        </div>
    }
}
