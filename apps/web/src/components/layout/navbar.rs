//! Top navigation with in-page anchors and a mobile menu toggle.

use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

/// In-page sections, in display order.
const SECTION_LINKS: &[(&str, &str)] = &[
    ("Home", "/#home"),
    ("About", "/#about"),
    ("Skills", "/#skills"),
    ("Projects", "/#projects"),
    ("Contact", "/#contact"),
];

const LINK_CLASS: &str = "text-gray-300 hover:text-white transition font-medium";
const MOBILE_LINK_CLASS: &str =
    "block px-4 py-3 text-gray-300 hover:bg-gray-800 hover:text-white rounded-md transition";

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);
    let toggle_menu = move |_| {
        set_menu_open.update(|open| *open = !*open);
    };

    view! {
        <nav class="fixed top-0 left-0 w-full z-50 bg-gray-900/80 backdrop-blur-md shadow-lg">
            <div class="w-full px-3 sm:px-6 flex justify-between items-center h-16">
                <A
                    href=paths::HOME
                    {..}
                    class="text-2xl font-extrabold text-white hover:text-gray-300 tracking-wide transition"
                    on:click=move |_| set_menu_open.set(false)
                >
                    "DTECH"
                </A>

                <div class="hidden md:flex space-x-6">
                    {SECTION_LINKS
                        .iter()
                        .map(|(name, href)| view! { <a href=*href class=LINK_CLASS>{*name}</a> })
                        .collect_view()}
                </div>

                <button
                    type="button"
                    class="md:hidden text-gray-300"
                    aria-label="Toggle menu"
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=toggle_menu
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>

            <Show when=move || menu_open.get()>
                <div class="md:hidden absolute top-16 left-0 w-full bg-gray-900/95 shadow-md z-40">
                    <div class="px-3 py-2">
                        {SECTION_LINKS
                            .iter()
                            .map(|(name, href)| {
                                view! {
                                    <a
                                        href=*href
                                        class=MOBILE_LINK_CLASS
                                        on:click=move |_| set_menu_open.set(false)
                                    >
                                        {*name}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
