//! Fallback page for unknown routes.

use crate::components::AppShell;
use crate::routes::paths;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="min-h-screen pt-28 pb-16 bg-gray-900 text-gray-100">
                <div class="flex flex-col items-center justify-center min-h-[50vh] text-center px-4 space-y-6">
                    <h1 class="text-8xl font-black text-gray-700 select-none">"404"</h1>
                    <p class="text-2xl font-bold">"Page not found"</p>
                    <p class="text-gray-400 max-w-sm">
                        "The page you are looking for does not exist."
                    </p>
                    <div class="flex flex-col sm:flex-row gap-4">
                        <A
                            href=paths::HOME
                            {..}
                            class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white rounded-lg hover:bg-gray-200 transition-all"
                        >
                            "Go Home"
                        </A>
                        <button
                            class="inline-flex items-center px-5 py-2.5 text-sm font-medium text-gray-300 border border-gray-600 rounded-lg hover:bg-gray-800 transition-all"
                            on:click=move |_| go_back()
                        >
                            "Go Back"
                        </button>
                    </div>
                </div>
            </section>
        </AppShell>
    }
}

fn go_back() {
    let Some(history) = web_sys::window().and_then(|window| window.history().ok()) else {
        return;
    };
    let _ = history.back();
}
