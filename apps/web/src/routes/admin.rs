//! Admin area. Everything inside `RequireAuth` is client-gated only; the
//! backend must authorize any privileged call made from here.

use crate::components::{AppShell, SignOutButton};
use crate::features::auth::RequireAuth;
use leptos::prelude::*;

#[component]
pub fn AdminPage() -> impl IntoView {
    view! {
        <AppShell>
            <section class="min-h-screen pt-28 pb-16 bg-gray-900 text-gray-100">
                <RequireAuth>
                    <div class="max-w-3xl mx-auto px-4 sm:px-6 space-y-6">
                        <div class="space-y-1">
                            <h1 class="text-2xl font-semibold">"Admin Dashboard"</h1>
                            <p class="text-sm text-gray-400">
                                "Manage portfolio content and incoming messages."
                            </p>
                        </div>
                        <div class="max-w-xs">
                            <SignOutButton />
                        </div>
                    </div>
                </RequireAuth>
            </section>
        </AppShell>
    }
}
