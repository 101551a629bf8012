use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    let label = label.unwrap_or_else(|| "Loading...".to_string());

    view! {
        <div class="text-center py-12" role="status" aria-live="polite">
            <div class="inline-block animate-pulse px-6 py-3 bg-gray-800 rounded-lg">{label}</div>
        </div>
    }
}
