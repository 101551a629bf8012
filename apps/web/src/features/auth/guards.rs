use crate::features::auth::state::use_auth;
use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;
use portfolio_core::guard::{self, AccessDecision};
use tracing::debug;

/// Renders `children` only for an authorized session; otherwise replaces the
/// current history entry with the login page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let decision = Memo::new(move |_| guard::decide(auth.session.get()));

    Effect::new(move |_| {
        if let AccessDecision::Redirect(target) = decision.get() {
            // UX-only guard; real access control must live on the API.
            debug!(target, "redirecting unauthenticated visitor");
            navigate(
                target,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    view! {
        <Show when=move || decision.get() == AccessDecision::Allow>
            {children()}
        </Show>
    }
}
