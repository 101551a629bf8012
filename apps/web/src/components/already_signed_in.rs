use crate::{
    components::{Alert, AlertKind, Button},
    features::auth::state::use_auth,
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Shown on the login page when the session flag is already set.
#[component]
pub fn AlreadySignedInPanel() -> impl IntoView {
    view! {
        <div class="max-w-sm mx-auto text-center space-y-6 py-8">
            <p class="text-gray-300">"You are already signed in."</p>
            <div class="flex flex-col gap-3">
                <A
                    href=paths::ADMIN
                    {..}
                    class="w-full inline-flex justify-center items-center px-5 py-2.5 text-sm font-medium text-gray-900 bg-white rounded-lg hover:bg-gray-200 transition-all shadow-sm"
                >
                    "Go to Dashboard"
                </A>
                <SignOutButton />
            </div>
        </div>
    }
}

/// Clears the session flag and returns to the home page.
#[component]
pub fn SignOutButton() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (error, set_error) = signal::<Option<String>>(None);

    let sign_out = Callback::new(move |()| {
        if let Err(err) = auth.record_logout() {
            set_error.set(Some(err.to_string()));
        }
        navigate(paths::HOME, Default::default());
    });

    view! {
        <Button on_click=sign_out>"Sign Out"</Button>
        {move || {
            error
                .get()
                .map(|message| view! { <div class="mt-4"><Alert kind=AlertKind::Error message=message /></div> })
        }}
    }
}
