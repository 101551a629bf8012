use crate::app_lib::AppError;
use crate::components::{Alert, AlertKind, AlreadySignedInPanel, AppShell, Button, Spinner};
use crate::features::auth::client;
use crate::features::auth::state::use_auth;
use crate::features::auth::types::LoginRequest;
use crate::routes::paths;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

const INPUT_CLASS: &str = "bg-gray-700 border border-gray-600 text-white text-sm rounded-lg focus:ring-gray-300 focus:border-gray-300 block w-full p-2.5 placeholder-gray-400";

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<AppError>>(None);

    let login_action = Action::new_local(move |input: &LoginRequest| {
        let input = input.clone();
        async move { client::login(&input).await }
    });

    Effect::new(move |_| {
        if let Some(result) = login_action.value().get() {
            match result.and_then(|()| auth.record_login()) {
                Ok(()) => navigate(paths::ADMIN, Default::default()),
                Err(err) => set_error.set(Some(err)),
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        set_error.set(None);

        let Some(request) = LoginRequest::new(&email.get_untracked(), password.get_untracked())
        else {
            set_error.set(Some(AppError::Config(
                "Email and password are required.".to_string(),
            )));
            return;
        };

        login_action.dispatch(request);
    };

    view! {
        <AppShell>
            <section class="min-h-screen pt-28 pb-16 bg-gray-900 text-gray-100">
                <Show
                    when=move || !auth.is_authenticated.get()
                    fallback=|| view! { <AlreadySignedInPanel /> }
                >
                    <form class="max-w-sm mx-auto" on:submit=on_submit>
                        <h1 class="text-2xl font-bold mb-6 text-center">"Admin Login"</h1>
                        <div class="mb-5">
                            <label class="block mb-2 text-sm font-medium" for="email">
                                "Email"
                            </label>
                            <input
                                id="email"
                                type="email"
                                class=INPUT_CLASS
                                autocomplete="email"
                                required
                                on:input=move |event| set_email.set(event_target_value(&event))
                            />
                        </div>
                        <div class="mb-5">
                            <label class="block mb-2 text-sm font-medium" for="password">
                                "Password"
                            </label>
                            <input
                                id="password"
                                type="password"
                                class=INPUT_CLASS
                                autocomplete="current-password"
                                required
                                on:input=move |event| set_password.set(event_target_value(&event))
                            />
                        </div>
                        <Button button_type="submit" disabled=login_action.pending()>
                            "Sign In"
                        </Button>
                        {move || {
                            login_action
                                .pending()
                                .get()
                                .then_some(view! { <Spinner label="Signing in..." /> })
                        }}
                        {move || {
                            error
                                .get()
                                .map(|err| {
                                    view! {
                                        <div class="mt-4">
                                            <Alert kind=AlertKind::Error message=err.to_string() />
                                        </div>
                                    }
                                })
                        }}
                    </form>
                </Show>
            </section>
        </AppShell>
    }
}
