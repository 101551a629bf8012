use crate::components::Button;
use crate::features::contact::client;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use portfolio_core::contact::{ContactMessage, ContactStatus};
use tracing::warn;

const INPUT_CLASS: &str = "w-full p-3 mb-4 rounded bg-gray-700 text-white focus:outline-none";

#[component]
pub fn ContactSection() -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(ContactStatus::Idle);

    let send_action = Action::new_local(move |input: &ContactMessage| {
        let input = input.clone();
        async move { client::send_message(&input).await }
    });

    Effect::new(move |_| {
        if let Some(result) = send_action.value().get() {
            match result {
                Ok(()) => {
                    set_status.set(ContactStatus::Sent);
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_message.set(String::new());
                }
                Err(err) => {
                    warn!(error = %err, "contact submission failed");
                    set_status.set(ContactStatus::Failed);
                }
            }
        }
    });

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        if status.get_untracked().is_sending() {
            return;
        }

        let draft = ContactMessage {
            name: name.get_untracked(),
            email: email.get_untracked(),
            message: message.get_untracked(),
        };
        match draft.validated() {
            Ok(valid) => {
                set_status.set(ContactStatus::Sending);
                send_action.dispatch(valid);
            }
            Err(err) => set_status.set(ContactStatus::Invalid(err.to_string())),
        }
    };

    view! {
        <section id="contact" class="py-20 bg-gradient-to-r from-gray-900 to-gray-700 text-white">
            <div class="max-w-xl sm:max-w-2xl mx-auto text-center px-4 sm:px-6">
                <h2 class="text-2xl sm:text-3xl font-bold mb-4">"Get In Touch"</h2>
                <p class="mb-6 text-lg text-gray-200">
                    "Have a project in mind or want to collaborate? Let's connect."
                </p>

                <form class="bg-gray-800 rounded-2xl p-4 sm:p-6 shadow-lg text-left" on:submit=on_submit>
                    <input
                        type="text"
                        name="name"
                        placeholder="Your Name"
                        required
                        class=INPUT_CLASS
                        prop:value=name
                        on:input=move |event| set_name.set(event_target_value(&event))
                    />
                    <input
                        type="email"
                        name="email"
                        placeholder="Your Email"
                        required
                        class=INPUT_CLASS
                        prop:value=email
                        on:input=move |event| set_email.set(event_target_value(&event))
                    />
                    <textarea
                        name="message"
                        placeholder="Your Message"
                        required
                        class=format!("{INPUT_CLASS} h-32")
                        prop:value=message
                        on:input=move |event| set_message.set(event_target_value(&event))
                    ></textarea>
                    <Button button_type="submit" disabled=Signal::derive(move || status.get().is_sending())>
                        "Send Message"
                    </Button>
                </form>

                {move || status.get().message().map(|text| view! { <p class="mt-4 text-lg">{text}</p> })}
            </div>
        </section>
    }
}
