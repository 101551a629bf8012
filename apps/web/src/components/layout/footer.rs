use leptos::prelude::*;

const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("LinkedIn", "https://www.linkedin.com/in/akor-donald-724b3037a/"),
    ("GitHub", "https://github.com/akordonald15-hue"),
    ("Email", "mailto:akordonald15@gmail.com"),
    ("Instagram", "https://www.instagram.com/preye_002/?next=%2F"),
    ("Facebook", "https://web.facebook.com/profile.php?id=61578056309232"),
];

#[component]
pub fn Footer() -> impl IntoView {
    let year = js_sys::Date::new_0().get_full_year();

    view! {
        <footer class="bg-gray-900 text-gray-300 py-6">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 flex flex-col md:flex-row justify-between items-center">
                <p class="text-sm">"© " {year} " DONALD"</p>
                <div class="flex space-x-6 mt-4 md:mt-0">
                    {SOCIAL_LINKS
                        .iter()
                        .map(|(label, href)| {
                            let external = !href.starts_with("mailto:");
                            view! {
                                <a
                                    href=*href
                                    target=external.then_some("_blank")
                                    rel=external.then_some("noopener noreferrer")
                                    class="hover:text-white transition"
                                >
                                    {*label}
                                </a>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </footer>
    }
}
