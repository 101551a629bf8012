use leptos::prelude::*;

const SKILLS: &[(&str, &str)] = &[
    ("JavaScript", "text-yellow-400"),
    ("React", "text-cyan-400"),
    ("C#", "text-purple-500"),
    ("Python", "text-green-500"),
    ("Tailwind CSS", "text-sky-500"),
];

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id="skills" class="py-20 bg-white text-gray-900">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 text-center">
                <h2 class="text-2xl sm:text-3xl font-bold mb-8">"Skills"</h2>
                <div class="grid grid-cols-2 sm:grid-cols-3 md:grid-cols-5 gap-6 md:gap-10">
                    {SKILLS
                        .iter()
                        .map(|(name, accent)| {
                            view! {
                                <div class="p-6 rounded-xl bg-gray-100 shadow hover:shadow-2xl transition flex flex-col items-center justify-center">
                                    <span class=format!("text-5xl font-black {accent}")>
                                        {name.chars().next().unwrap_or('?').to_string()}
                                    </span>
                                    <p class="font-semibold mt-3">{*name}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
