use leptos::prelude::*;

#[component]
pub fn AboutSection() -> impl IntoView {
    view! {
        <section id="about" class="py-20 sm:py-24 bg-gray-100 text-gray-900">
            <div class="max-w-6xl mx-auto px-4 sm:px-6 flex flex-col md:flex-row items-center md:items-start gap-8 sm:gap-12">
                <div class="w-full md:w-1/2 flex justify-center">
                    <img
                        src="/images/donald1.webp"
                        alt="Donald"
                        class="rounded-2xl shadow-lg w-full max-w-xs sm:max-w-sm md:max-w-none object-cover"
                    />
                </div>
                <div class="w-full md:w-1/2 text-center md:text-left">
                    <h2 class="text-2xl sm:text-3xl font-bold mb-4">"About Me"</h2>
                    <p class="text-base sm:text-lg text-gray-700 leading-relaxed mb-4">
                        "I am a " <span class="font-semibold">"Software Engineer"</span>
                        " from Nigeria, focused on designing and developing modern, scalable, and user-centered digital solutions. "
                        "I specialize in JavaScript, React, Node.js, C#, Python, and building clean, responsive interfaces with Tailwind CSS."
                    </p>
                    <p class="text-base sm:text-lg text-gray-700 leading-relaxed mb-4">
                        "Currently a " <span class="font-semibold">"first-class student"</span>
                        " with a CGPA of 4.7. I have worked on projects ranging from full restaurant management platforms "
                        "to engineering tools like oil production calculators."
                    </p>
                    <a
                        href="#projects"
                        class="inline-block mt-2 bg-gray-900 text-white px-4 sm:px-6 py-2 rounded-lg font-semibold shadow hover:bg-gray-700 transition"
                    >
                        "View My Work"
                    </a>
                </div>
            </div>
        </section>
    }
}
