use gloo_timers::callback::Interval;
use leptos::prelude::*;

const HERO_IMAGES: &[&str] = &[
    "/images/donald1.webp",
    "/images/donald2.webp",
    "/images/donald3.webp",
];
const SLIDE_INTERVAL_MS: u32 = 8_000;

#[component]
pub fn HeroSection() -> impl IntoView {
    let index = RwSignal::new(0usize);

    let interval = Interval::new(SLIDE_INTERVAL_MS, move || {
        index.update(|current| *current = (*current + 1) % HERO_IMAGES.len());
    });
    // `Interval` is not `Send`; park it in local storage and drop it on cleanup.
    let interval = StoredValue::new_local(Some(interval));
    on_cleanup(move || {
        if let Some(interval) = interval.try_update_value(Option::take).flatten() {
            interval.cancel();
        }
    });

    view! {
        <section
            id="home"
            class="relative min-h-screen flex items-center justify-center text-white overflow-hidden"
        >
            <img
                src=move || HERO_IMAGES[index.get()]
                alt=move || format!("Donald {}", index.get() + 1)
                class="absolute inset-0 w-full h-full object-cover object-center opacity-90"
            />
            <div class="absolute inset-0 bg-black/45"></div>

            <div class="relative text-center z-10 px-6 w-full">
                <div class="max-w-3xl mx-auto">
                    <h1 class="text-3xl sm:text-4xl md:text-6xl font-extrabold mb-4 drop-shadow-lg leading-tight">
                        "Hi, My Name is Akor Donald Ayibapreye"
                    </h1>
                    <p class="text-lg sm:text-xl md:text-2xl font-bold mb-4">
                        "Software Engineer · Full-Stack Developer · Problem Solver"
                    </p>
                    <p class="text-base sm:text-lg md:text-xl max-w-2xl mx-auto mb-6 text-white/90 leading-relaxed">
                        "A passionate " <span class="font-bold">"Software Engineer"</span>
                        " crafting modern web apps, solving problems, and building impactful digital experiences."
                    </p>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-3 sm:gap-4">
                        <a
                            href="#projects"
                            class="bg-white text-gray-900 px-6 sm:px-8 py-2.5 rounded-full font-semibold shadow-lg hover:bg-gray-200 transition"
                        >
                            "View My Work"
                        </a>
                        <a
                            href="/resume.pdf"
                            download="Akor-Donald-Resume.pdf"
                            class="bg-transparent border border-white px-6 sm:px-8 py-2.5 rounded-full font-semibold text-white hover:bg-white hover:text-gray-900 transition"
                        >
                            "Download Resume"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
