//! Projects grid. Data comes from the API when it has something to show and
//! from the built-in list otherwise; a failed fetch only adds a notice.

use crate::components::{Alert, AlertKind, Spinner};
use crate::features::projects::use_projects;
use leptos::prelude::*;
use portfolio_core::Project;

#[component]
pub fn ProjectsSection() -> impl IntoView {
    let state = use_projects();

    view! {
        <section id="projects" class="py-20 bg-gray-900 text-gray-100">
            <div class="max-w-6xl mx-auto px-4 sm:px-6">
                <h2 class="text-2xl sm:text-3xl font-bold text-center mb-8">"Projects"</h2>

                {move || {
                    state.with(|state| {
                        if state.loading {
                            view! { <Spinner label="Loading projects..." /> }.into_any()
                        } else if state.is_empty() {
                            view! {
                                <p class="text-center text-gray-400 py-8">"No projects to show."</p>
                            }
                                .into_any()
                        } else {
                            let notice = state.error.clone().map(|message| {
                                view! {
                                    <div class="mb-6">
                                        <Alert
                                            kind=AlertKind::Warning
                                            message=format!("Showing saved projects: {message}")
                                        />
                                    </div>
                                }
                            });
                            let cards = state
                                .projects
                                .iter()
                                .cloned()
                                .map(|project| view! { <ProjectCard project=project /> })
                                .collect_view();

                            view! {
                                {notice}
                                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 gap-6 md:gap-10">
                                    {cards}
                                </div>
                            }
                                .into_any()
                        }
                    })
                }}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(project: Project) -> impl IntoView {
    let demo = project.demo_url().map(str::to_string);
    let source = project.source_url().map(str::to_string);
    let image = project.image_src().to_string();

    view! {
        <div class="bg-gray-800 rounded-2xl shadow-lg overflow-hidden group">
            <img
                src=image
                alt=project.title.clone()
                class="w-full h-40 sm:h-48 object-cover object-center transition-transform duration-500 group-hover:scale-105"
            />
            <div class="p-4 sm:p-6">
                <h3 class="text-lg sm:text-xl font-semibold mb-2">{project.title}</h3>
                <p class="text-gray-300 text-sm sm:text-base">{project.description}</p>

                <div class="mt-4 flex flex-wrap gap-3">
                    {demo.map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 px-3 py-2 rounded-md bg-white text-gray-900 font-semibold hover:bg-gray-200 transition text-sm"
                            >
                                "Live Demo"
                            </a>
                        }
                    })}
                    {source.map(|href| {
                        view! {
                            <a
                                href=href
                                target="_blank"
                                rel="noopener noreferrer"
                                class="inline-flex items-center gap-2 px-3 py-2 rounded-md border border-gray-700 text-gray-200 hover:bg-gray-800 transition text-sm"
                            >
                                "View Code"
                            </a>
                        }
                    })}
                </div>
            </div>
        </div>
    }
}
