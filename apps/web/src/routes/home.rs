//! Single-page portfolio: every section on one scrolling page.

use crate::components::AppShell;
use crate::components::sections::{
    AboutSection, ContactSection, HeroSection, ProjectsSection, SkillsSection,
};
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <AppShell>
            <HeroSection />
            <AboutSection />
            <SkillsSection />
            <ProjectsSection />
            <ContactSection />
        </AppShell>
    }
}
