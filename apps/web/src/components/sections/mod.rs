//! Sections of the home page, in scroll order.

mod about;
mod contact;
mod hero;
mod projects;
mod skills;

pub(crate) use about::AboutSection;
pub(crate) use contact::ContactSection;
pub(crate) use hero::HeroSection;
pub(crate) use projects::ProjectsSection;
pub(crate) use skills::SkillsSection;
