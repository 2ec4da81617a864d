//! The single portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the theme signal, syncs it to the document root on mount and on every
//! change, and lays out the sections in navbar order. Every section id comes
//! from a `NavSection` constant so nav links and anchors cannot drift apart.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::experience_card::ExperienceCard;
use crate::components::nav_bar::NavBar;
use crate::components::project_card::ProjectCard;
use crate::components::reveal_section::RevealSection;
use crate::components::site_footer::SiteFooter;
use crate::components::skill_group::SkillGroupCard;
use crate::content::{
    ABOUT, ABOUT_PARAGRAPHS, BLOG, BLOG_MARKDOWN, CONTACT, EXPERIENCE, EXPERIENCE_ENTRIES, PROJECT_ENTRIES,
    PROJECTS, SKILL_GROUPS, SKILLS,
};
use crate::state::theme::ThemeMode;
use crate::util::dark_mode;
use crate::util::markdown::render_markdown_html;
use crate::util::theme_style::theme_classes;

/// Global rule that makes fragment links scroll smoothly.
pub const SMOOTH_SCROLL_CSS: &str = "html { scroll-behavior: smooth; }";

#[component]
pub fn PortfolioPage() -> impl IntoView {
    let theme = RwSignal::new(ThemeMode::default());

    Effect::new(move || dark_mode::apply(theme.get()));

    let page_class = move || theme_classes(theme.get()).page;
    let blog_html = render_markdown_html(BLOG_MARKDOWN);

    view! {
        <main class=page_class>
            <style>{SMOOTH_SCROLL_CSS}</style>
            <NavBar theme=theme/>

            <RevealSection section=ABOUT heading="👋 About Me" accent="section__title--sky">
                <div class="section__prose">
                    {ABOUT_PARAGRAPHS.iter().map(|text| view! { <p>{*text}</p> }).collect_view()}
                </div>
            </RevealSection>

            <RevealSection section=SKILLS heading="🛠️ Skills" accent="section__title--amber">
                <div class="card-grid card-grid--two">
                    {SKILL_GROUPS.iter().map(|group| view! { <SkillGroupCard group=group/> }).collect_view()}
                </div>
            </RevealSection>

            <RevealSection section=EXPERIENCE heading="💼 Professional Experience" accent="section__title--orange">
                <div class="card-stack">
                    {EXPERIENCE_ENTRIES.iter().map(|entry| view! { <ExperienceCard entry=entry/> }).collect_view()}
                </div>
            </RevealSection>

            <RevealSection section=PROJECTS heading="🚀 Personal Projects" accent="section__title--green">
                <div class="card-grid">
                    {PROJECT_ENTRIES.iter().map(|project| view! { <ProjectCard project=project/> }).collect_view()}
                </div>
            </RevealSection>

            <RevealSection section=BLOG heading="📝 Blog Highlights" accent="section__title--fuchsia">
                <div class="section__prose section__prose--center" inner_html=blog_html></div>
            </RevealSection>

            <RevealSection
                section=CONTACT
                heading="📬 Contact Me"
                accent="section__title--lime"
                layout="section--narrow"
            >
                <ContactForm/>
            </RevealSection>

            <SiteFooter/>
        </main>
    }
}
