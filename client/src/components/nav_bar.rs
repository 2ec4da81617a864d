//! Sticky top navbar: brand, section links, social links, theme toggle.

use leptos::prelude::*;

#[cfg(all(test, feature = "ssr"))]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use crate::components::theme_toggle::ThemeToggle;
use crate::content::{PROFILE, SECTIONS, social_links};
use crate::state::theme::ThemeMode;
use crate::util::theme_style::theme_classes;

#[component]
pub fn NavBar(theme: RwSignal<ThemeMode>) -> impl IntoView {
    let nav_class = move || theme_classes(theme.get()).nav;

    let section_links = SECTIONS
        .iter()
        .map(|section| {
            view! {
                <li>
                    <a class="nav-bar__link" href=section.href()>
                        {section.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    let external_links = social_links(&PROFILE)
        .into_iter()
        .map(|link| {
            let new_tab = link.opens_new_tab();
            view! {
                <li>
                    <a
                        class="nav-bar__icon"
                        href=link.href
                        target=new_tab.then_some("_blank")
                        rel=new_tab.then_some("noopener noreferrer")
                        aria-label=link.label
                        title=link.label
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect_view();

    view! {
        <nav class=nav_class>
            <h1 class="nav-bar__brand">{PROFILE.name}</h1>
            <ul class="nav-bar__links">
                {section_links}
                {external_links}
                <li>
                    <ThemeToggle theme=theme/>
                </li>
            </ul>
        </nav>
    }
}
