//! Page section anchored to a `NavSection` with a scroll-in entrance.

use leptos::prelude::*;

use crate::content::NavSection;
use crate::util::reveal::reveal_classes;

/// Section whose element id comes from `section`, so nav links always match.
#[component]
pub fn RevealSection(
    section: NavSection,
    heading: &'static str,
    /// Modifier class for the heading color.
    #[prop(optional)]
    accent: &'static str,
    /// Extra layout classes for the section element.
    #[prop(optional)]
    layout: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<leptos::html::Section>::new();

    #[cfg(feature = "hydrate")]
    Effect::new(move || {
        if let Some(el) = node_ref.get() {
            crate::util::reveal::observe_once(&el);
        }
    });

    let base = format!("section {layout}");
    let section_class = reveal_classes(base.trim_end());
    let heading_class = if accent.is_empty() {
        "section__title".to_owned()
    } else {
        format!("section__title {accent}")
    };

    view! {
        <section id=section.id class=section_class node_ref=node_ref>
            <h2 class=heading_class>{heading}</h2>
            {children()}
        </section>
    }
}
