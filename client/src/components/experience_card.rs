//! Card for one professional experience entry.

use leptos::prelude::*;

use crate::content::ExperienceEntry;

#[component]
pub fn ExperienceCard(entry: &'static ExperienceEntry) -> impl IntoView {
    view! {
        <article class="card">
            <h3 class="card__title">{entry.heading()}</h3>
            <p class="card__meta">{entry.period}</p>
            <ul class="card__list">
                {entry.highlights.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}
            </ul>
        </article>
    }
}
