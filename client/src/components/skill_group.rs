//! Named group of skills rendered as tags.

use leptos::prelude::*;

use crate::content::SkillGroup;

#[component]
pub fn SkillGroupCard(group: &'static SkillGroup) -> impl IntoView {
    view! {
        <article class="card skill-group">
            <h3 class="card__title card__title--small">{group.name}</h3>
            <ul class="skill-group__items">
                {group.items.iter().map(|item| view! { <li class="skill-tag">{*item}</li> }).collect_view()}
            </ul>
        </article>
    }
}
