//! Card for one personal project.

use leptos::prelude::*;

use crate::content::Project;

#[component]
pub fn ProjectCard(project: &'static Project) -> impl IntoView {
    view! {
        <article class="card">
            <h3 class="card__title card__title--small">{project.title}</h3>
            <p class="card__body">{project.summary}</p>
        </article>
    }
}
