use leptos::prelude::*;

use crate::content::{PROFILE, footer_text};

#[component]
pub fn SiteFooter() -> impl IntoView {
    view! { <footer class="site-footer">{footer_text(&PROFILE)}</footer> }
}
