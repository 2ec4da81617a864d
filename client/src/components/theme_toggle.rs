//! Dark/light toggle button.

use leptos::prelude::*;

use crate::state::theme::ThemeMode;
use crate::util::theme_style::toggle_icon;

/// Button that flips the page theme. The icon names the mode it switches to.
#[component]
pub fn ThemeToggle(theme: RwSignal<ThemeMode>) -> impl IntoView {
    let icon = move || toggle_icon(theme.get());

    view! {
        <button
            type="button"
            class="theme-toggle"
            aria-label=move || icon().label
            title=move || icon().label
            on:click=move |_| theme.update(|mode| *mode = mode.toggled())
        >
            {move || icon().glyph}
        </button>
    }
}
