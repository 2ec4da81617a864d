//! Fallback page for any path other than `/`.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <main class="page page--dark not-found">
            <h1 class="not-found__title">"404"</h1>
            <p>"Nothing lives at this address."</p>
            <a class="not-found__home" href="/">"Back to the portfolio"</a>
        </main>
    }
}
