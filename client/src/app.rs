//! Root application component and the SSR HTML shell.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::content::PROFILE;
use crate::pages::{not_found::NotFoundPage, portfolio::PortfolioPage};
use crate::state::theme::ThemeMode;

/// HTML shell rendered on the server for SSR + hydration.
///
/// The root element starts with the default theme's class so the first paint
/// matches what the hydrated page will apply.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class=ThemeMode::default().root_class()>
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>
        <Title text=PROFILE.name/>
        <Meta name="description" content=PROFILE.tagline/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=StaticSegment("") view=PortfolioPage/>
            </Routes>
        </Router>
    }
}
