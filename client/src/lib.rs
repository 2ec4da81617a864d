//! # portfolio-client
//!
//! Leptos frontend for the personal portfolio site. Rendered on the server by
//! `portfolio-server` and hydrated in the browser from the `hydrate` build.
//!
//! This crate contains the page, its section components, the static content
//! tables, the theme state, and the small amount of browser glue (document
//! root class sync, scroll reveal) the page needs.

pub mod app;
pub mod components;
pub mod content;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: attach reactivity to the server-rendered markup.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::hydrate_body(app::App);
}
