//! Scroll-triggered entrance animation for page sections.
//!
//! Sections render with [`REVEAL_CLASS`] (hidden, offset). In the browser an
//! `IntersectionObserver` adds [`VISIBLE_CLASS`] the first time a section
//! enters the viewport and then stops watching it. The transition itself is
//! CSS.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

pub const REVEAL_CLASS: &str = "reveal";
pub const VISIBLE_CLASS: &str = "reveal--visible";

/// Class list for a revealable element with extra layout classes.
#[must_use]
pub fn reveal_classes(extra: &str) -> String {
    if extra.is_empty() {
        REVEAL_CLASS.to_owned()
    } else {
        format!("{REVEAL_CLASS} {extra}")
    }
}

/// Start watching `el`; marks it visible on first intersection only.
#[cfg(feature = "hydrate")]
pub fn observe_once(el: &web_sys::Element) {
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
            for entry in entries.iter() {
                let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                if entry.is_intersecting() {
                    let target = entry.target();
                    let _ = target.class_list().add_1(VISIBLE_CLASS);
                    observer.unobserve(&target);
                }
            }
        },
    );

    match web_sys::IntersectionObserver::new(callback.as_ref().unchecked_ref()) {
        Ok(observer) => {
            observer.observe(el);
            // Observer holds the callback for the page's lifetime.
            callback.forget();
        }
        Err(_) => {
            // No observer support: show the section immediately.
            let _ = el.class_list().add_1(VISIBLE_CLASS);
        }
    }
}
