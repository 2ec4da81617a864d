//! Document-root theme sync.
//!
//! Sets or clears the `dark` class on the `<html>` element to match the
//! page's `ThemeMode`. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! The preference is not persisted: every load starts from the default mode.
//! SSR paths no-op; the server shell renders the default class itself.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

use crate::state::theme::ThemeMode;
#[cfg(feature = "hydrate")]
use crate::state::theme::DARK_CLASS;

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(mode: ThemeMode) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(doc) = web_sys::window().and_then(|w| w.document()) {
            if let Some(el) = doc.document_element() {
                let _ = el.class_list().toggle_with_force(DARK_CLASS, mode.is_dark());
                log::debug!("theme applied: {}", mode.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = mode;
    }
}
