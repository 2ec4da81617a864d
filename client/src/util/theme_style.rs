//! Theme-to-class mapping for the page shell and navbar.
//!
//! Only the page background and the navbar follow the theme. Cards and the
//! contact form keep their dark surface in both modes.

#[cfg(test)]
#[path = "theme_style_test.rs"]
mod theme_style_test;

use crate::state::theme::ThemeMode;

/// Classes selected by the current theme.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeClasses {
    pub page: &'static str,
    pub nav: &'static str,
}

/// Icon shown on the theme toggle: the mode the click switches to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToggleIcon {
    pub glyph: &'static str,
    pub label: &'static str,
}

#[must_use]
pub fn theme_classes(mode: ThemeMode) -> ThemeClasses {
    match mode {
        ThemeMode::Dark => ThemeClasses { page: "page page--dark", nav: "nav-bar nav-bar--dark" },
        ThemeMode::Light => ThemeClasses { page: "page page--light", nav: "nav-bar nav-bar--light" },
    }
}

#[must_use]
pub fn toggle_icon(mode: ThemeMode) -> ToggleIcon {
    match mode {
        ThemeMode::Dark => ToggleIcon { glyph: "☀", label: "Switch to light mode" },
        ThemeMode::Light => ToggleIcon { glyph: "☾", label: "Switch to dark mode" },
    }
}
