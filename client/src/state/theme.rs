//! Two-valued presentation theme.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Class placed on the document root element while the dark theme is active.
pub const DARK_CLASS: &str = "dark";

/// Dark/light presentation setting owned by the portfolio page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    /// The opposite mode. Toggling never fails.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }

    /// Class for the `<html>` element: `"dark"` or empty.
    #[must_use]
    pub fn root_class(self) -> &'static str {
        if self.is_dark() { DARK_CLASS } else { "" }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}
