use super::*;

// =============================================================
// Defaults
// =============================================================

#[test]
fn theme_mode_default_is_dark() {
    assert_eq!(ThemeMode::default(), ThemeMode::Dark);
    assert!(ThemeMode::default().is_dark());
}

// =============================================================
// Toggle
// =============================================================

#[test]
fn toggled_flips_between_modes() {
    assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
}

#[test]
fn even_number_of_toggles_returns_to_start() {
    for start in [ThemeMode::Dark, ThemeMode::Light] {
        let mut mode = start;
        for _ in 0..6 {
            mode = mode.toggled();
        }
        assert_eq!(mode, start);
    }
}

#[test]
fn odd_number_of_toggles_lands_on_other_mode() {
    let mut mode = ThemeMode::Dark;
    for _ in 0..3 {
        mode = mode.toggled();
    }
    assert_eq!(mode, ThemeMode::Light);
}

// =============================================================
// Root class
// =============================================================

#[test]
fn root_class_marks_dark_only() {
    assert_eq!(ThemeMode::Dark.root_class(), DARK_CLASS);
    assert_eq!(ThemeMode::Light.root_class(), "");
}

#[test]
fn as_str_names_each_mode() {
    assert_eq!(ThemeMode::Dark.as_str(), "dark");
    assert_eq!(ThemeMode::Light.as_str(), "light");
}
