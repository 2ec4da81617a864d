use leptos::reactive::owner::Owner;

use super::*;

fn render_nav(theme: RwSignal<ThemeMode>) -> String {
    view! { <NavBar theme=theme/> }.to_html()
}

#[test]
fn light_theme_renders_light_nav_and_moon_toggle() {
    Owner::new().with(|| {
        let theme = RwSignal::new(ThemeMode::Light);
        let html = render_nav(theme);

        assert!(html.contains("nav-bar--light"), "{html}");
        assert!(!html.contains("nav-bar--dark"), "{html}");
        assert!(html.contains(r#"aria-label="Switch to dark mode""#), "{html}");
        assert!(html.contains('☾'), "{html}");
    });
}

#[test]
fn toggling_signal_switches_rendered_theme_and_back() {
    Owner::new().with(|| {
        let theme = RwSignal::new(ThemeMode::default());
        assert!(render_nav(theme).contains("nav-bar--dark"));

        // First click: dark marker gone.
        theme.update(|mode| *mode = mode.toggled());
        let light = render_nav(theme);
        assert!(light.contains("nav-bar--light"), "{light}");
        assert!(light.contains(r#"aria-label="Switch to dark mode""#), "{light}");
        assert_eq!(theme.get_untracked().root_class(), "");

        // Second click: dark marker restored.
        theme.update(|mode| *mode = mode.toggled());
        let dark = render_nav(theme);
        assert!(dark.contains("nav-bar--dark"), "{dark}");
        assert!(dark.contains(r#"aria-label="Switch to light mode""#), "{dark}");
        assert!(dark.contains('☀'), "{dark}");
        assert_eq!(theme.get_untracked().root_class(), "dark");
    });
}

#[test]
fn nav_renders_every_section_link() {
    Owner::new().with(|| {
        let html = render_nav(RwSignal::new(ThemeMode::Dark));
        for section in SECTIONS {
            assert!(html.contains(&format!(r##"href="#{}""##, section.id)), "{html}");
        }
    });
}
