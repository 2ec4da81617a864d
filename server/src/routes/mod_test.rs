use super::*;

use portfolio_client::content::{CONTACT_FIELDS, CONTACT_FORM_ACTION, SECTIONS};

async fn spawn_app() -> String {
    let options = LeptosOptions::builder()
        .output_name("portfolio")
        .site_root("target/site")
        .build();
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app(options)).await.unwrap();
    });
    format!("http://{addr}")
}

async fn get_page(base: &str, path: &str) -> (reqwest::StatusCode, String) {
    let resp = reqwest::get(format!("{base}{path}")).await.unwrap();
    let status = resp.status();
    (status, resp.text().await.unwrap())
}

// =============================================================
// Health
// =============================================================

#[tokio::test]
async fn healthz_returns_ok() {
    let base = spawn_app().await;
    let (status, _) = get_page(&base, "/healthz").await;
    assert_eq!(status, reqwest::StatusCode::OK);
}

// =============================================================
// Portfolio page
// =============================================================

#[tokio::test]
async fn index_renders_dark_by_default() {
    let base = spawn_app().await;
    let (status, body) = get_page(&base, "/").await;
    assert_eq!(status, reqwest::StatusCode::OK);

    let html_start = body.find("<html").unwrap();
    let html_tag_end = html_start + body[html_start..].find('>').unwrap();
    assert!(body[html_start..html_tag_end].contains(r#"class="dark""#));
    assert!(body.contains("page--dark"));
    assert!(body.contains("nav-bar--dark"));
    assert!(body.contains("Switch to light mode"));
}

#[tokio::test]
async fn index_renders_six_nav_links_in_order() {
    let base = spawn_app().await;
    let (_, body) = get_page(&base, "/").await;

    assert_eq!(body.matches(r#"class="nav-bar__link""#).count(), 6);

    let positions: Vec<usize> = SECTIONS
        .iter()
        .map(|section| {
            body.find(&format!(r##"href="#{}""##, section.id))
                .unwrap_or_else(|| panic!("missing nav link for {}", section.id))
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]), "nav links out of order: {positions:?}");

    for label in ["About", "Skills", "Experience", "Projects", "Blog", "Contact"] {
        assert!(body.contains(label), "missing nav label {label}");
    }
}

#[tokio::test]
async fn every_nav_target_is_rendered_exactly_once() {
    let base = spawn_app().await;
    let (_, body) = get_page(&base, "/").await;

    for section in SECTIONS {
        let needle = format!(r#"id="{}""#, section.id);
        assert_eq!(body.matches(&needle).count(), 1, "anchor count for {}", section.id);
    }
}

#[tokio::test]
async fn contact_form_posts_required_fields_to_endpoint() {
    let base = spawn_app().await;
    let (_, body) = get_page(&base, "/").await;

    let form_start = body.find("<form").unwrap();
    let form_end = form_start + body[form_start..].find("</form>").unwrap();
    let form = &body[form_start..form_end];

    assert!(form.contains(&format!(r#"action="{CONTACT_FORM_ACTION}""#)));
    assert!(form.contains(r#"method="POST""#));
    for field in CONTACT_FIELDS {
        assert!(form.contains(&format!(r#"name="{}""#, field.name)), "missing field {}", field.name);
    }
    assert!(form.contains(r#"type="email""#));
    assert_eq!(form.matches("required").count(), CONTACT_FIELDS.len());
}

#[tokio::test]
async fn index_enables_smooth_scrolling_and_reveal() {
    let base = spawn_app().await;
    let (_, body) = get_page(&base, "/").await;

    assert!(body.contains("scroll-behavior: smooth"));
    assert_eq!(body.matches(r#"class="reveal section"#).count(), SECTIONS.len());
}

#[tokio::test]
async fn blog_markdown_is_rendered_as_html() {
    let base = spawn_app().await;
    let (_, body) = get_page(&base, "/").await;
    assert!(body.contains("<strong>Markdown/MDX</strong>"));
}

// =============================================================
// Fallback
// =============================================================

#[tokio::test]
async fn unknown_path_renders_not_found() {
    let base = spawn_app().await;
    let (status, body) = get_page(&base, "/no-such-page").await;
    assert_eq!(status, reqwest::StatusCode::NOT_FOUND);
    assert!(body.contains("Nothing lives at this address."));
}
