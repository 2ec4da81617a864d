use super::*;
use crate::content::BLOG_MARKDOWN;

#[test]
fn paragraphs_become_p_elements() {
    let out = render_markdown_html("one\n\ntwo\n");
    assert_eq!(out, "<p>one</p>\n<p>two</p>\n");
}

#[test]
fn emphasis_is_rendered() {
    assert_eq!(render_markdown_html("**bold**"), "<p><strong>bold</strong></p>\n");
}

#[test]
fn raw_html_is_dropped() {
    let out = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!out.contains("<script>"));
    assert!(out.contains("before"));
    assert!(out.contains("after"));
}

#[test]
fn blog_placeholder_renders_two_paragraphs() {
    let out = render_markdown_html(BLOG_MARKDOWN);
    assert_eq!(out.matches("<p>").count(), 2);
    assert!(out.contains("Coming Soon"));
    assert!(out.contains("powered by <strong>Markdown/MDX</strong> for easy writing and Git-based publishing."));
}
