use super::*;

#[test]
fn markdown_renders_headings_lists_and_links() {
    let html = render_markdown_html("## Title\n\n- one\n- [two](https://example.com)\n");
    assert!(html.contains("<h2>Title</h2>"));
    assert!(html.contains("<li>one</li>"));
    assert!(html.contains(r#"<a href="https://example.com">two</a>"#));
}

#[test]
fn raw_html_is_dropped() {
    let html = render_markdown_html("hello <script>alert(1)</script> world\n\n<div>block</div>\n");
    assert!(!html.contains("<script>"));
    assert!(!html.contains("<div>"));
    assert!(html.contains("hello"));
}

#[test]
fn about_copy_renders() {
    let html = render_markdown_html(ABOUT_MARKDOWN);
    assert!(html.starts_with("<h2>About the map</h2>"));
    assert!(html.contains("mailto:info@parkingreform.org"));
}
