//! HTML fragments emitted by the renderer.
//!
//! Every tag and class name the chat window's stylesheet depends on lives
//! here; the builder never formats markup itself.

use super::blocks::kinds::ListKind;

/// Escapes `&`, `<`, `>`, `"` and `'` for code block bodies and attributes.
pub fn escape_code(s: &str) -> String {
    html_escape::encode_quoted_attribute(s).into_owned()
}

/// Escapes `&`, `<` and `>` in prose text.
pub fn escape_text(s: &str) -> String {
    html_escape::encode_text(s).into_owned()
}

pub fn open_list(out: &mut String, kind: ListKind) {
    match kind {
        ListKind::Unordered => out.push_str("<ul class=\"custom-bullet-list\">\n"),
        ListKind::Ordered => out.push_str("<ol>\n"),
    }
}

pub fn close_list(out: &mut String, kind: ListKind) {
    out.push_str("</");
    out.push_str(kind.tag());
    out.push_str(">\n");
}

/// `inner` must already be inline-formatted.
pub fn list_item(out: &mut String, kind: ListKind, inner: &str) {
    out.push_str("  <li>");
    if kind == ListKind::Unordered {
        out.push_str("<span class=\"custom-bullet\"></span>");
    }
    out.push_str(inner);
    out.push_str("</li>\n");
}

pub fn heading(out: &mut String, level: u8, inner: &str) {
    out.push_str(&format!("<h{level}>{inner}</h{level}>"));
}

pub fn rule(out: &mut String) {
    out.push_str("<hr>");
}

pub fn paragraph(out: &mut String, inner: &str) {
    out.push_str("<p class=\"chat-paragraph\">");
    out.push_str(inner);
    out.push_str("</p>");
}

/// A closed code block: header with label and optional copy button, then the body.
///
/// `label` and `code` are raw text; both are escaped here.
pub fn code_section(out: &mut String, id: &str, label: &str, code: &str, copy_button: bool) {
    let label = escape_code(label);
    out.push_str("<div class=\"code-section\"><div class=\"code-section-header\">");
    out.push_str(&format!(
        "<span class=\"code-section-title\"><i class=\"fas fa-code\"></i> {label}</span>"
    ));
    if copy_button {
        out.push_str(&format!(
            "<button class=\"copy-btn\" data-copy-target=\"{id}\"><i class=\"fas fa-copy\"></i> Copy</button>"
        ));
    }
    out.push_str(&format!(
        "</div><pre class=\"code-block\"><code id=\"{id}\">{}</code></pre></div>\n",
        escape_code(code)
    ));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_escaping_covers_quotes() {
        let escaped = escape_code(r#"<a href="x">&'</a>"#);
        assert!(escaped.starts_with("&lt;a href=&quot;x&quot;&gt;&amp;"));
        assert!(!escaped.contains('\''));
        assert!(!escaped.contains('"'));
    }

    #[test]
    fn text_escaping_leaves_quotes() {
        assert_eq!(escape_text(r#"a < b & "c""#), r#"a &lt; b &amp; "c""#);
    }

    #[test]
    fn unordered_items_carry_bullet_span() {
        let mut out = String::new();
        open_list(&mut out, ListKind::Unordered);
        list_item(&mut out, ListKind::Unordered, "a");
        close_list(&mut out, ListKind::Unordered);
        assert_eq!(
            out,
            "<ul class=\"custom-bullet-list\">\n  <li><span class=\"custom-bullet\"></span>a</li>\n</ul>\n"
        );
    }

    #[test]
    fn ordered_items_have_no_bullet() {
        let mut out = String::new();
        list_item(&mut out, ListKind::Ordered, "a");
        assert_eq!(out, "  <li>a</li>\n");
    }

    #[test]
    fn code_section_without_copy_button() {
        let mut out = String::new();
        code_section(&mut out, "code-0", "Code", "x", false);
        assert!(!out.contains("copy-btn"));
        assert!(out.contains("<code id=\"code-0\">x</code>"));
    }
}
