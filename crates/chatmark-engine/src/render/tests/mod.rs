//! Whole-document rendering tests.
//!
//! Uses inline `insta` snapshots for complete documents and direct
//! assertions for the individual rendering rules.

use super::{RenderOptions, render_markdown, render_markdown_with};
use pretty_assertions::assert_eq;
use rstest::rstest;

#[test]
fn plain_lines_become_one_paragraph_each() {
    assert_eq!(
        render_markdown("first line\nsecond line\n\nthird"),
        "<p class=\"chat-paragraph\">first line</p><p class=\"chat-paragraph\">second line</p><p class=\"chat-paragraph\">third</p>"
    );
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown(""), "");
    assert_eq!(render_markdown("\n\n  \n"), "");
}

#[rstest]
#[case("# One", "<h1>One</h1>")]
#[case("## Two", "<h2>Two</h2>")]
#[case("### Three", "<h3>Three</h3>")]
#[case("#### Four", "<p class=\"chat-paragraph\">#### Four</p>")]
#[case("   ## Indented", "<h2>Indented</h2>")]
#[case("## **Bold** title", "<h2><strong>Bold</strong> title</h2>")]
#[case("---", "<hr>")]
#[case("___", "<hr>")]
#[case("***", "<hr>")]
fn single_line_blocks(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(render_markdown(input), expected);
}

#[test]
fn inline_formatting_in_paragraph() {
    assert_eq!(
        render_markdown("**bold** and *italic* and `code`"),
        "<p class=\"chat-paragraph\"><strong>bold</strong> and <em>italic</em> and <code>code</code></p>"
    );
}

#[test]
fn code_block_with_language() {
    let html = render_markdown("```python\nprint(\"<hi>\" & x)   \n```");
    insta::assert_snapshot!(html, @r#"<div class="code-section"><div class="code-section-header"><span class="code-section-title"><i class="fas fa-code"></i> PYTHON</span><button class="copy-btn" data-copy-target="code-0"><i class="fas fa-copy"></i> Copy</button></div><pre class="code-block"><code id="code-0">print(&quot;&lt;hi&gt;&quot; &amp; x)</code></pre></div>"#);
}

#[test]
fn code_block_body_escapes_every_special_character() {
    let html = render_markdown("```\n& < > \" '\n```");
    let body = html
        .split("<code id=\"code-0\">")
        .nth(1)
        .and_then(|rest| rest.split("</code>").next())
        .unwrap();
    assert!(body.starts_with("&amp; &lt; &gt; &quot; "));
    assert!(!body.contains('\''));
}

#[test]
fn code_block_without_language_uses_default_label() {
    let html = render_markdown("```\nx\n```");
    assert!(html.contains("<i class=\"fas fa-code\"></i> Code</span>"));
}

#[test]
fn code_block_keeps_leading_indentation_and_trims_trailing() {
    let html = render_markdown("```\n    indented\n\n\n```");
    assert!(html.contains("<code id=\"code-0\">    indented</code>"));
}

#[test]
fn nested_list_document() {
    let md = "\
- fruit
  - apple
  - pear
- veg
1. first
2. second";
    insta::assert_snapshot!(render_markdown(md), @r#"
    <ul class="custom-bullet-list">
      <li><span class="custom-bullet"></span>fruit</li>
    <ul class="custom-bullet-list">
      <li><span class="custom-bullet"></span>apple</li>
      <li><span class="custom-bullet"></span>pear</li>
    </ul>
      <li><span class="custom-bullet"></span>veg</li>
    </ul>
    <ol>
      <li>first</li>
      <li>second</li>
    </ol>
    "#);
}

#[test]
fn paragraph_after_list_closes_it() {
    assert_eq!(
        render_markdown("* a\ntail"),
        "<ul class=\"custom-bullet-list\">\n  <li><span class=\"custom-bullet\"></span>a</li>\n</ul>\n<p class=\"chat-paragraph\">tail</p>"
    );
}

#[test]
fn prose_is_escaped_by_default() {
    assert_eq!(
        render_markdown("<script>alert(1)</script>"),
        "<p class=\"chat-paragraph\">&lt;script&gt;alert(1)&lt;/script&gt;</p>"
    );
}

#[test]
fn raw_prose_option_passes_html_through() {
    let options = RenderOptions {
        escape_prose: false,
        ..RenderOptions::default()
    };
    assert_eq!(
        render_markdown_with("<u>x</u>", &options),
        "<p class=\"chat-paragraph\"><u>x</u></p>"
    );
}

#[test]
fn options_change_code_header() {
    let options = RenderOptions {
        code_label: "Snippet".into(),
        uppercase_language: false,
        copy_button: false,
        code_id_prefix: "msg3-code-".into(),
        ..RenderOptions::default()
    };
    let html = render_markdown_with("```\na\n```\n```rust\nb\n```", &options);
    assert!(html.contains("</i> Snippet</span>"));
    assert!(html.contains("</i> rust</span>"));
    assert!(html.contains("<code id=\"msg3-code-1\">b</code>"));
    assert!(!html.contains("copy-btn"));
}

#[test]
fn unsupported_constructs_fall_back_to_paragraphs() {
    assert_eq!(
        render_markdown("> quote\n| a | b |"),
        "<p class=\"chat-paragraph\">&gt; quote</p><p class=\"chat-paragraph\">| a | b |</p>"
    );
}

#[test]
fn binary_looking_input_still_renders() {
    let html = render_markdown("\u{0}\u{1}```\u{7f}\n\t\t-\n9.");
    assert!(html.contains("chat-paragraph"));
}

#[test]
fn growing_prefix_only_changes_the_tail() {
    let full = "# Title\n\nIntro **text**\n\n- one\n  - two\n\n```js\nlet a = 1;\n\nlet b = 2;\n```\n\nDone.";
    for end in 0..=full.len() {
        // A blank line closes every list, so output before it is settled.
        let settled = full[..end].rfind("\n\n").map_or(0, |i| i + 2);
        let settled_html = render_markdown(&full[..settled]);
        let html = render_markdown(&full[..end]);
        assert!(
            html.starts_with(&settled_html),
            "prefix of length {end} rewrote settled output"
        );
    }
}

#[test]
fn unterminated_fence_leaks_nothing() {
    let html = render_markdown("Intro\n```rust\nsecret body\nmore");
    assert_eq!(html, "<p class=\"chat-paragraph\">Intro</p>");
}

#[test]
fn code_ids_are_stable_across_renders() {
    let first = render_markdown("```\na\n```\ntext");
    let second = render_markdown("```\na\n```\ntext\n```\nb\n```");
    assert!(first.contains("id=\"code-0\""));
    assert!(second.starts_with(&first));
    assert!(second.contains("id=\"code-1\""));
}
