//! # Streaming Markdown Rendering
//!
//! Converts a possibly incomplete chat reply into HTML for direct display.
//!
//! The renderer is stateless between calls: each call receives the full text
//! received so far and re-parses it from scratch. Output for a growing buffer
//! only changes at its tail, since HTML is appended line by line and an
//! unterminated code fence emits nothing until it closes.
//!
//! Supported subset: `#`/`##`/`###` headings, nested `-`/`*` and `1.` lists,
//! fenced code blocks, horizontal rules, and inline bold, italic and code.
//! Tables, links, images and blockquotes are rendered as plain paragraphs.

pub mod blocks;
pub mod html;
pub mod inline;
pub mod lines;
pub mod options;

#[cfg(test)]
mod tests;

use blocks::{HtmlBuilder, MarkdownLineClassifier};
use lines::lines_with_indent;

pub use options::RenderOptions;

/// Renders `text` with default [`RenderOptions`].
pub fn render_markdown(text: &str) -> String {
    render_markdown_with(text, &RenderOptions::default())
}

/// Renders `text` to HTML. Never fails: anything unrecognised becomes a paragraph.
pub fn render_markdown_with(text: &str, options: &RenderOptions) -> String {
    let classifier = MarkdownLineClassifier;
    let mut builder = HtmlBuilder::new(options);

    for lr in lines_with_indent(text) {
        let lc = classifier.classify(&lr);
        builder.push(&lr, &lc);
    }

    builder.finish()
}
