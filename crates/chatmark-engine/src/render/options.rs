use serde::{Deserialize, Serialize};

/// Knobs for [`render_markdown_with`](super::render_markdown_with).
///
/// The defaults reproduce the chat window's look: uppercase language labels,
/// a copy button on every code block, and escaped prose.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Header label for a code block opened without a language.
    pub code_label: String,
    /// Show the language tag in upper case.
    pub uppercase_language: bool,
    /// Emit a copy button wired to the code element by `data-copy-target`.
    pub copy_button: bool,
    /// Escape `&`, `<` and `>` in prose before inline formatting.
    ///
    /// Turning this off passes raw HTML in chat text straight through.
    pub escape_prose: bool,
    /// Prefix for code element ids. The block index within the render is appended.
    pub code_id_prefix: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            code_label: "Code".to_string(),
            uppercase_language: true,
            copy_button: true,
            escape_prose: true,
            code_id_prefix: "code-".to_string(),
        }
    }
}
