//! Inline constructs with their owned patterns and replacement templates.
//!
//! All delimiter knowledge lives here; `format_inline` only applies the
//! passes in [`PASSES`] order.

use std::sync::OnceLock;

use regex::Regex;

/// One regex substitution pass.
pub struct InlinePass {
    pub name: &'static str,
    pub pattern: &'static str,
    pub replacement: &'static str,
    cell: OnceLock<Regex>,
}

impl InlinePass {
    const fn new(name: &'static str, pattern: &'static str, replacement: &'static str) -> Self {
        Self {
            name,
            pattern,
            replacement,
            cell: OnceLock::new(),
        }
    }

    pub fn regex(&self) -> &Regex {
        self.cell
            .get_or_init(|| Regex::new(self.pattern).expect("Invalid inline regex"))
    }

    pub fn apply(&self, text: &str) -> String {
        self.regex()
            .replace_all(text, self.replacement)
            .into_owned()
    }
}

/// `**text**`. Non-greedy, so `**a** and **b**` yields two spans.
pub static STRONG: InlinePass = InlinePass::new(
    "strong",
    r"\*\*(.*?)\*\*",
    "<strong>${1}</strong>",
);

/// `*text*`, run after [`STRONG`] has consumed the doubled markers.
pub static EMPHASIS: InlinePass = InlinePass::new("emphasis", r"\*(.*?)\*", "<em>${1}</em>");

/// `` `text` ``. Needs at least one character between the ticks.
pub static CODE_SPAN: InlinePass = InlinePass::new("code", r"`([^`]+?)`", "<code>${1}</code>");

/// Passes in application order.
pub static PASSES: [&InlinePass; 3] = [&STRONG, &EMPHASIS, &CODE_SPAN];
