//! # Inline Formatting
//!
//! Bold, italic and inline code inside a single line of prose.
//!
//! Formatting is three regex substitutions applied in a fixed order
//! (strong, emphasis, code). Each pass sees the output of the previous one,
//! so there is no nesting detection beyond that ordering: an asterisk inside
//! backticks is still read as emphasis. Code blocks never reach this module.

pub mod kinds;

use super::html::escape_text;
use kinds::PASSES;

/// Applies inline formatting to one line of prose.
///
/// With `escape` set, `&`, `<` and `>` are escaped first so the only markup
/// in the result is what the passes insert.
pub fn format_inline(text: &str, escape: bool) -> String {
    let mut out = if escape {
        escape_text(text)
    } else {
        text.to_string()
    };
    for pass in PASSES.iter() {
        let next = pass.apply(&out);
        if next != out {
            log::trace!("inline pass {} matched", pass.name);
        }
        out = next;
    }
    out
}
