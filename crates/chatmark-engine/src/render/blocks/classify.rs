use crate::render::lines::LineRef;

use super::kinds::{CodeFence, Heading, ListKind, ListMarker, ThematicBreak};

/// Classification of a single line containing only local facts.
///
/// This is phase 1 of rendering: each line is classified independently
/// without reference to the open frames. Fence lines are recognised
/// everywhere; the builder decides whether one opens or closes a block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A triple-backtick line with its info string.
    Fence { info: &'a str },
    /// A list item at the given indent.
    ListItem {
        kind: ListKind,
        indent: usize,
        content: &'a str,
    },
    /// `#`, `##` or `###` heading.
    Heading { level: u8, text: &'a str },
    /// `---`, `___` or `***`.
    Rule,
    /// Any other non-empty line.
    Text(&'a str),
    /// Empty or whitespace only.
    Blank,
}

/// Classifies individual lines for the block phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line. Precedence: fence, list item, heading, rule, text.
    pub fn classify<'a>(&self, lr: &LineRef<'a>) -> LineClass<'a> {
        let trimmed = lr.trimmed();

        if let Some(sig) = CodeFence::sig(trimmed) {
            return LineClass::Fence { info: sig.info };
        }
        if let Some(item) = ListMarker::parse(trimmed) {
            return LineClass::ListItem {
                kind: item.kind,
                indent: lr.indent,
                content: item.content,
            };
        }
        if let Some((level, text)) = Heading::parse(trimmed) {
            return LineClass::Heading { level, text };
        }
        if ThematicBreak::matches(trimmed) {
            return LineClass::Rule;
        }
        if trimmed.is_empty() {
            LineClass::Blank
        } else {
            LineClass::Text(trimmed)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::lines::lines_with_indent;
    use pretty_assertions::assert_eq;

    fn classify_all(text: &str) -> Vec<LineClass<'_>> {
        lines_with_indent(text)
            .map(|lr| MarkdownLineClassifier.classify(&lr))
            .collect()
    }

    #[test]
    fn classifies_each_kind() {
        let md = "# Title\n  - item\n1. one\n---\n```py\nplain\n   \n";
        assert_eq!(
            classify_all(md),
            vec![
                LineClass::Heading {
                    level: 1,
                    text: "Title"
                },
                LineClass::ListItem {
                    kind: ListKind::Unordered,
                    indent: 2,
                    content: "item"
                },
                LineClass::ListItem {
                    kind: ListKind::Ordered,
                    indent: 0,
                    content: "one"
                },
                LineClass::Rule,
                LineClass::Fence { info: "py" },
                LineClass::Text("plain"),
                LineClass::Blank,
                LineClass::Blank,
            ]
        );
    }

    #[test]
    fn indented_fence_is_still_a_fence() {
        assert_eq!(classify_all("    ```"), vec![LineClass::Fence { info: "" }]);
    }

    #[test]
    fn list_item_beats_heading_text() {
        assert_eq!(
            classify_all("- # not a heading"),
            vec![LineClass::ListItem {
                kind: ListKind::Unordered,
                indent: 0,
                content: "# not a heading"
            }]
        );
    }

    #[test]
    fn carriage_return_is_trimmed() {
        assert_eq!(classify_all("hello\r"), vec![LineClass::Text("hello")]);
    }
}
