use super::kinds::ListKind;

/// A frame in the open-construct stack.
///
/// Lists nest by indent. A code block is never nested: entering one closes
/// every open list, so a `CodeBlock` frame is always the only frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Frame {
    /// An open fenced code block accumulating its raw body.
    CodeBlock {
        /// Info string after the opening fence, trimmed.
        language: String,
        /// Raw lines seen so far, each followed by `\n`.
        body: String,
    },
    /// An open `<ul>` or `<ol>` at the given indent.
    List { kind: ListKind, indent: usize },
}
