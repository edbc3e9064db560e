use super::{kinds::ListKind, types::Frame};

/// The stack of open frames, bottom first.
///
/// List frames are strictly increasing in indent from bottom to top.
#[derive(Debug, Default, Clone)]
pub struct FrameStack(Vec<Frame>);

impl FrameStack {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn depth(&self) -> usize {
        self.0.len()
    }

    pub fn in_code_block(&self) -> bool {
        matches!(self.0.last(), Some(Frame::CodeBlock { .. }))
    }

    /// Kind and indent of the innermost open list.
    pub fn top_list(&self) -> Option<(ListKind, usize)> {
        match self.0.last() {
            Some(Frame::List { kind, indent }) => Some((*kind, *indent)),
            _ => None,
        }
    }

    pub fn push(&mut self, frame: Frame) {
        debug_assert!(
            match (&frame, self.top_list()) {
                (Frame::List { indent, .. }, Some((_, top))) => *indent > top,
                (Frame::CodeBlock { .. }, _) => self.0.is_empty(),
                _ => true,
            },
            "frame stack invariant violated pushing {frame:?} onto {:?}",
            self.0
        );
        self.0.push(frame);
    }

    /// Pops the innermost list frame, returning its kind.
    pub fn pop_list(&mut self) -> Option<ListKind> {
        match self.0.last() {
            Some(Frame::List { kind, .. }) => {
                let kind = *kind;
                self.0.pop();
                Some(kind)
            }
            _ => None,
        }
    }

    /// Takes the open code block, leaving the stack empty.
    pub fn take_code_block(&mut self) -> Option<(String, String)> {
        match self.0.pop() {
            Some(Frame::CodeBlock { language, body }) => Some((language, body)),
            Some(other) => {
                self.0.push(other);
                None
            }
            None => None,
        }
    }

    /// Appends one raw line to the open code block body.
    pub fn append_code_line(&mut self, line: &str) {
        if let Some(Frame::CodeBlock { body, .. }) = self.0.last_mut() {
            body.push_str(line);
            body.push('\n');
        }
    }
}
