use crate::render::{html, inline::format_inline, lines::LineRef, options::RenderOptions};

use super::{
    classify::LineClass,
    frames::FrameStack,
    kinds::{CodeFence, ListKind},
    types::Frame,
};

/// Turns classified lines into HTML, one line at a time.
///
/// Output is append-only: nothing already written is revisited, which is
/// what keeps a growing stream visually stable between re-renders.
pub struct HtmlBuilder<'o> {
    frames: FrameStack,
    options: &'o RenderOptions,
    code_blocks: usize,
    out: String,
}

impl<'o> HtmlBuilder<'o> {
    pub fn new(options: &'o RenderOptions) -> Self {
        Self {
            frames: FrameStack::default(),
            options,
            code_blocks: 0,
            out: String::new(),
        }
    }

    pub fn push(&mut self, lr: &LineRef<'_>, c: &LineClass<'_>) {
        if self.frames.in_code_block() {
            if matches!(c, LineClass::Fence { .. }) {
                self.close_code_block();
            } else {
                self.frames.append_code_line(lr.text);
            }
            return;
        }

        match *c {
            LineClass::Fence { info } => {
                self.close_lists();
                log::trace!("line {}: open fence {info:?}", lr.number);
                self.frames.push(Frame::CodeBlock {
                    language: info.to_string(),
                    body: String::new(),
                });
            }
            LineClass::ListItem {
                kind,
                indent,
                content,
            } => self.push_list_item(kind, indent, content),
            LineClass::Heading { level, text } => {
                self.close_lists();
                let inner = self.inline(text);
                html::heading(&mut self.out, level, &inner);
            }
            LineClass::Rule => {
                self.close_lists();
                html::rule(&mut self.out);
            }
            LineClass::Text(text) => {
                self.close_lists();
                let inner = self.inline(text);
                html::paragraph(&mut self.out, &inner);
            }
            LineClass::Blank => self.close_lists(),
        }
    }

    pub fn finish(mut self) -> String {
        // EOF flush
        self.close_lists();
        if let Some((language, body)) = self.frames.take_code_block() {
            // Unterminated fence: nothing is emitted until the closing fence arrives.
            log::debug!(
                "dropping unterminated {language:?} code block ({} bytes)",
                body.len()
            );
        }
        self.out
    }

    fn inline(&self, text: &str) -> String {
        format_inline(text, self.options.escape_prose)
    }

    fn push_list_item(&mut self, kind: ListKind, indent: usize, content: &str) {
        while self
            .frames
            .top_list()
            .is_some_and(|(_, top_indent)| top_indent > indent)
        {
            self.close_top_list();
        }

        // A kind change at the same indent starts a fresh list.
        if let Some((top_kind, top_indent)) = self.frames.top_list()
            && top_indent == indent
            && top_kind != kind
        {
            self.close_top_list();
        }

        let needs_open = match self.frames.top_list() {
            None => true,
            Some((_, top_indent)) => top_indent < indent,
        };
        if needs_open {
            log::trace!("open {} at indent {indent}", kind.tag());
            self.frames.push(Frame::List { kind, indent });
            html::open_list(&mut self.out, kind);
        }

        let inner = self.inline(content);
        html::list_item(&mut self.out, kind, &inner);
    }

    fn close_top_list(&mut self) {
        if let Some(kind) = self.frames.pop_list() {
            html::close_list(&mut self.out, kind);
        }
    }

    fn close_lists(&mut self) {
        while self.frames.top_list().is_some() {
            self.close_top_list();
        }
    }

    fn close_code_block(&mut self) {
        let Some((language, body)) = self.frames.take_code_block() else {
            return;
        };
        let id = format!("{}{}", self.options.code_id_prefix, self.code_blocks);
        self.code_blocks += 1;
        let label = CodeFence::label(
            &language,
            &self.options.code_label,
            self.options.uppercase_language,
        );
        html::code_section(
            &mut self.out,
            &id,
            &label,
            body.trim_end(),
            self.options.copy_button,
        );
    }
}
