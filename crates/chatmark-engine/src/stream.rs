use crate::render::{RenderOptions, render_markdown_with};

/// Decodes a byte stream into text without splitting multi-byte characters.
///
/// Network chunks can end in the middle of a UTF-8 sequence. The incomplete
/// tail is held back and completed by the next chunk. Invalid sequences
/// become U+FFFD.
#[derive(Debug, Clone, Default)]
pub struct Utf8ChunkDecoder {
    pending: Vec<u8>,
}

impl Utf8ChunkDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Decodes as much of `pending + bytes` as forms complete characters.
    pub fn decode(&mut self, bytes: &[u8]) -> String {
        self.pending.extend_from_slice(bytes);
        let mut out = String::new();
        let mut rest: &[u8] = &self.pending;

        loop {
            match std::str::from_utf8(rest) {
                Ok(valid) => {
                    out.push_str(valid);
                    rest = &[];
                    break;
                }
                Err(e) => {
                    let (valid, after) = rest.split_at(e.valid_up_to());
                    out.push_str(std::str::from_utf8(valid).unwrap_or_default());
                    match e.error_len() {
                        Some(bad) => {
                            out.push(char::REPLACEMENT_CHARACTER);
                            rest = &after[bad..];
                        }
                        // Incomplete sequence at the end: wait for more bytes.
                        None => {
                            rest = after;
                            break;
                        }
                    }
                }
            }
        }

        self.pending = rest.to_vec();
        out
    }

    /// Whether bytes are being held back for the next chunk.
    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Flushes held-back bytes at end of stream.
    pub fn finish(&mut self) -> String {
        if self.pending.is_empty() {
            return String::new();
        }
        self.pending.clear();
        char::REPLACEMENT_CHARACTER.to_string()
    }
}

/// Accumulates a streamed reply and re-renders the full buffer per chunk.
///
/// Re-rendering is O(n) per chunk and O(n²) over a message; chat replies are
/// short enough that this is cheaper than tracking incremental state.
///
/// ```
/// use chatmark_engine::StreamRenderer;
///
/// let mut stream = StreamRenderer::default();
/// stream.push_delta("# Hel");
/// let html = stream.push_delta("lo\n- item");
/// assert!(html.starts_with("<h1>Hello</h1>"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct StreamRenderer {
    options: RenderOptions,
    decoder: Utf8ChunkDecoder,
    buffer: String,
    html: String,
    chunks: usize,
}

impl StreamRenderer {
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Appends decoded text and returns the re-rendered HTML.
    pub fn push_delta(&mut self, delta: &str) -> &str {
        self.buffer.push_str(delta);
        self.chunks += 1;
        self.rerender();
        &self.html
    }

    /// Appends a raw network chunk and returns the re-rendered HTML.
    pub fn push_bytes(&mut self, bytes: &[u8]) -> &str {
        let text = self.decoder.decode(bytes);
        self.push_delta(&text)
    }

    /// Flushes the decoder and returns the final HTML.
    pub fn finish(&mut self) -> &str {
        let tail = self.decoder.finish();
        if !tail.is_empty() {
            self.buffer.push_str(&tail);
            self.rerender();
        }
        log::debug!(
            "stream finished after {} chunks, {} bytes of text",
            self.chunks,
            self.buffer.len()
        );
        &self.html
    }

    /// The accumulated reply text.
    pub fn text(&self) -> &str {
        &self.buffer
    }

    /// HTML from the most recent render.
    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn chunks(&self) -> usize {
        self.chunks
    }

    fn rerender(&mut self) {
        self.html = render_markdown_with(&self.buffer, &self.options);
        log::trace!(
            "chunk {}: rendered {} bytes to {} bytes of html",
            self.chunks,
            self.buffer.len(),
            self.html.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_markdown;
    use pretty_assertions::assert_eq;

    #[test]
    fn split_multibyte_character_decodes_once() {
        let bytes = "héllo ✓".as_bytes();
        // 'é' is two bytes starting at index 1; split inside it.
        let mut decoder = Utf8ChunkDecoder::new();
        let first = decoder.decode(&bytes[..2]);
        assert_eq!(first, "h");
        assert!(decoder.has_pending());
        let second = decoder.decode(&bytes[2..]);
        assert_eq!(second, "éllo ✓");
        assert!(!decoder.has_pending());
        assert_eq!(decoder.finish(), "");
    }

    #[test]
    fn three_byte_character_split_across_three_chunks() {
        let check = "✓".as_bytes();
        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.decode(&check[..1]), "");
        assert_eq!(decoder.decode(&check[1..2]), "");
        assert_eq!(decoder.decode(&check[2..]), "✓");
    }

    #[test]
    fn invalid_bytes_become_replacement_characters() {
        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.decode(b"a\xffb"), "a\u{fffd}b");
    }

    #[test]
    fn truncated_tail_is_flushed_on_finish() {
        let mut decoder = Utf8ChunkDecoder::new();
        assert_eq!(decoder.decode(&"é".as_bytes()[..1]), "");
        assert_eq!(decoder.finish(), "\u{fffd}");
        assert!(!decoder.has_pending());
    }

    #[test]
    fn each_chunk_renders_full_buffer() {
        let mut stream = StreamRenderer::default();
        stream.push_delta("Hello ");
        let html = stream.push_delta("**world**").to_string();
        assert_eq!(html, render_markdown("Hello **world**"));
        assert_eq!(stream.text(), "Hello **world**");
        assert_eq!(stream.chunks(), 2);
    }

    #[test]
    fn open_fence_renders_nothing_until_closed() {
        let mut stream = StreamRenderer::default();
        let before = stream.push_delta("Intro\n```sh\necho hi\n").to_string();
        assert_eq!(before, "<p class=\"chat-paragraph\">Intro</p>");
        let after = stream.push_delta("```").to_string();
        assert!(after.starts_with(&before));
        assert!(after.contains("echo hi"));
    }

    #[test]
    fn bytes_and_text_paths_agree() {
        let reply = "- ünïcode ✓\n- done";
        let mut by_bytes = StreamRenderer::default();
        for chunk in reply.as_bytes().chunks(3) {
            by_bytes.push_bytes(chunk);
        }
        by_bytes.finish();
        assert_eq!(by_bytes.text(), reply);
        assert_eq!(by_bytes.html(), render_markdown(reply));
    }
}
