pub mod models;
pub mod render;
pub mod session;
pub mod stream;

// Re-export key types for easier usage
pub use models::*;
pub use render::{RenderOptions, render_markdown, render_markdown_with};
pub use session::{ChatSession, SendControl, SendGuard};
pub use stream::{StreamRenderer, Utf8ChunkDecoder};
