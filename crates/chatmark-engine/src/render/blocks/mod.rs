//! # Block Rendering
//!
//! Two-phase, line-at-a-time rendering.
//!
//! ## Phases
//!
//! 1. **Line Classification** (`classify`): each line becomes a `LineClass`
//!    from local facts only (fence, list marker, heading, rule, text, blank)
//!
//! 2. **HTML Construction** (`builder`): an `HtmlBuilder` keeps a stack of
//!    open frames and appends HTML as frames open and close
//!
//! ## Modules
//!
//! - **`types`**: `Frame`, the tagged stack entry (`CodeBlock` or `List`)
//! - **`kinds`**: block-specific types owning their delimiters (CodeFence, ListMarker, Heading, ThematicBreak)
//! - **`classify`**: `MarkdownLineClassifier` produces a `LineClass` per line
//! - **`frames`**: `FrameStack`, the explicit stack of open frames
//! - **`builder`**: `HtmlBuilder` state machine
//!
//! ## Key Invariants
//!
//! - List frames are strictly increasing in indent, one per indent level
//! - A code block is a raw zone and is never nested inside a list
//! - A fence left open at end of input produces no output

pub mod builder;
pub mod classify;
pub mod frames;
pub mod kinds;
pub mod types;

pub use builder::HtmlBuilder;
pub use classify::{LineClass, MarkdownLineClassifier};
pub use frames::FrameStack;
pub use types::Frame;
