pub mod code_fence;
pub mod heading;
pub mod list_marker;
pub mod thematic_break;

pub use code_fence::{CodeFence, FenceSig};
pub use heading::Heading;
pub use list_marker::{ListItem, ListKind, ListMarker};
pub use thematic_break::ThematicBreak;
