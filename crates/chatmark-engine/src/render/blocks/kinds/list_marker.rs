use std::sync::OnceLock;

use regex::Regex;

/// Whether a list is bulleted or numbered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    Unordered,
    Ordered,
}

impl ListKind {
    /// The HTML element name for a list of this kind.
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Unordered => "ul",
            ListKind::Ordered => "ol",
        }
    }
}

/// A recognised list item: its kind and the text after the marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    pub kind: ListKind,
    pub content: &'a str,
}

pub struct ListMarker;

impl ListMarker {
    /// `* item` or `- item`.
    pub const UNORDERED: &'static str = r"^(?:\*|-)\s+(.*)$";
    /// `1. item`. ASCII digits only.
    pub const ORDERED: &'static str = r"^[0-9]+\.\s+(.*)$";

    /// Matches a trimmed line against the unordered then ordered marker patterns.
    pub fn parse(trimmed: &str) -> Option<ListItem<'_>> {
        static UNORDERED: OnceLock<Regex> = OnceLock::new();
        static ORDERED: OnceLock<Regex> = OnceLock::new();

        let unordered = UNORDERED
            .get_or_init(|| Regex::new(Self::UNORDERED).expect("Invalid unordered list regex"));
        let ordered =
            ORDERED.get_or_init(|| Regex::new(Self::ORDERED).expect("Invalid ordered list regex"));

        if let Some(caps) = unordered.captures(trimmed) {
            return caps.get(1).map(|m| ListItem {
                kind: ListKind::Unordered,
                content: m.as_str(),
            });
        }
        ordered.captures(trimmed).and_then(|caps| {
            caps.get(1).map(|m| ListItem {
                kind: ListKind::Ordered,
                content: m.as_str(),
            })
        })
    }
}
