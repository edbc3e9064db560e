/// ATX-style headings, levels 1 to 3 only.
pub struct Heading;

impl Heading {
    pub const PREFIXES: [(&'static str, u8); 3] = [("# ", 1), ("## ", 2), ("### ", 3)];

    /// Returns the level and the text after the marker.
    pub fn parse(trimmed: &str) -> Option<(u8, &str)> {
        Self::PREFIXES
            .iter()
            .find_map(|(prefix, level)| trimmed.strip_prefix(prefix).map(|rest| (*level, rest)))
    }
}
