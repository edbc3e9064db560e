/// A fence line seen by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FenceSig<'a> {
    /// Text after the opening marker, trimmed. Empty when no language was given.
    pub info: &'a str,
}

pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Detects a fence line. `trimmed` must already have surrounding whitespace removed.
    ///
    /// The same test opens and closes a block: any info string after the
    /// marker is ignored on a closing fence.
    pub fn sig(trimmed: &str) -> Option<FenceSig<'_>> {
        trimmed.strip_prefix(Self::BACKTICKS).map(|rest| FenceSig {
            info: rest.trim(),
        })
    }

    /// The header label shown above a closed block.
    pub fn label(info: &str, default_label: &str, uppercase: bool) -> String {
        if info.is_empty() {
            default_label.to_string()
        } else if uppercase {
            info.to_uppercase()
        } else {
            info.to_string()
        }
    }
}
