/// A reference to a single line of the input buffer.
#[derive(Debug, Clone, Copy)]
pub struct LineRef<'a> {
    /// Zero-based line number, used for trace output.
    pub number: usize,
    /// The line text without its terminating `\n`.
    pub text: &'a str,
    /// Number of leading whitespace characters (tabs count as one).
    pub indent: usize,
}

impl<'a> LineRef<'a> {
    /// The line with surrounding whitespace removed.
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

/// Returns an iterator over the `\n`-delimited lines of `text`.
///
/// Mirrors `str::split('\n')`: a trailing newline yields a final empty line,
/// and `\r` is left on the line for the classifier to trim.
pub fn lines_with_indent(text: &str) -> impl Iterator<Item = LineRef<'_>> {
    text.split('\n').enumerate().map(|(number, line)| LineRef {
        number,
        text: line,
        indent: leading_whitespace(line),
    })
}

fn leading_whitespace(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_spaces_and_tabs_as_indent() {
        let lines: Vec<_> = lines_with_indent("a\n  b\n\t- c").collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].indent, 0);
        assert_eq!(lines[1].indent, 2);
        assert_eq!(lines[2].indent, 1);
        assert_eq!(lines[2].trimmed(), "- c");
    }

    #[test]
    fn trailing_newline_yields_empty_last_line() {
        let lines: Vec<_> = lines_with_indent("one\n").collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].text, "");
        assert_eq!(lines[1].number, 1);
    }

    #[test]
    fn whitespace_only_line_is_all_indent() {
        let line = lines_with_indent("   ").next().unwrap();
        assert_eq!(line.indent, 3);
        assert!(line.trimmed().is_empty());
    }
}
