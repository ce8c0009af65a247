//! Utilities module for protofix.

mod paths;

pub use paths::{collect_stub_files, is_excluded, normalize_display_path, slash_path};

/// Splits `text` into lines, each keeping its `\n` or `\r\n` terminator.
///
/// Concatenating the result yields `text` again.
#[must_use]
pub fn split_lines_inclusive(text: &str) -> Vec<&str> {
    text.split_inclusive('\n').collect()
}

/// Separates a line from its terminator.
///
/// Returns `(content, terminator)` where the terminator is `""`, `"\n"` or `"\r\n"`.
#[must_use]
pub fn split_terminator(line: &str) -> (&str, &str) {
    if let Some(content) = line.strip_suffix("\r\n") {
        (content, &line[content.len()..])
    } else if let Some(content) = line.strip_suffix('\n') {
        (content, &line[content.len()..])
    } else {
        (line, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_lines_keeps_terminators() {
        let text = "a\nb\r\nc";
        let lines = split_lines_inclusive(text);
        assert_eq!(lines, vec!["a\n", "b\r\n", "c"]);
        assert_eq!(lines.concat(), text);
    }

    #[test]
    fn test_split_terminator() {
        assert_eq!(split_terminator("import x\n"), ("import x", "\n"));
        assert_eq!(split_terminator("import x\r\n"), ("import x", "\r\n"));
        assert_eq!(split_terminator("import x"), ("import x", ""));
        assert_eq!(split_terminator(""), ("", ""));
    }
}
