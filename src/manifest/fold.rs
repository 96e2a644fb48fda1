//! Fixed-width line folding for manifest text
//!
//! Manifest lines are limited to 72 columns; longer lines continue on the
//! next line behind a single leading space.

/// Maximum visible columns per manifest line
pub const MAX_LINE_WIDTH: usize = 72;

/// Folds every line longer than [`MAX_LINE_WIDTH`] into continuation lines
///
/// Trailing empty lines are dropped and every emitted line ends with `\n`.
pub fn fold_lines(text: &str) -> String {
    let mut lines: Vec<&str> = text.split('\n').collect();
    while lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }

    let mut out = String::with_capacity(text.len() + text.len() / MAX_LINE_WIDTH * 2 + 1);
    for line in lines {
        let chars: Vec<char> = line.chars().collect();
        if chars.len() <= MAX_LINE_WIDTH {
            out.push_str(line);
            out.push('\n');
            continue;
        }

        out.extend(&chars[..MAX_LINE_WIDTH]);
        out.push_str("\n ");
        let mut start = MAX_LINE_WIDTH;
        while start < chars.len() {
            // one column goes to the continuation space
            let end = (start + MAX_LINE_WIDTH - 1).min(chars.len());
            out.extend(&chars[start..end]);
            out.push('\n');
            if end != chars.len() {
                out.push(' ');
            }
            start = end;
        }
    }
    out
}

/// Joins continuation lines back onto the line they continue
pub fn unfold_lines(text: &str) -> String {
    text.replace("\r\n ", "").replace("\n ", "")
}
