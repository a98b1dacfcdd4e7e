//! Whitespace reflow from LaTeX source layout to plaintext layout.
//!
//! Source line breaks carry no meaning in LaTeX, so they are joined into
//! paragraph flow first. Explicit markup then decides where real breaks go:
//!
//! - `\newline` ends a paragraph (blank line)
//! - `\\` ends a line
//! - `\vspace{N\baselineskip}` inserts N+1 line breaks

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Line breaks produced by `\vspace{\baselineskip}` without a count.
pub const DEFAULT_SKIP_LINE_BREAKS: usize = 2;

/// Largest baseline skip count that is expanded into line breaks.
pub const MAX_SKIP_COUNT: usize = 100;

/// A source line break with any surrounding spaces.
static LINE_JOIN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" *\n *").unwrap());

static PARAGRAPH_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \n]*\\newline[ \n]*").unwrap());

static LINE_BREAK_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \n]*\\\\[ \n]*").unwrap());

/// Baseline skip with an optional ASCII repeat count.
static BASELINE_SKIP_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[ \n]*\\vspace\{([0-9]*)\\baselineskip\}[ \n]*").unwrap()
});

/// Reflow `text` into paragraph, line and spacing structure.
pub fn reflow_whitespace(text: &str) -> String {
    let joined = LINE_JOIN_REGEX.replace_all(text, " ");
    let paragraphs = PARAGRAPH_BREAK_REGEX.replace_all(&joined, "\n\n");
    let lines = LINE_BREAK_REGEX.replace_all(&paragraphs, "\n");

    BASELINE_SKIP_REGEX
        .replace_all(&lines, |caps: &Captures| match skip_line_breaks(&caps[1]) {
            Some(count) => "\n".repeat(count),
            None => {
                log::warn!("Ignoring baseline skip with unusable count {:?}", &caps[1]);
                caps[0].to_string()
            }
        })
        .into_owned()
}

/// Number of line breaks for a baseline skip count.
fn skip_line_breaks(count: &str) -> Option<usize> {
    if count.is_empty() {
        return Some(DEFAULT_SKIP_LINE_BREAKS);
    }
    match count.parse::<usize>() {
        Ok(n) if n <= MAX_SKIP_COUNT => Some(n + 1),
        _ => None,
    }
}
