//! Removal of `\begin{name} ... \end{name}` wrappers.
//!
//! Wrapper content is kept verbatim. Passes run until nothing changes, so
//! nested wrappers of any depth are removed completely.

use std::ops::Range;

const BEGIN_PREFIX: &str = "\\begin{";

/// A matched environment wrapper.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Environment<'a> {
    name: &'a str,
    content: &'a str,
    span: Range<usize>,
}

/// Strip every environment wrapper from `text`, keeping its content.
///
/// Wrappers whose closing name never appears are left untouched.
pub fn strip_environments(text: &str) -> String {
    let mut current = text.to_string();
    let mut passes = 0;

    loop {
        let (next, removed) = strip_pass(&current);
        if removed == 0 {
            break;
        }
        passes += 1;
        log::debug!("Environment pass {} removed {} wrappers", passes, removed);
        current = next;
    }

    current
}

/// One left-to-right pass over non-overlapping wrappers.
fn strip_pass(text: &str) -> (String, usize) {
    let mut output = String::with_capacity(text.len());
    let mut copied = 0;
    let mut search = 0;
    let mut removed = 0;

    while let Some(offset) = text[search..].find(BEGIN_PREFIX) {
        let start = search + offset;
        match match_environment(text, start) {
            Some(env) => {
                log::trace!("Removing environment {:?}", env.name);
                output.push_str(&text[copied..env.span.start]);
                output.push_str(env.content);
                copied = env.span.end;
                search = env.span.end;
                removed += 1;
            }
            None => search = start + BEGIN_PREFIX.len(),
        }
    }

    output.push_str(&text[copied..]);
    (output, removed)
}

/// Match a wrapper whose `\begin{` starts at `start`.
///
/// The name may not span lines. Shorter names are tried first, and the
/// content runs to the first matching `\end{name}` after at least one
/// character.
fn match_environment(text: &str, start: usize) -> Option<Environment<'_>> {
    let name_start = start + BEGIN_PREFIX.len();
    let line_end = text[name_start..]
        .find('\n')
        .map_or(text.len(), |i| name_start + i);

    text[name_start..line_end]
        .match_indices('}')
        .find_map(|(offset, _)| {
            let name_end = name_start + offset;
            let name = &text[name_start..name_end];
            let content_start = name_end + 1;
            let first_char = text[content_start..].chars().next()?;
            let closing = format!("\\end{{{}}}", name);
            let content_end = content_start
                + first_char.len_utf8()
                + text[content_start + first_char.len_utf8()..].find(&closing)?;

            Some(Environment {
                name,
                content: &text[content_start..content_end],
                span: start..content_end + closing.len(),
            })
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_single_environment() {
        assert_eq!(
            strip_environments("a \\begin{center}middle\\end{center} b"),
            "a middle b"
        );
    }

    #[test]
    fn test_strip_keeps_multiline_content() {
        let text = "\\begin{itemize}\n\\item one\n\\item two\n\\end{itemize}";
        assert_eq!(strip_environments(text), "\n\\item one\n\\item two\n");
    }

    #[test]
    fn test_strip_nested_same_name() {
        let text = "\\begin{a}\\begin{a}\\begin{a}core\\end{a}\\end{a}\\end{a}";
        assert_eq!(strip_environments(text), "core");
    }

    #[test]
    fn test_strip_nested_different_names() {
        let text = "\\begin{letter}{Recipient}\n\\begin{itemize}\\item x\\end{itemize}\n\\end{letter}";
        assert_eq!(strip_environments(text), "{Recipient}\n\\item x\n");
    }

    #[test]
    fn test_strip_sequential_environments() {
        let text = "\\begin{a}1\\end{a} and \\begin{b}2\\end{b}";
        assert_eq!(strip_environments(text), "1 and 2");
    }

    #[test]
    fn test_mismatched_names_left_untouched() {
        let text = "\\begin{a}content\\end{b}";
        assert_eq!(strip_environments(text), text);
    }

    #[test]
    fn test_empty_content_not_matched() {
        let text = "\\begin{a}\\end{a}";
        assert_eq!(strip_environments(text), text);
    }

    #[test]
    fn test_idempotent_on_clean_text() {
        let text = "Dear hiring manager,\n\nplain text only.";
        let once = strip_environments(text);
        assert_eq!(once, text);
        assert_eq!(strip_environments(&once), once);
    }

    #[test]
    fn test_idempotent_after_stripping() {
        let once = strip_environments("\\begin{a}x\\begin{b}y\\end{b}\\end{a}");
        assert_eq!(strip_environments(&once), once);
    }

    #[test]
    fn test_name_does_not_span_lines() {
        let text = "\\begin{a\n}x\\end{a\n}";
        assert_eq!(strip_environments(text), text);
    }

    #[test]
    fn test_match_environment_reports_span() {
        let text = "xx\\begin{q}hi\\end{q}yy";
        let env = match_environment(text, 2).unwrap();
        assert_eq!(env.name, "q");
        assert_eq!(env.content, "hi");
        assert_eq!(&text[env.span], "\\begin{q}hi\\end{q}");
    }
}
