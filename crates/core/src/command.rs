//! Removal of LaTeX command wrappers such as `\emph{...}`.

use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Command whose argument is kept for the reflow stage.
pub const VSPACE_COMMAND: &str = "vspace";

/// Small caps with a single word argument.
static SMALLCAPS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\textsc\{(\w+)\}").unwrap());

/// Any alphabetic command, optionally starred, with one brace-delimited argument.
static COMMAND_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\\([A-Za-z]+)(\*?)\{([^}]*)\}").unwrap());

/// Replace commands with their arguments.
///
/// `\textsc{word}` becomes `WORD`. Every other `\name{arg}` or `\name*{arg}`
/// becomes `arg`, except `\vspace{...}` and `\vspace*{...}` which are left
/// for [`crate::reflow`]. Nested braces are not balanced: the argument ends
/// at the first `}`.
pub fn strip_commands(text: &str) -> String {
    let upper = SMALLCAPS_REGEX.replace_all(text, |caps: &Captures| caps[1].to_uppercase());

    COMMAND_REGEX
        .replace_all(&upper, |caps: &Captures| {
            if &caps[1] == VSPACE_COMMAND {
                caps[0].to_string()
            } else {
                log::trace!("Stripping \\{}{}", &caps[1], &caps[2]);
                caps[3].to_string()
            }
        })
        .into_owned()
}
