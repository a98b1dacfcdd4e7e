//! Domain types describing a finished conversion.

use serde::{Deserialize, Serialize};

/// Converted letter text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plaintext {
    /// The plaintext ready to paste.
    pub text: String,

    /// Number of `\item` markers turned into bullet lines.
    pub bullets: usize,
}

/// Summary of a single converted letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// Path of the source document.
    pub source: String,

    /// Path the plaintext was written to. None when printed instead.
    pub output: Option<String>,

    /// Number of characters in the converted text.
    pub characters: usize,

    /// Number of list items turned into bullet lines.
    pub bullets: usize,
}

impl ConversionReport {
    /// Build a report for a letter converted from `source`.
    pub fn new(source: impl Into<String>, plaintext: &Plaintext) -> Self {
        Self {
            source: source.into(),
            output: None,
            characters: plaintext.text.chars().count(),
            bullets: plaintext.bullets,
        }
    }

    /// Record where the plaintext was written.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }
}
