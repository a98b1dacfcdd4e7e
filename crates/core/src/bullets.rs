//! Plaintext bullets for list items.

/// List item marker, including its single trailing space.
pub const ITEM_MARKER: &str = "\\item ";

/// Formatter turning `\item ` markers into bulleted lines.
#[derive(Debug, Clone)]
pub struct BulletFormatter {
    /// Glyph placed at the start of each bulleted line.
    glyph: String,
}

impl Default for BulletFormatter {
    fn default() -> Self {
        Self {
            glyph: "*".to_string(),
        }
    }
}

impl BulletFormatter {
    /// Create a formatter using `*` bullets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a custom bullet glyph.
    pub fn with_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.glyph = glyph.into();
        self
    }

    /// The bullet glyph in use.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Put every list item on its own bulleted line.
    ///
    /// This is a literal replacement: `\item` without exactly one following
    /// space character is left alone.
    pub fn format(&self, text: &str) -> String {
        text.replace(ITEM_MARKER, &format!("\n{} ", self.glyph))
    }

    /// Number of list items [`format`](Self::format) will replace.
    pub fn count_items(&self, text: &str) -> usize {
        text.matches(ITEM_MARKER).count()
    }
}
