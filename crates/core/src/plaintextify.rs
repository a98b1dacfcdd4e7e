//! The letter conversion pipeline.
//!
//! extract region → strip environments → strip commands → reflow → bullets

use crate::bullets::BulletFormatter;
use crate::command::strip_commands;
use crate::environment::strip_environments;
use crate::error::Result;
use crate::reflow::reflow_whitespace;
use crate::region::RegionMarkers;
use crate::types::Plaintext;
use std::path::Path;

/// Converts the marked region of a LaTeX letter into pasteable plaintext.
#[derive(Debug, Clone, Default)]
pub struct LetterPlaintextifier {
    markers: RegionMarkers,
    bullets: BulletFormatter,
}

impl LetterPlaintextifier {
    /// Create a converter with the default `%pt_begin`/`%pt_end` markers
    /// and `*` bullets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use custom sentinel markers.
    pub fn with_markers(mut self, markers: RegionMarkers) -> Self {
        self.markers = markers;
        self
    }

    /// Use a custom bullet glyph.
    pub fn with_bullet_glyph(mut self, glyph: impl Into<String>) -> Self {
        self.bullets = self.bullets.with_glyph(glyph);
        self
    }

    /// The sentinel markers in use.
    pub fn markers(&self) -> &RegionMarkers {
        &self.markers
    }

    /// The bullet glyph in use.
    pub fn bullet_glyph(&self) -> &str {
        self.bullets.glyph()
    }

    /// Convert a whole document.
    ///
    /// Fails before any transform runs if the marked region cannot be
    /// extracted.
    pub fn plaintextify(&self, document: &str) -> Result<String> {
        self.convert(document).map(|plaintext| plaintext.text)
    }

    /// Convert a whole document, also counting the list items formatted.
    pub fn convert(&self, document: &str) -> Result<Plaintext> {
        let document = document.replace("\r\n", "\n");
        let body = self.markers.extract(&document)?;

        let body = strip_environments(body);
        log::debug!("Environments stripped ({} bytes)", body.len());

        let body = strip_commands(&body);
        log::debug!("Commands stripped ({} bytes)", body.len());

        let body = reflow_whitespace(&body);
        log::debug!("Whitespace reflowed ({} bytes)", body.len());

        Ok(Plaintext {
            bullets: self.bullets.count_items(&body),
            text: self.bullets.format(&body),
        })
    }

    /// Read and convert a document from disk.
    pub fn plaintextify_file(&self, path: &Path) -> Result<String> {
        self.convert_file(path).map(|plaintext| plaintext.text)
    }

    /// Read and convert a document from disk, also counting list items.
    pub fn convert_file(&self, path: &Path) -> Result<Plaintext> {
        log::debug!("Reading {}", path.display());
        let document = std::fs::read_to_string(path)?;
        self.convert(&document)
    }
}
