//! Extraction of the sentinel-delimited region of a document.
//!
//! Only the text between `%pt_begin` and `%pt_end` is converted; the rest of
//! the LaTeX source (preamble, signature, letterhead) is ignored.

use crate::error::ExtractionError;

/// Default marker opening the region to convert.
pub const DEFAULT_BEGIN_MARKER: &str = "%pt_begin";

/// Default marker closing the region to convert.
pub const DEFAULT_END_MARKER: &str = "%pt_end";

/// Pair of sentinel markers delimiting the region to convert.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegionMarkers {
    begin: String,
    end: String,
}

impl Default for RegionMarkers {
    fn default() -> Self {
        Self::new(DEFAULT_BEGIN_MARKER, DEFAULT_END_MARKER)
    }
}

impl RegionMarkers {
    /// Create a marker pair.
    pub fn new(begin: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            begin: begin.into(),
            end: end.into(),
        }
    }

    /// The opening marker.
    pub fn begin(&self) -> &str {
        &self.begin
    }

    /// The closing marker.
    pub fn end(&self) -> &str {
        &self.end
    }

    /// Return the text strictly between the markers.
    ///
    /// Each marker must occur exactly once and the begin marker must come
    /// first. A single line break directly after the begin marker is not
    /// part of the region.
    pub fn extract<'a>(&self, document: &'a str) -> Result<&'a str, ExtractionError> {
        let start = locate_unique(document, &self.begin)? + self.begin.len();
        let end = locate_unique(document, &self.end)?;

        if end < start {
            return Err(ExtractionError::MarkersOutOfOrder);
        }

        let region = &document[start..end];
        let region = region
            .strip_prefix("\r\n")
            .or_else(|| region.strip_prefix('\n'))
            .unwrap_or(region);

        log::debug!("Extracted region of {} bytes", region.len());
        Ok(region)
    }
}

/// Byte offset of the only occurrence of `marker` in `document`.
fn locate_unique(document: &str, marker: &str) -> Result<usize, ExtractionError> {
    let positions: Vec<usize> = document.match_indices(marker).map(|(i, _)| i).collect();

    match positions.as_slice() {
        [] => Err(ExtractionError::MissingMarker(marker.to_string())),
        [position] => Ok(*position),
        _ => Err(ExtractionError::DuplicateMarker {
            marker: marker.to_string(),
            count: positions.len(),
        }),
    }
}
