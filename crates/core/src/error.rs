//! Error types for letter plaintext conversion.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting a letter.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or read the input file.
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    /// The region to convert could not be located.
    #[error("Region extraction error: {0}")]
    Extraction(#[from] ExtractionError),
}

/// Reasons the sentinel-delimited region could not be extracted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractionError {
    /// A sentinel marker does not appear in the document.
    #[error("marker {0:?} not found")]
    MissingMarker(String),

    /// A sentinel marker appears more than once.
    #[error("marker {marker:?} appears {count} times, expected exactly once")]
    DuplicateMarker { marker: String, count: usize },

    /// The end marker comes before the begin marker.
    #[error("end marker precedes begin marker")]
    MarkersOutOfOrder,
}
