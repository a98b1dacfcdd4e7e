//! Conversion of LaTeX letters into plaintext for pasting into web forms.
//!
//! Only the region between two sentinel comments is converted. The region
//! goes through environment stripping, command stripping, whitespace reflow
//! and bullet formatting, in that order.

pub mod bullets;
pub mod command;
pub mod environment;
pub mod error;
pub mod plaintextify;
pub mod reflow;
pub mod region;
pub mod types;

pub use bullets::BulletFormatter;
pub use command::strip_commands;
pub use environment::strip_environments;
pub use error::{Error, ExtractionError, Result};
pub use plaintextify::LetterPlaintextifier;
pub use reflow::reflow_whitespace;
pub use region::RegionMarkers;
pub use types::{ConversionReport, Plaintext};
