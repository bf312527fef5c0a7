//! Error types for the chapter splitter.
//!
//! Numbering metadata problems are contained where the numbering table is
//! built; everything that reaches a caller through [`Result`] aborts the
//! split.

use thiserror::Error;

/// Main error type for the splitter library.
#[derive(Debug, Error)]
pub enum SplitterError {
    /// Numbering metadata is absent or malformed.
    #[error("Numbering definitions could not be parsed: {0}")]
    Structure(String),

    /// A paragraph references a numbering definition that does not exist.
    #[error("No numbering definition for list {list_id} at level {level}")]
    NumberingLookup { list_id: u32, level: u32 },

    /// A numeral formatter received a value outside its supported range.
    #[error("Value {value} is out of range for numbering format '{format}'")]
    NumeralRange { format: &'static str, value: u32 },

    /// The input is not a usable Word document.
    #[error("Invalid DOCX package: {0}")]
    InvalidDocx(String),

    /// A required part is missing from the package.
    #[error("Missing required part: {0}")]
    MissingPart(String),

    /// XML parsing failed.
    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    /// Reading or writing the zip container failed.
    #[error("ZIP archive error: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML serialization error.
    #[error("YAML serialization failed: {0}")]
    ManifestSerialization(#[from] serde_yaml_ng::Error),
}

/// Result type alias for splitter operations.
pub type Result<T> = std::result::Result<T, SplitterError>;
