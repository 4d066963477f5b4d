//! All error types for the android-i18n crate.
//!
//! These are returned from all fallible operations (spreadsheet reading,
//! key/value normalization, resource serialization, filesystem output).

use std::path::PathBuf;

use thiserror::Error;

/// Convenient alias for fallible results returned throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// Malformed translation key, or an empty key/translation value.
    #[error("validation error: {0}")]
    Validation(String),

    /// Source path missing, blank, or unresolvable.
    #[error("source file not found: {0}")]
    NotFound(PathBuf),

    /// Recognized-but-unsupported source container format.
    #[error("unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Malformed resource or sheet content.
    #[error("invalid resource: {0}")]
    InvalidResource(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Errors bubbled up from the legacy workbook reader.
    #[error("XLS read error: {0}")]
    Xls(#[from] calamine::XlsError),
}

impl Error {
    /// Creates a new validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }
}
