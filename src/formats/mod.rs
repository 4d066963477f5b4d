//! Supported file formats: tabular sources and the Android resource XML.

pub mod android_strings;
pub mod sheet;

use std::{
    fmt::{Display, Formatter},
    path::Path,
};

use crate::error::Error;

pub use sheet::Sheet;

/// Recognized tabular source formats for the import direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Legacy binary Excel workbook (`.xls`).
    Xls,
    /// Comma-separated values (`.csv`).
    Csv,
}

impl SourceFormat {
    /// Infers the source format from a file extension.
    ///
    /// `.xlsx` workbooks are recognized but rejected: only the legacy
    /// container is supported.
    ///
    /// # Example
    /// ```rust
    /// use android_i18n::formats::SourceFormat;
    /// assert_eq!(
    ///     SourceFormat::from_path("i18n.xls").unwrap(),
    ///     SourceFormat::Xls
    /// );
    /// assert!(SourceFormat::from_path("i18n.xlsx").is_err());
    /// ```
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, Error> {
        match path.as_ref().extension().and_then(|s| s.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("xls") => Ok(SourceFormat::Xls),
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Ok(SourceFormat::Csv),
            Some(ext) if ext.eq_ignore_ascii_case("xlsx") => Err(Error::UnsupportedFormat(
                "'.xlsx' workbooks are not supported, save the source as legacy '.xls'"
                    .to_string(),
            )),
            Some(ext) => Err(Error::UnsupportedFormat(format!(
                "unsupported source extension '{ext}'"
            ))),
            None => Err(Error::UnsupportedFormat(
                "source file has no extension".to_string(),
            )),
        }
    }
}

impl Display for SourceFormat {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceFormat::Xls => write!(f, "xls"),
            SourceFormat::Csv => write!(f, "csv"),
        }
    }
}
