#![forbid(unsafe_code)]
//! Android i18n resource import/export toolkit.
//!
//! Converts translator-supplied spreadsheets (legacy `.xls` workbooks or
//! CSV files) into per-locale Android `values[-<locale>]/strings.xml`
//! resource files, and exports those resources back into spreadsheet form.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use android_i18n::{import, write_resources};
//!
//! // One tree per locale column; "en" goes to the unsuffixed values/ dir.
//! let trees = import("i18n.xls", "en")?;
//! write_resources(&trees, Path::new("my-app"))?;
//! # Ok::<(), android_i18n::Error>(())
//! ```
//!
//! # Pipeline
//!
//! - Keys are trimmed and validated against a forbidden character set.
//! - Translation text gets its quotes escaped (`l'avion` -> `l\'avion`)
//!   and `#` markers rewritten to format specifiers (`%s`, `%1$s`, ...).
//! - Keys like `apples:other` group into `<plurals>` elements by base name.
//! - Each locale serializes to an XML-declared, 4-space-indented
//!   `strings.xml`.
//!
//! The whole import is a single synchronous pass and fails as a unit: a
//! malformed row aborts it rather than producing a partial resource set.

pub mod error;
pub mod export;
pub mod formats;
pub mod import;
pub mod normalize;
pub mod output;
pub mod traits;
pub mod types;

// Re-export most used items for easy consumption
pub use crate::{
    error::{Error, Result},
    formats::SourceFormat,
    import::import,
    output::write_resources,
    types::{PluralGroup, PluralItem, ResourceTree, TranslationEntry},
};
