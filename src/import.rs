//! The import pipeline: tabular source to per-locale resource trees.
//!
//! A single synchronous pass: the sheet is traversed row-major, every
//! non-blank cell goes through [`normalize`], and the result accumulates
//! into one [`ResourceTree`] per locale column. Any failure aborts the
//! whole import; there is no partial acceptance of a malformed row.

use std::path::Path;

use tracing::{debug, info};
use unic_langid::LanguageIdentifier;

use crate::error::{Error, Result};
use crate::formats::{Sheet, SourceFormat};
use crate::normalize::normalize;
use crate::types::ResourceTree;

/// Reads the tabular source at `path` and builds one [`ResourceTree`] per
/// locale column, marking the tree matching `default_locale` as default.
///
/// Fails with [`Error::NotFound`] when the path is blank or no file exists
/// there, and with [`Error::UnsupportedFormat`] for unrecognized source
/// extensions (notably `.xlsx`).
pub fn import<P: AsRef<Path>>(path: P, default_locale: &str) -> Result<Vec<ResourceTree>> {
    let path = path.as_ref();
    if path.as_os_str().is_empty() || !path.is_file() {
        return Err(Error::NotFound(path.to_path_buf()));
    }
    let format = SourceFormat::from_path(path)?;
    info!(source = %path.display(), %format, "importing i18n resources");

    let sheet = Sheet::read_from(path, format)?;
    import_sheet(&sheet, default_locale)
}

/// Builds resource trees from already-loaded sheet data.
///
/// The first row is the header: column 0 is the key column, every
/// following non-blank cell names a locale. Blank value cells are skipped
/// (a locale may lack a translation for a key), as are fully blank rows.
pub fn import_sheet(sheet: &Sheet, default_locale: &str) -> Result<Vec<ResourceTree>> {
    let header = sheet
        .rows
        .first()
        .ok_or_else(|| Error::InvalidResource("source sheet has no header row".to_string()))?;
    let locales = parse_header(header)?;

    let mut trees: Vec<ResourceTree> = locales
        .iter()
        .map(|(_, locale)| ResourceTree::new(locale.clone(), locale == default_locale))
        .collect();

    for (row_index, row) in sheet.rows.iter().enumerate().skip(1) {
        if row.iter().all(|cell| cell.trim().is_empty()) {
            continue;
        }
        let key = row.first().map(String::as_str).unwrap_or_default();

        for (tree, (column, locale)) in trees.iter_mut().zip(&locales) {
            let Some(cell) = row.get(*column) else {
                continue;
            };
            if cell.trim().is_empty() {
                continue;
            }
            let (clean_key, text) = normalize(key, cell).map_err(|err| match err {
                Error::Validation(message) => Error::Validation(format!(
                    "row {}, locale '{}': {}",
                    row_index + 1,
                    locale,
                    message
                )),
                other => other,
            })?;
            tree.add_entry(&clean_key, text);
        }
    }

    debug!(locales = trees.len(), "import pass complete");
    Ok(trees)
}

/// Extracts `(column index, locale)` pairs from the header row.
///
/// Column 0 is the key column and blank header cells are ignored. Locale
/// cells must parse as language identifiers and must be unique.
fn parse_header(header: &[String]) -> Result<Vec<(usize, String)>> {
    let mut locales: Vec<(usize, String)> = Vec::new();
    for (column, cell) in header.iter().enumerate().skip(1) {
        let locale = cell.trim();
        if locale.is_empty() {
            continue;
        }
        if locale.parse::<LanguageIdentifier>().is_err() {
            return Err(Error::validation(format!(
                "invalid locale column '{locale}'"
            )));
        }
        if locales.iter().any(|(_, seen)| seen == locale) {
            return Err(Error::validation(format!(
                "duplicate locale column '{locale}'"
            )));
        }
        locales.push((column, locale.to_string()));
    }
    if locales.is_empty() {
        return Err(Error::InvalidResource(
            "source sheet has no locale columns".to_string(),
        ));
    }
    Ok(locales)
}
