//! The export pipeline: per-locale `strings.xml` files back to one
//! tabular sheet for translators.
//!
//! This is the structural inverse of [`crate::import`], reusing the same
//! [`ResourceTree`] model as the interchange point. Normalized text is
//! denormalized on the way out (`%s`/`%N$s` -> `#`, `\'` -> `'`) and
//! plural variants are flattened back into `name:quantity` keys.

use std::fs;
use std::path::Path;

use tracing::{debug, info};
use unic_langid::LanguageIdentifier;

use crate::error::{Error, Result};
use crate::formats::Sheet;
use crate::normalize::{QUANTITY_SEPARATOR, denormalize_text};
use crate::traits::Parser;
use crate::types::ResourceTree;

/// Reads every `values[-<locale>]/strings.xml` under the project's res
/// directory.
///
/// The unsuffixed `values` directory is assigned `default_locale`;
/// suffixed directories whose suffix is not a locale (resource qualifiers
/// such as `values-night`) are skipped. The default tree comes first, the
/// remaining trees follow in directory-name order, so repeated exports are
/// deterministic.
pub fn export<P: AsRef<Path>>(project_dir: P, default_locale: &str) -> Result<Vec<ResourceTree>> {
    let res_dir = project_dir.as_ref().join("src").join("main").join("res");
    if !res_dir.is_dir() {
        return Err(Error::NotFound(res_dir));
    }

    let mut dir_names = Vec::new();
    for entry in fs::read_dir(&res_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        let name = entry.file_name().to_string_lossy().into_owned();
        match name.strip_prefix("values-") {
            Some(suffix) if is_locale_suffix(suffix) => dir_names.push(name),
            Some(_) => debug!(dir = %name, "skipping non-locale values directory"),
            None if name == "values" => dir_names.push(name),
            None => {}
        }
    }
    dir_names.sort();

    let mut trees = Vec::new();
    for name in dir_names {
        let file = res_dir.join(&name).join("strings.xml");
        if !file.is_file() {
            continue;
        }
        let (locale, is_default) = match name.strip_prefix("values-") {
            Some(suffix) => (suffix.to_string(), false),
            None => (default_locale.to_string(), true),
        };
        let mut tree = ResourceTree::read_from(&file)?;
        tree.locale = locale;
        tree.is_default_locale = is_default;
        debug!(locale = %tree.locale, entries = tree.len(), "read string resources");
        trees.push(tree);
    }

    if trees.is_empty() {
        return Err(Error::InvalidResource(format!(
            "no strings.xml files found under {}",
            res_dir.display()
        )));
    }
    // Stable sort: default locale first, directory order otherwise kept.
    trees.sort_by_key(|tree| !tree.is_default_locale);
    info!(locales = trees.len(), "exporting i18n resources");
    Ok(trees)
}

/// Flattens the trees into one row-major sheet: a `key` column plus one
/// column per locale. Keys appear in first-seen order across the trees;
/// locales missing a key get a blank cell.
pub fn to_sheet(trees: &[ResourceTree]) -> Sheet {
    let mut header = vec!["key".to_string()];
    header.extend(trees.iter().map(|tree| tree.locale.clone()));

    let mut keys: Vec<String> = Vec::new();
    for tree in trees {
        for entry in &tree.strings {
            if !keys.contains(&entry.name) {
                keys.push(entry.name.clone());
            }
        }
        for group in &tree.plurals {
            for item in &group.items {
                let key = format!("{}{}{}", group.name, QUANTITY_SEPARATOR, item.quantity);
                if !keys.contains(&key) {
                    keys.push(key);
                }
            }
        }
    }

    let mut rows = vec![header];
    for key in &keys {
        let mut row = vec![key.clone()];
        for tree in trees {
            row.push(
                lookup(tree, key)
                    .map(denormalize_text)
                    .unwrap_or_default(),
            );
        }
        rows.push(row);
    }
    Sheet { rows }
}

/// Android uses `values-<qualifier>` for more than locales (`values-night`,
/// `values-w820dp`, ...). Only a suffix that parses as a language identifier
/// with a two or three letter language code names a locale directory.
fn is_locale_suffix(suffix: &str) -> bool {
    suffix
        .parse::<LanguageIdentifier>()
        .is_ok_and(|id| id.language.as_str().len() <= 3)
}

fn lookup<'a>(tree: &'a ResourceTree, key: &str) -> Option<&'a str> {
    match key.split_once(QUANTITY_SEPARATOR) {
        Some((name, quantity)) => tree
            .find_plural(name)?
            .items
            .iter()
            .find(|item| item.quantity == quantity)
            .map(|item| item.text.as_str()),
        None => tree.find_string(key).map(|entry| entry.text.as_str()),
    }
}

/// Writes the export sheet as CSV, creating parent directories as needed.
pub fn write_sheet(sheet: &Sheet, output: &Path) -> Result<()> {
    if let Some(parent) = output.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let mut wtr = csv::WriterBuilder::new().from_path(output)?;
    for row in &sheet.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    info!(output = %output.display(), "wrote export sheet");
    Ok(())
}
