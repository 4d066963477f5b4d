//! Core data model: per-locale Android string resource trees.
//! The importer decodes spreadsheets into these; the serializer in
//! [`crate::formats::android_strings`] renders them to `strings.xml`.

use crate::normalize::QUANTITY_SEPARATOR;

/// A resolved key/text pair for a plain `<string>` resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationEntry {
    /// Resource name: the spreadsheet key, trimmed and validated.
    pub name: String,

    /// Normalized translation text.
    pub text: String,
}

/// One quantity-tagged variant inside a plural group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralItem {
    /// CLDR-style plural category tag ("one", "few", "many", "other", ...).
    pub quantity: String,

    pub text: String,
}

/// A named `<plurals>` group holding all quantity variants of one concept.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluralGroup {
    /// The key portion before the quantity separator.
    pub name: String,

    /// Variants in insertion order. Duplicate quantities are kept as-is.
    pub items: Vec<PluralItem>,
}

/// All string resources for a single locale.
///
/// Corresponds to one `values[-<locale>]/strings.xml` file. Entry order is
/// preserved everywhere so that repeated imports produce identical output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceTree {
    /// The language code (e.g. "en", "fr").
    pub locale: String,

    /// True for the one locale whose output directory has no suffix.
    pub is_default_locale: bool,

    /// Plain entries in insertion order.
    pub strings: Vec<TranslationEntry>,

    /// Plural groups in first-seen order.
    pub plurals: Vec<PluralGroup>,
}

impl ResourceTree {
    /// Creates an empty tree for one locale.
    pub fn new(locale: impl Into<String>, is_default_locale: bool) -> Self {
        ResourceTree {
            locale: locale.into(),
            is_default_locale,
            strings: Vec::new(),
            plurals: Vec::new(),
        }
    }

    /// Routes a normalized (key, text) pair into the tree.
    ///
    /// A key containing the quantity separator is split on its first
    /// occurrence into (group name, quantity) and appended to the matching
    /// plural group, creating the group the first time its name is seen.
    /// Any other key becomes a plain [`TranslationEntry`].
    ///
    /// This performs no validation: callers are expected to pass output of
    /// [`crate::normalize::normalize`].
    pub fn add_entry(&mut self, key: &str, text: impl Into<String>) {
        let text = text.into();
        match key.split_once(QUANTITY_SEPARATOR) {
            Some((name, quantity)) => {
                let item = PluralItem {
                    quantity: quantity.to_string(),
                    text,
                };
                match self.plurals.iter_mut().find(|group| group.name == name) {
                    Some(group) => group.items.push(item),
                    None => self.plurals.push(PluralGroup {
                        name: name.to_string(),
                        items: vec![item],
                    }),
                }
            }
            None => self.strings.push(TranslationEntry {
                name: key.to_string(),
                text,
            }),
        }
    }

    /// Finds a plain entry by name, if present.
    pub fn find_string(&self, name: &str) -> Option<&TranslationEntry> {
        self.strings.iter().find(|entry| entry.name == name)
    }

    /// Finds a plural group by name, if present.
    pub fn find_plural(&self, name: &str) -> Option<&PluralGroup> {
        self.plurals.iter().find(|group| group.name == name)
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty() && self.plurals.is_empty()
    }

    /// Number of entries, counting each plural variant once.
    pub fn len(&self) -> usize {
        self.strings.len()
            + self
                .plurals
                .iter()
                .map(|group| group.items.len())
                .sum::<usize>()
    }
}
