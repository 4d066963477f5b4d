//! Key/value normalization for translator-supplied cells.
//!
//! Keys are trimmed and checked against the forbidden character set.
//! Translation text has its single quotes escaped (`l'avion` ->
//! `l\'avion`) and its `#` placeholder markers rewritten to Android format
//! specifiers (`%s`, or `%1$s`..`%N$s` when more than one marker exists).

use lazy_static::lazy_static;
use regex::Regex;

use crate::error::{Error, Result};

/// Character splitting a plural key into (group name, quantity).
pub const QUANTITY_SEPARATOR: char = ':';

/// Marker translators use for a positional argument.
pub const ARG_PLACEHOLDER: char = '#';

/// Replacement for a single unindexed argument.
const XML_SINGLE_ARG: &str = "%s";

/// Escaped form of a single quote in `strings.xml` text.
const XML_QUOTE: &str = "\\'";

lazy_static! {
    /// Characters that may not appear anywhere in a resource key:
    /// whitespace or any of +-*/\;,'()[]{}!?=@|#~&"^%<>
    static ref KEY_ILLEGAL_CHARS: Regex =
        Regex::new(r#"[\s+\-*/\\;,'()\[\]{}!?=@|#~&"^%<>]"#).unwrap();

    /// Indexed Android format specifier, e.g. `%2$s`.
    static ref XML_INDEXED_ARG: Regex = Regex::new(r"%\d+\$s").unwrap();
}

/// Validates and transforms one raw (key, translation) cell pair.
///
/// Returns the trimmed key and the normalized text. Fails with
/// [`Error::Validation`] when either side is blank or when the trimmed key
/// contains a forbidden character. Deterministic and side-effect free.
pub fn normalize(key: &str, translation: &str) -> Result<(String, String)> {
    if key.trim().is_empty() || translation.trim().is_empty() {
        return Err(Error::validation(format!(
            "invalid translation key '{key}' or corresponding translation value '{translation}'"
        )));
    }

    let key = key.trim();
    if KEY_ILLEGAL_CHARS.is_match(key) {
        return Err(Error::validation(format!(
            "invalid translation key '{key}'"
        )));
    }

    Ok((key.to_string(), normalize_text(translation)))
}

/// Applies the text transforms in order: quote escaping, then placeholder
/// substitution.
fn normalize_text(translation: &str) -> String {
    let escaped = translation.replace('\'', XML_QUOTE);

    let marker_count = escaped.chars().filter(|&c| c == ARG_PLACEHOLDER).count();
    match marker_count {
        0 => escaped,
        1 => escaped.replace(ARG_PLACEHOLDER, XML_SINGLE_ARG),
        _ => {
            let mut out = String::with_capacity(escaped.len() + marker_count * 4);
            let mut index = 0;
            for c in escaped.chars() {
                if c == ARG_PLACEHOLDER {
                    index += 1;
                    out.push_str(&indexed_arg(index));
                } else {
                    out.push(c);
                }
            }
            out
        }
    }
}

fn indexed_arg(index: usize) -> String {
    format!("%{index}$s")
}

/// Inverse of the text transform, used when exporting `strings.xml` back
/// to spreadsheet form: format specifiers become `#` markers again and
/// escaped quotes are unescaped.
pub fn denormalize_text(text: &str) -> String {
    let marker = ARG_PLACEHOLDER.to_string();
    XML_INDEXED_ARG
        .replace_all(text, marker.as_str())
        .replace(XML_SINGLE_ARG, &marker)
        .replace(XML_QUOTE, "'")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_trimmed() {
        let (key, text) = normalize("  greeting ", "hi").unwrap();
        assert_eq!(key, "greeting");
        assert_eq!(text, "hi");
    }

    #[test]
    fn test_blank_key_or_value_rejected() {
        assert!(normalize("", "hi").is_err());
        assert!(normalize("   ", "hi").is_err());
        assert!(normalize("greeting", "").is_err());
        assert!(normalize("greeting", "  \t").is_err());
    }

    #[test]
    fn test_forbidden_characters_rejected() {
        for key in [
            "foo bar", "a,b", "a+b", "a-b", "a/b", "a\\b", "a'b", "a(b)", "a[b]", "a{b}", "a!",
            "a?", "a=b", "a@b", "a|b", "a#b", "a~b", "a&b", "a\"b", "a^b", "a%b", "a<b", "a>b",
            "a;b", "a*b",
        ] {
            let result = normalize(key, "value");
            assert!(
                matches!(result, Err(Error::Validation(_))),
                "key {key:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_quantity_separator_allowed_in_keys() {
        let (key, _) = normalize("apples:other", "apples").unwrap();
        assert_eq!(key, "apples:other");
    }

    #[test]
    fn test_single_quotes_escaped() {
        let (_, text) = normalize("plane", "l'avion").unwrap();
        assert_eq!(text, "l\\'avion");
    }

    #[test]
    fn test_single_marker_becomes_unindexed_arg() {
        let (_, text) = normalize("apples", "# apples").unwrap();
        assert_eq!(text, "%s apples");
        assert!(!text.contains(ARG_PLACEHOLDER));
    }

    #[test]
    fn test_multiple_markers_become_indexed_args() {
        let (_, text) = normalize("trip", "from # to # via #").unwrap();
        assert_eq!(text, "from %1$s to %2$s via %3$s");
    }

    #[test]
    fn test_no_marker_leaves_text_unchanged() {
        let (_, text) = normalize("greeting", "hello world").unwrap();
        assert_eq!(text, "hello world");
    }

    #[test]
    fn test_quotes_escaped_before_markers() {
        let (_, text) = normalize("mixed", "l'avion de #").unwrap();
        assert_eq!(text, "l\\'avion de %s");
    }

    #[test]
    fn test_normalization_is_deterministic() {
        let first = normalize("key", "a # b # c'd").unwrap();
        let second = normalize("key", "a # b # c'd").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_translation_whitespace_preserved() {
        let (_, text) = normalize("padded", "  two  spaces  ").unwrap();
        assert_eq!(text, "  two  spaces  ");
    }

    #[test]
    fn test_denormalize_inverts_markers_and_quotes() {
        assert_eq!(denormalize_text("%s apples"), "# apples");
        assert_eq!(denormalize_text("from %1$s to %2$s"), "from # to #");
        assert_eq!(denormalize_text("l\\'avion"), "l'avion");
    }

    #[test]
    fn test_denormalize_round_trips_normalized_text() {
        for raw in ["# apples", "from # to # via #", "l'avion de #", "plain"] {
            let (_, normalized) = normalize("key", raw).unwrap();
            assert_eq!(denormalize_text(&normalized), raw);
        }
    }
}
