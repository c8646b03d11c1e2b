//! Locale completeness validation.
//!
//! Checks that every language carries every key the page and the content
//! need, that translations do not drift from the canonical locale, and that
//! URLs embedded in canonical strings survive translation.

use crate::i18n::{Language, LocaleCatalog};
use regex::Regex;
use std::collections::BTreeSet;
use std::sync::OnceLock;

/// Validation report containing errors and warnings about the locales.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// Keys the page will render as placeholders
    pub errors: Vec<String>,

    /// Suspicious but renderable content
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self {
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Check if the report is clean (no errors or warnings)
    pub fn is_clean(&self) -> bool {
        !self.has_errors() && !self.has_warnings()
    }
}

impl Default for ValidationReport {
    fn default() -> Self {
        Self::new()
    }
}

/// Validator for locale catalogs.
pub struct LocaleValidator;

static KEY_REGEX: OnceLock<Regex> = OnceLock::new();
static URL_REGEX: OnceLock<Regex> = OnceLock::new();

impl LocaleValidator {
    /// Validate `catalog` against the keys the site renders.
    ///
    /// # Arguments
    /// * `catalog` - The loaded locales
    /// * `required` - Keys that must exist in every enabled language
    ///
    /// # Returns
    /// A `ValidationReport`. Missing required keys and keys present in the
    /// canonical locale but absent from a translation are errors; extra
    /// keys, empty strings, malformed keys and dropped URLs are warnings.
    pub fn validate(catalog: &LocaleCatalog, required: &[String]) -> ValidationReport {
        let mut report = ValidationReport::new();
        let canonical = Language::canonical();
        let canonical_keys: BTreeSet<&str> = catalog.keys(canonical).into_iter().collect();

        for language in Language::all_enabled() {
            let keys: BTreeSet<&str> = catalog.keys(language).into_iter().collect();

            for key in required {
                if !keys.contains(key.as_str()) {
                    report
                        .errors
                        .push(format!("Missing key '{}' in '{}'", key, language));
                }
            }

            if language.is_canonical() {
                continue;
            }

            for key in canonical_keys.difference(&keys) {
                if !required.iter().any(|r| r == key) {
                    report
                        .errors
                        .push(format!("Key '{}' is not translated to '{}'", key, language));
                }
            }

            for key in keys.difference(&canonical_keys) {
                report.warnings.push(format!(
                    "Key '{}' in '{}' does not exist in '{}'",
                    key, language, canonical
                ));
            }

            for key in keys.intersection(&canonical_keys) {
                let (Some(original), Some(translated)) =
                    (catalog.get(key, canonical), catalog.get(key, language))
                else {
                    continue;
                };
                if Self::extract_urls(original) != Self::extract_urls(translated) {
                    report.warnings.push(format!(
                        "URL mismatch for '{}' in '{}'",
                        key, language
                    ));
                }
            }
        }

        for language in catalog.languages() {
            for key in catalog.keys(language) {
                if !Self::is_valid_key(key) {
                    report
                        .warnings
                        .push(format!("Malformed key '{}' in '{}'", key, language));
                }
                if catalog.get(key, language).is_some_and(|text| text.trim().is_empty()) {
                    report
                        .warnings
                        .push(format!("Empty string for '{}' in '{}'", key, language));
                }
            }
        }

        report
    }

    /// Dotted path of `[A-Za-z0-9_-]` segments
    fn is_valid_key(key: &str) -> bool {
        let regex = KEY_REGEX
            .get_or_init(|| Regex::new(r"^[A-Za-z0-9_-]+(\.[A-Za-z0-9_-]+)*$").unwrap());
        regex.is_match(key)
    }

    /// Extract all URLs from text
    fn extract_urls(text: &str) -> Vec<String> {
        let regex = URL_REGEX.get_or_init(|| Regex::new(r"https?://[^\s)\]]+").unwrap());

        regex
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}
