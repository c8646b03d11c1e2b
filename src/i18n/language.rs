//! Language type: validated language representation.
//!
//! A `Language` can only be constructed for a code that the registry knows
//! and has enabled.

use crate::i18n::{LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "it")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };
    pub const ITALIAN: Language = Language { code: "it" };
    pub const RUSSIAN: Language = Language { code: "ru" };

    /// Parse a code from the query string or environment.
    ///
    /// Matching is exact: `"EN"` is not `"en"`.
    pub fn from_code(code: &str) -> Result<Language> {
        match LanguageRegistry::get().find(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Get the canonical language every locale is checked against.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Every enabled language, in selector order.
    pub fn all_enabled() -> Vec<Language> {
        LanguageRegistry::get()
            .enabled()
            .map(|config| Language { code: config.code })
            .collect()
    }

    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Registry entry for this language.
    ///
    /// # Panics
    /// Panics if the code is missing from the registry, which only happens
    /// when a constant above drifts from `site_languages`.
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .find(self.code)
            .expect("Language constants must exist in the registry")
    }

    pub fn name(&self) -> &'static str {
        self.config().name
    }

    pub fn native_name(&self) -> &'static str {
        self.config().native_name
    }

    pub fn is_canonical(&self) -> bool {
        self.config().is_canonical
    }

    /// Locale compiled into the binary.
    pub fn embedded_locale(&self) -> &'static str {
        self.config().embedded_locale
    }
}

impl Default for Language {
    fn default() -> Self {
        Self::canonical()
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code)
    }
}
