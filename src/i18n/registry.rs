//! The languages the site is published in.
//!
//! Order here is the order of the language switcher. Each entry carries the
//! locale file compiled into the binary so a deployment without a
//! `LOCALES_DIR` still serves every language.

use std::sync::OnceLock;

#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 code, used in `?lang=`, `<html lang>` and locale file names
    pub code: &'static str,

    /// English name (e.g., "Italian")
    pub name: &'static str,

    /// Name shown to speakers of the language (e.g., "Italiano")
    pub native_name: &'static str,

    /// Reference locale: its key set is what other locales are checked against
    pub is_canonical: bool,

    /// Offered in the switcher and accepted from the query string
    pub enabled: bool,

    /// Contents of `locales/<code>.json` at build time
    pub embedded_locale: &'static str,
}

pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
    canonical: usize,
}

static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry::new(site_languages()))
    }

    /// Build a registry, checking that exactly one entry is canonical.
    ///
    /// # Panics
    /// Panics on zero or several canonical entries. The table is static, so
    /// this can only fire on a bad edit of `site_languages`.
    fn new(languages: Vec<LanguageConfig>) -> Self {
        let mut canonical = languages
            .iter()
            .enumerate()
            .filter(|(_, lang)| lang.is_canonical)
            .map(|(index, _)| index);

        let index = match (canonical.next(), canonical.next()) {
            (Some(index), None) => index,
            (None, _) => panic!("No canonical language found in registry"),
            (Some(_), Some(_)) => panic!("Multiple canonical languages found in registry"),
        };

        Self {
            languages,
            canonical: index,
        }
    }

    /// Look up an entry by exact code; disabled entries are returned too.
    pub fn find(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Enabled entries in switcher order.
    pub fn enabled(&self) -> impl Iterator<Item = &LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled)
    }

    pub fn canonical(&self) -> &LanguageConfig {
        &self.languages[self.canonical]
    }
}

fn site_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            native_name: "English",
            is_canonical: true,
            enabled: true,
            embedded_locale: include_str!("../../locales/en.json"),
        },
        LanguageConfig {
            code: "it",
            name: "Italian",
            native_name: "Italiano",
            is_canonical: false,
            enabled: true,
            embedded_locale: include_str!("../../locales/it.json"),
        },
        LanguageConfig {
            code: "ru",
            name: "Russian",
            native_name: "Русский",
            is_canonical: false,
            enabled: true,
            embedded_locale: include_str!("../../locales/ru.json"),
        },
    ]
}
