//! Localized text resolution.
//!
//! Locale files are nested JSON objects (`locales/<code>.json`). They are
//! flattened once at load into dotted keys (`{"nav": {"about": ".."}}`
//! becomes `nav.about`) so every lookup is a single map access.

use crate::error::ContentError;
use crate::i18n::{Language, ResolverMetrics};
use serde_json::Value;
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Mutex;
use tracing::{debug, warn};

/// Maps a text key plus a language to a display string.
pub trait TextResolver {
    /// Resolve `key` for `language`.
    ///
    /// Never fails: a missing key resolves to the key itself so the gap is
    /// visible on the page.
    fn resolve<'a>(&'a self, key: &'a str, language: Language) -> &'a str;
}

/// Translation strings for every loaded language.
#[derive(Debug, Default)]
pub struct LocaleCatalog {
    strings: HashMap<Language, HashMap<String, String>>,
    metrics: ResolverMetrics,
    /// Keys already warned about; later misses only log at debug
    missing: Mutex<HashSet<(Language, String)>>,
}

impl LocaleCatalog {
    /// Build a catalog from `(language, json)` pairs.
    pub fn from_json_sources(sources: &[(Language, &str)]) -> Result<Self, ContentError> {
        let mut strings = HashMap::with_capacity(sources.len());
        for (language, json) in sources {
            let value: Value = serde_json::from_str(json).map_err(|source| ContentError::Parse {
                origin: format!("locale '{}'", language.code()),
                source,
            })?;
            if !value.is_object() {
                return Err(ContentError::LocaleNotObject(language.code().to_string()));
            }

            let mut flat = HashMap::new();
            flatten("", &value, &mut flat);
            strings.insert(*language, flat);
        }

        Ok(Self {
            strings,
            metrics: ResolverMetrics::new(),
            missing: Mutex::default(),
        })
    }

    /// The locales compiled into the binary, one per enabled language.
    pub fn embedded() -> Result<Self, ContentError> {
        let sources: Vec<(Language, &str)> = Language::all_enabled()
            .into_iter()
            .map(|language| (language, language.embedded_locale()))
            .collect();
        Self::from_json_sources(&sources)
    }

    /// Load `<dir>/<code>.json` for every enabled language.
    pub fn from_dir(dir: &Path) -> Result<Self, ContentError> {
        let mut files = Vec::new();
        for language in Language::all_enabled() {
            let path = dir.join(format!("{}.json", language.code()));
            let json = std::fs::read_to_string(&path)
                .map_err(|source| ContentError::Io { path, source })?;
            files.push((language, json));
        }

        let sources: Vec<(Language, &str)> = files
            .iter()
            .map(|(language, json)| (*language, json.as_str()))
            .collect();
        Self::from_json_sources(&sources)
    }

    /// Look up a key without placeholder fallback or metrics.
    pub fn get(&self, key: &str, language: Language) -> Option<&str> {
        self.strings
            .get(&language)
            .and_then(|table| table.get(key))
            .map(String::as_str)
    }

    /// All keys defined for `language`, sorted.
    pub fn keys(&self, language: Language) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .strings
            .get(&language)
            .map(|table| table.keys().map(String::as_str).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Languages with a loaded locale.
    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.strings.keys().copied().collect();
        languages.sort_by_key(|language| language.code());
        languages
    }

    pub fn metrics(&self) -> &ResolverMetrics {
        &self.metrics
    }

    /// Keys that have resolved to a placeholder so far, sorted.
    pub fn missing_keys(&self) -> Vec<(Language, String)> {
        let mut keys: Vec<(Language, String)> = match self.missing.lock() {
            Ok(missing) => missing.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        };
        keys.sort_by(|a, b| (a.0.code(), &a.1).cmp(&(b.0.code(), &b.1)));
        keys
    }

    /// Remember a miss; true the first time this key is missed for `language`.
    fn note_missing(&self, key: &str, language: Language) -> bool {
        let mut missing = match self.missing.lock() {
            Ok(missing) => missing,
            Err(poisoned) => poisoned.into_inner(),
        };
        missing.insert((language, key.to_string()))
    }
}

impl TextResolver for LocaleCatalog {
    fn resolve<'a>(&'a self, key: &'a str, language: Language) -> &'a str {
        match self.get(key, language) {
            Some(text) => {
                self.metrics.record_hit();
                text
            }
            None => {
                self.metrics.record_miss();
                if self.note_missing(key, language) {
                    warn!("Missing translation for '{}' in '{}'", key, language);
                } else {
                    debug!("Missing translation for '{}' in '{}'", key, language);
                }
                key
            }
        }
    }
}

fn flatten(prefix: &str, value: &Value, out: &mut HashMap<String, String>) {
    let join = |segment: &str| {
        if prefix.is_empty() {
            segment.to_string()
        } else {
            format!("{}.{}", prefix, segment)
        }
    };

    match value {
        Value::Object(map) => {
            for (segment, child) in map {
                flatten(&join(segment), child, out);
            }
        }
        Value::Array(items) => {
            for (i, child) in items.iter().enumerate() {
                flatten(&join(&i.to_string()), child, out);
            }
        }
        Value::String(text) => {
            out.insert(prefix.to_string(), text.clone());
        }
        Value::Number(n) => {
            out.insert(prefix.to_string(), n.to_string());
        }
        Value::Bool(b) => {
            out.insert(prefix.to_string(), b.to_string());
        }
        Value::Null => {}
    }
}
