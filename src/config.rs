use crate::i18n::Language;
use anyhow::{Context, Result};
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub host: String,
    pub port: u16,

    // Content
    pub content_file: Option<PathBuf>,
    pub locales_dir: Option<PathBuf>,
    pub static_dir: String,

    // Localization
    pub default_language: Language,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let default_language = match std::env::var("DEFAULT_LANGUAGE") {
            Ok(code) => Language::from_code(&code).context("Invalid DEFAULT_LANGUAGE")?,
            Err(_) => Language::canonical(),
        };

        Ok(Self {
            // Server
            host: std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),

            // Content (embedded defaults when unset)
            content_file: std::env::var("CONTENT_FILE").ok().map(PathBuf::from),
            locales_dir: std::env::var("LOCALES_DIR").ok().map(PathBuf::from),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "static".to_string()),

            default_language,
        })
    }
}
