//! Internationalization (i18n) module for multi-language support.
//!
//! # Architecture
//!
//! - `registry`: Single source of truth for all supported languages and their metadata
//! - `language`: Type-safe Language type validated against the registry
//! - `resolver`: `TextResolver` trait and the JSON-backed `LocaleCatalog`
//! - `validator`: Locale completeness checks run at startup
//! - `metrics`: Lookup and missing-key counters
//!
//! # Example
//!
//! ```rust,ignore
//! use pastamore_site::i18n::{Language, LocaleCatalog, TextResolver};
//!
//! let locales = LocaleCatalog::embedded()?;
//! let italian = Language::from_code("it")?;
//! assert_eq!(locales.resolve("nav.about", italian), "Chi siamo");
//! ```

mod language;
mod metrics;
mod registry;
mod resolver;
mod validator;

pub use language::Language;
pub use metrics::{MetricsReport, ResolverMetrics};
pub use registry::{LanguageConfig, LanguageRegistry};
pub use resolver::{LocaleCatalog, TextResolver};
pub use validator::{LocaleValidator, ValidationReport};

/// Keys rendered by the page chrome, independent of the content file.
pub const PAGE_KEYS: &[&str] = &[
    "nav.about",
    "nav.locations",
    "nav.menu",
    "nav.toggle",
    "nav.language",
    "hero.title",
    "hero.subtitle",
    "hero.cta",
    "hero.image_alt",
    "about.title",
    "about.desc",
    "about.story_p1",
    "about.story_p2",
    "locations.title",
    "locations.directions",
    "menu.title",
    "menu.empty",
    "reviews.title",
    "reviews.via",
    "footer.copyright",
    "book.thefork",
    "book.phone",
    "book.toggle",
];
