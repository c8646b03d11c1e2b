//! Per-request UI state.
//!
//! Each state cell is independent and has a single setter. The page is
//! server-rendered, so a "user interaction" is a link to the same page with
//! exactly one cell changed; `PageState::href` serializes the cells into the
//! query string and `PageState::from_query` reads them back.

use crate::i18n::Language;
use tracing::debug;

/// The active language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LanguageSelector {
    active: Language,
}

impl LanguageSelector {
    pub fn new(active: Language) -> Self {
        Self { active }
    }

    pub fn language(&self) -> Language {
        self.active
    }

    pub fn set_language(&mut self, language: Language) {
        self.active = language;
    }

    /// Parse a user-supplied code, falling back to `default` for anything
    /// the registry does not offer.
    pub fn from_code_or(code: Option<&str>, default: Language) -> Self {
        let active = match code {
            Some(code) => Language::from_code(code).unwrap_or_else(|e| {
                debug!("Ignoring language '{}': {}", code, e);
                default
            }),
            None => default,
        };
        Self::new(active)
    }
}

/// Mobile navigation drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavMenu {
    #[default]
    Closed,
    Open,
}

impl NavMenu {
    pub fn toggled(self) -> Self {
        match self {
            NavMenu::Closed => NavMenu::Open,
            NavMenu::Open => NavMenu::Closed,
        }
    }

    pub fn is_open(self) -> bool {
        self == NavMenu::Open
    }
}

/// Floating booking call-to-action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BookingWidget {
    #[default]
    Collapsed,
    Expanded,
}

impl BookingWidget {
    pub fn toggled(self) -> Self {
        match self {
            BookingWidget::Collapsed => BookingWidget::Expanded,
            BookingWidget::Expanded => BookingWidget::Collapsed,
        }
    }

    pub fn is_expanded(self) -> bool {
        self == BookingWidget::Expanded
    }
}

/// Raw query string of the page.
#[derive(Debug, Default)]
pub struct PageQuery {
    pub lang: Option<String>,
    pub tab: Option<String>,
    pub nav: Option<String>,
    pub book: Option<String>,
}

impl PageQuery {
    /// Build from decoded `key=value` pairs. The first value of a repeated
    /// key wins and unknown keys are ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut query = Self::default();
        for (key, value) in pairs {
            let slot = match key.as_str() {
                "lang" => &mut query.lang,
                "tab" => &mut query.tab,
                "nav" => &mut query.nav,
                "book" => &mut query.book,
                other => {
                    debug!("Ignoring query parameter '{}'", other);
                    continue;
                }
            };
            if slot.is_none() {
                *slot = Some(value);
            }
        }
        query
    }
}

/// All UI state cells of one rendered page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageState {
    pub language: Language,
    pub tab: String,
    pub nav: NavMenu,
    pub booking: BookingWidget,
}

impl PageState {
    /// Fresh page: everything closed, given language and tab.
    pub fn new(language: Language, tab: impl Into<String>) -> Self {
        Self {
            language,
            tab: tab.into(),
            nav: NavMenu::Closed,
            booking: BookingWidget::Collapsed,
        }
    }

    /// Read state from the query, using the defaults for absent values.
    pub fn from_query(query: &PageQuery, default_language: Language, default_tab: &str) -> Self {
        let language =
            LanguageSelector::from_code_or(query.lang.as_deref(), default_language).language();
        let nav = if query.nav.as_deref() == Some("open") {
            NavMenu::Open
        } else {
            NavMenu::Closed
        };
        let booking = if query.book.as_deref() == Some("open") {
            BookingWidget::Expanded
        } else {
            BookingWidget::Collapsed
        };

        Self {
            language,
            tab: query.tab.clone().unwrap_or_else(|| default_tab.to_string()),
            nav,
            booking,
        }
    }

    pub fn with_language(&self, language: Language) -> Self {
        let mut selector = LanguageSelector::new(self.language);
        selector.set_language(language);
        Self {
            language: selector.language(),
            ..self.clone()
        }
    }

    pub fn with_tab(&self, tab: &str) -> Self {
        Self {
            tab: tab.to_string(),
            ..self.clone()
        }
    }

    pub fn with_nav(&self, nav: NavMenu) -> Self {
        Self { nav, ..self.clone() }
    }

    pub fn with_booking(&self, booking: BookingWidget) -> Self {
        Self {
            booking,
            ..self.clone()
        }
    }

    /// Relative link that reproduces this state, e.g. `?lang=it&tab=borgo_pio`.
    pub fn href(&self) -> String {
        let mut href = format!(
            "?lang={}&tab={}",
            self.language.code(),
            encode_component(&self.tab)
        );
        if self.nav.is_open() {
            href.push_str("&nav=open");
        }
        if self.booking.is_expanded() {
            href.push_str("&book=open");
        }
        href
    }

    /// Link to an anchor on the page with the nav drawer closed.
    pub fn anchor_href(&self, anchor: &str) -> String {
        format!("{}#{}", self.with_nav(NavMenu::Closed).href(), anchor)
    }
}

/// Percent-encode everything outside the unreserved URI set.
fn encode_component(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                encoded.push(byte as char)
            }
            _ => encoded.push_str(&format!("%{:02X}", byte)),
        }
    }
    encoded
}
