//! HTML rendering of the page.
//!
//! Every section is a pure function of the content, the resolver and the
//! request's `PageState`. Templates are maud, which escapes interpolated
//! text, so content strings are emitted as written.

mod booking;
mod footer;
mod icons;
mod locations;
mod menu;
mod nav;
mod reviews;
mod sections;

use crate::catalog::SiteContent;
use crate::i18n::{Language, TextResolver};
use crate::presenter::MenuPresenter;
use crate::state::PageState;
use maud::{html, Markup, DOCTYPE};

pub use icons::Icon;

/// Inputs shared by every section.
pub struct RenderContext<'a> {
    pub content: &'a SiteContent,
    pub resolver: &'a dyn TextResolver,
    pub state: &'a PageState,
}

impl<'a> RenderContext<'a> {
    pub fn new(
        content: &'a SiteContent,
        resolver: &'a dyn TextResolver,
        state: &'a PageState,
    ) -> Self {
        Self {
            content,
            resolver,
            state,
        }
    }

    pub fn language(&self) -> Language {
        self.state.language
    }

    /// Localized text for `key` in the active language.
    pub fn t(&self, key: &str) -> String {
        self.resolver.resolve(key, self.state.language).to_string()
    }

    /// Menu presenter positioned on the requested tab.
    pub fn presenter(&self) -> MenuPresenter<'a> {
        MenuPresenter::new(&self.content.catalog, &self.state.tab)
    }
}

/// Render the whole page.
pub fn render_page(ctx: &RenderContext<'_>) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(ctx.language().code()) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (ctx.content.brand) }
                link rel="stylesheet" href="/static/site.css";
            }
            body id="top" {
                (nav::navbar(ctx))
                main {
                    (sections::hero(ctx))
                    (sections::about(ctx))
                    (locations::locations(ctx))
                    (menu::menu(ctx))
                    (reviews::reviews(ctx))
                }
                (footer::footer(ctx))
                (booking::booking_widget(ctx))
            }
        }
    }
}

/// Open absolute http(s) links in a new browsing context.
fn is_external(url: &str) -> bool {
    url.starts_with("https://") || url.starts_with("http://")
}

/// Link markup that adds `target`/`rel` for external URLs.
fn link(url: &str, class: &str, body: Markup) -> Markup {
    let external = is_external(url);
    html! {
        a class=(class)
            href=(url)
            target=[external.then_some("_blank")]
            rel=[external.then_some("noopener noreferrer")] {
            (body)
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::i18n::LocaleCatalog;
    use crate::state::BookingWidget;
    use std::sync::OnceLock;

    static CONTENT: OnceLock<SiteContent> = OnceLock::new();
    static LOCALES: OnceLock<LocaleCatalog> = OnceLock::new();

    pub(crate) fn content() -> &'static SiteContent {
        CONTENT.get_or_init(|| SiteContent::embedded().unwrap())
    }

    pub(crate) fn locales() -> &'static LocaleCatalog {
        LOCALES.get_or_init(|| LocaleCatalog::embedded().unwrap())
    }

    pub(crate) fn page(state: &PageState) -> String {
        render_page(&RenderContext::new(content(), locales(), state)).into_string()
    }

    #[test]
    fn test_page_has_every_section() {
        let html = page(&PageState::new(Language::ENGLISH, "trastevere"));
        assert!(html.starts_with("<!DOCTYPE html>"));
        for anchor in [r#"id="about""#, r#"id="locations""#, r#"id="menu""#, r#"id="reviews""#] {
            assert!(html.contains(anchor), "missing {}", anchor);
        }
        assert!(html.contains("<footer"));
        assert!(html.contains(r#"class="booking""#));
    }

    #[test]
    fn test_html_lang_follows_language() {
        let html = page(&PageState::new(Language::RUSSIAN, "trastevere"));
        assert!(html.contains(r#"<html lang="ru">"#));
    }

    #[test]
    fn test_shipped_page_has_no_placeholders() {
        for language in Language::all_enabled() {
            let html = page(&PageState::new(language, "trastevere"));
            for key in crate::i18n::PAGE_KEYS {
                assert!(!html.contains(key), "{} unresolved in {}", key, language);
            }
        }
    }

    #[test]
    fn test_language_switch_leaves_no_stale_text() {
        let english = page(&PageState::new(Language::ENGLISH, "trastevere"));
        assert!(english.contains("Our Menu"));

        // menu.empty only renders for an unknown tab
        let mut keys: Vec<String> = crate::i18n::PAGE_KEYS
            .iter()
            .filter(|k| **k != "menu.empty")
            .map(|k| k.to_string())
            .collect();
        keys.extend(content().required_keys());

        for target in [Language::ITALIAN, Language::RUSSIAN] {
            // Expanded so the booking labels are on the page too
            let translated = page(
                &PageState::new(target, "trastevere").with_booking(BookingWidget::Expanded),
            );
            for key in &keys {
                let before = locales().get(key, Language::ENGLISH).unwrap();
                let after = locales().get(key, target).unwrap();
                let after_escaped = maud::html! { (after) }.into_string();
                assert!(
                    translated.contains(&after_escaped),
                    "'{}' not rendered for {}",
                    key,
                    target
                );
                // Short words like "Menu" legitimately occur inside other text
                if before != after && before.chars().count() >= 12 {
                    let before_escaped = maud::html! { (before) }.into_string();
                    assert!(
                        !translated.contains(&before_escaped),
                        "stale English text for '{}' in {}",
                        key,
                        target
                    );
                }
            }
        }
    }

    #[test]
    fn test_link_external_opens_new_context() {
        let html = link("https://www.thefork.com", "x", html! { "go" }).into_string();
        assert!(html.contains(r#"target="_blank""#));
        assert!(html.contains(r#"rel="noopener noreferrer""#));
    }

    #[test]
    fn test_link_local_stays_in_page() {
        let html = link("tel:+390612345678", "x", html! { "call" }).into_string();
        assert!(!html.contains("target="));
        assert!(html.contains(r#"href="tel:+390612345678""#));
    }
}
