use super::{Icon, RenderContext};
use crate::i18n::Language;
use maud::{html, Markup};

const ANCHORS: [(&str, &str); 3] = [
    ("about", "nav.about"),
    ("locations", "nav.locations"),
    ("menu", "nav.menu"),
];

/// One link per enabled language, the active one marked.
pub(super) fn language_switcher(ctx: &RenderContext<'_>) -> Markup {
    html! {
        div class="language-switcher" role="group" aria-label=(ctx.t("nav.language")) {
            @for language in Language::all_enabled() {
                @let active = language == ctx.language();
                a class=(if active { "lang lang-active" } else { "lang" })
                    href=(ctx.state.with_language(language).href())
                    hreflang=(language.code())
                    title=(language.native_name())
                    aria-current=[active.then_some("true")] {
                    (language.code().to_uppercase())
                }
            }
        }
    }
}

pub(super) fn navbar(ctx: &RenderContext<'_>) -> Markup {
    let state = ctx.state;
    let open = state.nav.is_open();

    html! {
        header class="navbar" {
            div class="navbar-inner" {
                a class="brand" href=(state.anchor_href("top")) { (ctx.content.brand) "." }

                nav class="nav-desktop" {
                    @for (anchor, key) in ANCHORS {
                        a href={ "#" (anchor) } { (ctx.t(key)) }
                    }
                    (language_switcher(ctx))
                }

                div class="nav-mobile-controls" {
                    (language_switcher(ctx))
                    a class="nav-toggle"
                        href=(state.with_nav(state.nav.toggled()).href())
                        aria-expanded=(if open { "true" } else { "false" })
                        aria-label=(ctx.t("nav.toggle")) {
                        @if open { (Icon::Close.sized(28)) } @else { (Icon::Menu.sized(28)) }
                    }
                }
            }

            @if open {
                nav class="nav-mobile" {
                    @for (anchor, key) in ANCHORS {
                        a href=(state.anchor_href(anchor)) { (ctx.t(key)) }
                    }
                }
            }
        }
    }
}
