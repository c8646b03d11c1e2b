use super::{Icon, RenderContext};
use maud::{html, Markup};

pub(super) fn hero(ctx: &RenderContext<'_>) -> Markup {
    html! {
        section class="hero" {
            div class="hero-text" {
                h2 { (ctx.t("hero.title")) }
                p class="hero-subtitle" { (ctx.t("hero.subtitle")) }
                a class="hero-cta" href="#locations" {
                    (ctx.t("hero.cta"))
                    (Icon::ChevronRight)
                }
            }
            div class="hero-image" {
                img src=(ctx.content.hero_image) alt=(ctx.t("hero.image_alt"));
            }
        }
    }
}

pub(super) fn about(ctx: &RenderContext<'_>) -> Markup {
    html! {
        section id="about" class="about" {
            h3 class="kicker" { (ctx.content.brand) }
            h2 { (ctx.t("about.title")) }
            p class="about-lead" { (ctx.t("about.desc")) }
            div class="about-story" {
                p { (ctx.t("about.story_p1")) }
                p { (ctx.t("about.story_p2")) }
            }
        }
    }
}
