use super::{link, Icon, RenderContext};
use maud::{html, Markup};

pub(super) fn footer(ctx: &RenderContext<'_>) -> Markup {
    let links = &ctx.content.links;

    html! {
        footer class="footer" {
            h2 class="footer-brand" { (ctx.content.brand) "." }

            div class="social" {
                (link(&links.instagram_url, "social-link", html! { (Icon::Instagram) }))
                (link(&links.facebook_url, "social-link", html! { (Icon::Facebook) }))
            }

            p class="credit" {
                (link(&links.credit.url, "credit-name", html! {
                    (links.credit.name) " " (Icon::Facebook.sized(16))
                }))
                span class="credit-role" {
                    (links.credit.role)
                    @for (i, partner) in links.partners.iter().enumerate() {
                        @if i > 0 { " e" }
                        " "
                        @match (&partner.url, &partner.logo) {
                            (Some(url), Some(logo)) => {
                                (link(url, "partner", html! {
                                    img src=(logo) alt=(partner.name) class="partner-logo";
                                }))
                            }
                            (Some(url), None) => {
                                (link(url, "partner", html! { (partner.name) }))
                            }
                            (None, _) => {
                                span class="partner" { (partner.name) }
                            }
                        }
                    }
                }
            }

            p class="copyright" { (ctx.t("footer.copyright")) }
        }
    }
}
