use super::{link, Icon, RenderContext};
use maud::{html, Markup};

/// Grid of location cards in catalog order.
pub(super) fn locations(ctx: &RenderContext<'_>) -> Markup {
    html! {
        section id="locations" class="locations" {
            h2 { (ctx.t("locations.title")) }
            div class="locations-grid" {
                @for location in ctx.content.catalog.locations() {
                    @let title = ctx.t(&location.title_key());
                    // Without a map link, directions point at this location's menu
                    @let directions = location
                        .map_url
                        .clone()
                        .unwrap_or_else(|| ctx.state.with_tab(&location.id).anchor_href("menu"));
                    article class="location-card" data-location=(location.id) {
                        div class="location-image" {
                            img src=(location.image) alt=(title) loading="lazy";
                            h3 { (title) }
                        }
                        div class="location-body" {
                            p { (ctx.t(&location.desc_key())) }
                            (link(&directions, "directions", html! {
                                (Icon::MapPin.sized(20))
                                (ctx.t("locations.directions"))
                            }))
                        }
                    }
                }
            }
        }
    }
}
