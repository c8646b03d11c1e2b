use super::{link, Icon, RenderContext};
use maud::{html, Markup};

/// Floating call-to-action: a toggle that reveals the reservation and phone links.
pub(super) fn booking_widget(ctx: &RenderContext<'_>) -> Markup {
    let state = ctx.state;
    let links = &ctx.content.links;
    let expanded = state.booking.is_expanded();

    html! {
        aside class="booking" {
            @if expanded {
                div class="booking-links" {
                    (link(&links.booking_url, "booking-thefork", html! {
                        (Icon::Utensils.sized(20))
                        (ctx.t("book.thefork"))
                    }))
                    (link(&links.phone, "booking-phone", html! {
                        (Icon::Phone.sized(20))
                        (ctx.t("book.phone"))
                    }))
                }
            }
            a class="booking-toggle"
                href=(state.with_booking(state.booking.toggled()).href())
                aria-expanded=(if expanded { "true" } else { "false" })
                aria-label=(ctx.t("book.toggle")) {
                @if expanded { (Icon::Close.sized(28)) } @else { (Icon::Calendar.sized(28)) }
            }
        }
    }
}
