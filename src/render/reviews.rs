use super::{Icon, RenderContext};
use crate::catalog::{Review, MAX_RATING};
use maud::{html, Markup};

pub(super) fn reviews(ctx: &RenderContext<'_>) -> Markup {
    html! {
        section id="reviews" class="reviews" {
            h2 { (ctx.t("reviews.title")) }
            div class="reviews-grid" {
                @for review in &ctx.content.reviews {
                    (review_card(ctx, review))
                }
            }
        }
    }
}

fn review_card(ctx: &RenderContext<'_>, review: &Review) -> Markup {
    html! {
        figure class="review" data-rating=(review.rating) {
            (stars(review.rating))
            blockquote { p { (ctx.t(&review.text_key())) } }
            figcaption {
                p class="review-author" { (ctx.t(&review.author_key())) }
                p class="review-source" {
                    (ctx.t("reviews.via")) " " (ctx.t(&review.source_key()))
                }
            }
        }
    }
}

/// Exactly `rating` filled stars.
fn stars(rating: u8) -> Markup {
    html! {
        div class="stars" aria-label={ (rating) "/" (MAX_RATING) } {
            @for _ in 0..rating {
                span class="star" { (Icon::Star.sized(20)) }
            }
        }
    }
}
