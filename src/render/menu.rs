use super::RenderContext;
use crate::catalog::MenuCategory;
use maud::{html, Markup};

/// Tab bar plus the active location's menu, or the empty state.
pub(super) fn menu(ctx: &RenderContext<'_>) -> Markup {
    let presenter = ctx.presenter();
    let view = presenter.render();

    html! {
        section id="menu" class="menu" data-tab=(presenter.active_id()) {
            h2 { (ctx.t("menu.title")) }
            nav class="menu-tabs" {
                @for tab in presenter.tabs() {
                    a class=(if tab.active { "tab tab-active" } else { "tab" })
                        href=(ctx.state.with_tab(tab.id).anchor_href("menu"))
                        aria-current=[tab.active.then_some("page")] {
                        (tab.label)
                    }
                }
            }
            @if view.is_available() {
                div class="menu-categories" {
                    @for category in view.categories() {
                        (category_block(category))
                    }
                }
            } @else {
                p class="menu-empty" { (ctx.t("menu.empty")) }
            }
        }
    }
}

fn category_block(category: &MenuCategory) -> Markup {
    html! {
        article class="menu-category" {
            div class="menu-category-image" {
                img src=(category.image) alt=(category.name) loading="lazy";
            }
            div class="menu-category-body" {
                h3 { (category.name) }
                ul class="menu-items" {
                    @for item in &category.items {
                        li class="menu-item" {
                            div {
                                h4 class="menu-item-name" { (item.name) }
                                @if let Some(description) = &item.description {
                                    p class="menu-item-desc" { (description) }
                                }
                            }
                            span class="menu-item-price" { (item.price) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::tests::sample_catalog;
    use crate::catalog::{Credit, Links, MenuItem, SiteContent};
    use crate::i18n::{Language, LocaleCatalog};
    use crate::render::tests::page;
    use crate::state::PageState;
    use proptest::prelude::*;

    fn sample_content() -> SiteContent {
        SiteContent {
            brand: "Test".to_string(),
            hero_image: "/static/hero.png".to_string(),
            catalog: sample_catalog(),
            reviews: vec![],
            links: Links {
                booking_url: "https://book.example".to_string(),
                phone: "tel:+39000".to_string(),
                instagram_url: "#".to_string(),
                facebook_url: "https://fb.example".to_string(),
                credit: Credit {
                    name: "N".to_string(),
                    role: "R".to_string(),
                    url: "https://n.example".to_string(),
                },
                partners: vec![],
            },
        }
    }

    fn render_menu(content: &SiteContent, tab: &str) -> String {
        let locales = LocaleCatalog::from_json_sources(&[(
            Language::ENGLISH,
            r#"{"menu": {"title": "Menu", "empty": "Nothing here"}}"#,
        )])
        .unwrap();
        let state = PageState::new(Language::ENGLISH, tab);
        menu(&RenderContext::new(content, &locales, &state)).into_string()
    }

    #[test]
    fn test_select_b_renders_one_block_in_order() {
        let html = render_menu(&sample_content(), "b");
        assert_eq!(html.matches(r#"class="menu-category""#).count(), 1);

        let positions: Vec<usize> = ["Cacio e pepe", "Carbonara", "Amatriciana"]
            .iter()
            .map(|name| html.find(name).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(html.contains(r#"<span class="menu-item-price">13,5 €</span>"#));
    }

    #[test]
    fn test_select_a_renders_two_blocks() {
        let html = render_menu(&sample_content(), "a");
        assert_eq!(html.matches(r#"class="menu-category""#).count(), 2);
        assert_eq!(html.matches(r#"class="menu-item""#).count(), 3);
    }

    #[test]
    fn test_unknown_tab_renders_empty_state() {
        let html = render_menu(&sample_content(), "c");
        assert!(html.contains(r#"<p class="menu-empty">Nothing here</p>"#));
        assert!(!html.contains("menu-category"));
        assert!(!html.contains("tab-active"));
        // the tabs stay usable
        assert_eq!(html.matches(r#"class="tab""#).count(), 2);
    }

    #[test]
    fn test_section_carries_requested_tab() {
        let html = render_menu(&sample_content(), "b");
        assert!(html.contains(r#"<section id="menu" class="menu" data-tab="b">"#));

        let html = render_menu(&sample_content(), "<c>");
        assert!(html.contains(r#"data-tab="&lt;c&gt;""#));
        assert!(html.contains("Nothing here"));
    }

    #[test]
    fn test_description_only_when_present() {
        let html = page(&PageState::new(Language::ENGLISH, "trastevere"));
        assert!(html.contains(r#"<p class="menu-item-desc">Bufala, pomodoro, basilico</p>"#));
        assert_eq!(html.matches(r#"class="menu-item-desc""#).count(), 13);
    }

    #[test]
    fn test_active_tab_marked() {
        let html = page(&PageState::new(Language::ENGLISH, "prenestina"));
        assert!(html.contains(
            r#"class="tab tab-active" href="?lang=en&amp;tab=prenestina#menu" aria-current="page">Prenestina</a>"#
        ));
        assert!(html.contains("Gnocchi"));
        assert!(!html.contains("Pizza al tartufo"));
    }

    #[test]
    fn test_every_shipped_price_rendered_verbatim() {
        let content = crate::render::tests::content();
        for location in content.catalog.locations() {
            let html = page(&PageState::new(Language::ITALIAN, &location.id));
            for item in location.categories.iter().flat_map(|c| &c.items) {
                let expected = format!(r#"<span class="menu-item-price">{}</span>"#, item.price);
                assert!(html.contains(&expected), "{} not verbatim", item.price);
            }
        }
    }

    proptest! {
        #[test]
        fn prop_price_label_is_verbatim(price in "[0-9A-Za-z ,.€$£/-]{1,16}") {
            let category = MenuCategory {
                name: "Test".to_string(),
                image: "/x.png".to_string(),
                items: vec![MenuItem {
                    name: "Dish".to_string(),
                    description: None,
                    price: price.clone(),
                }],
            };
            let html = category_block(&category).into_string();
            let expected = format!(r#"<span class="menu-item-price">{}</span>"#, price);
            prop_assert!(html.contains(&expected));
        }
    }
}
