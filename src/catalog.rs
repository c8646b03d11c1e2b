//! Static site content: locations with their menus, reviews and outbound links.
//!
//! Content is plain data deserialized from JSON (`data/site.json` is embedded
//! as the default) and validated once at load. After that it is never
//! mutated; the server shares it read-only across requests.

use crate::error::ContentError;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::OnceLock;

/// Content shipped with the binary.
pub const DEFAULT_CONTENT: &str = include_str!("../data/site.json");

/// Highest star rating a review can carry.
pub const MAX_RATING: u8 = 5;

static LOCATION_ID_REGEX: OnceLock<Regex> = OnceLock::new();

/// A single dish on a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Display label such as "15 €" or "from 5 €". Never parsed.
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCategory {
    pub name: String,
    pub image: String,
    pub items: Vec<MenuItem>,
}

/// A restaurant outlet and the menu served there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Stable slug used for lookup, query strings and `locations.<id>.*` keys
    pub id: String,
    pub image: String,
    /// Label shown on the menu tab
    pub tab_label: String,
    /// Directions link; the card points at the menu when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub map_url: Option<String>,
    pub categories: Vec<MenuCategory>,
}

impl Location {
    pub fn title_key(&self) -> String {
        format!("locations.{}.title", self.id)
    }

    pub fn desc_key(&self) -> String {
        format!("locations.{}.desc", self.id)
    }
}

/// A guest review. The text itself lives in the locale files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub id: u32,
    pub rating: u8,
}

impl Review {
    pub fn text_key(&self) -> String {
        format!("reviews.{}.text", self.id)
    }

    pub fn author_key(&self) -> String {
        format!("reviews.{}.author", self.id)
    }

    pub fn source_key(&self) -> String {
        format!("reviews.{}.source", self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credit {
    pub name: String,
    pub role: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partner {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

/// Outbound links rendered by the footer and the booking widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    pub booking_url: String,
    /// `tel:` URI
    pub phone: String,
    pub instagram_url: String,
    pub facebook_url: String,
    pub credit: Credit,
    #[serde(default)]
    pub partners: Vec<Partner>,
}

/// Lookup of locations by id, keeping declaration order for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuCatalog {
    locations: Vec<Location>,
    index: HashMap<String, usize>,
}

impl MenuCatalog {
    /// Build a catalog, rejecting malformed or duplicate ids and unnamed items.
    pub fn new(locations: Vec<Location>) -> Result<Self, ContentError> {
        let id_regex =
            LOCATION_ID_REGEX.get_or_init(|| Regex::new(r"^[a-z0-9_-]+$").unwrap());

        let mut index = HashMap::with_capacity(locations.len());
        for (position, location) in locations.iter().enumerate() {
            if !id_regex.is_match(&location.id) {
                return Err(ContentError::InvalidLocationId(location.id.clone()));
            }
            if index.insert(location.id.clone(), position).is_some() {
                return Err(ContentError::DuplicateLocation(location.id.clone()));
            }
            for category in &location.categories {
                let unnamed = category
                    .items
                    .iter()
                    .position(|item| item.name.trim().is_empty());
                if let Some(item_index) = unnamed {
                    return Err(ContentError::EmptyItemName {
                        location: location.id.clone(),
                        category: category.name.clone(),
                        index: item_index,
                    });
                }
            }
        }

        Ok(Self { locations, index })
    }

    pub fn get(&self, id: &str) -> Option<&Location> {
        self.index.get(id).map(|&i| &self.locations[i])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Locations in declaration order.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn first(&self) -> Option<&Location> {
        self.locations.first()
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}

/// On-disk shape of the content file.
#[derive(Debug, Deserialize)]
struct RawContent {
    brand: String,
    hero_image: String,
    locations: Vec<Location>,
    #[serde(default)]
    reviews: Vec<Review>,
    links: Links,
}

/// Everything the page renders that is not a translated string.
#[derive(Debug, Clone)]
pub struct SiteContent {
    pub brand: String,
    pub hero_image: String,
    pub catalog: MenuCatalog,
    pub reviews: Vec<Review>,
    pub links: Links,
}

impl SiteContent {
    /// Parse and validate content from a JSON string.
    ///
    /// `origin` names the source in error messages (a path or "embedded").
    pub fn from_json(json: &str, origin: &str) -> Result<Self, ContentError> {
        let raw: RawContent = serde_json::from_str(json).map_err(|source| ContentError::Parse {
            origin: origin.to_string(),
            source,
        })?;

        let mut seen = HashSet::new();
        for review in &raw.reviews {
            if review.rating > MAX_RATING {
                return Err(ContentError::RatingOutOfRange {
                    id: review.id,
                    rating: review.rating,
                });
            }
            if !seen.insert(review.id) {
                return Err(ContentError::DuplicateReview(review.id));
            }
        }

        Ok(Self {
            brand: raw.brand,
            hero_image: raw.hero_image,
            catalog: MenuCatalog::new(raw.locations)?,
            reviews: raw.reviews,
            links: raw.links,
        })
    }

    pub fn from_file(path: &Path) -> Result<Self, ContentError> {
        let json = std::fs::read_to_string(path).map_err(|source| ContentError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json, &path.display().to_string())
    }

    /// The content compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(DEFAULT_CONTENT, "embedded site.json")
    }

    /// Every locale key this content expects to be translated.
    pub fn required_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        for location in self.catalog.locations() {
            keys.push(location.title_key());
            keys.push(location.desc_key());
        }
        for review in &self.reviews {
            keys.push(review.text_key());
            keys.push(review.author_key());
            keys.push(review.source_key());
        }
        keys
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn item(name: &str, price: &str) -> MenuItem {
        MenuItem {
            name: name.to_string(),
            description: None,
            price: price.to_string(),
        }
    }

    pub(crate) fn category(name: &str, items: Vec<MenuItem>) -> MenuCategory {
        MenuCategory {
            name: name.to_string(),
            image: format!("/static/{}.png", name.to_lowercase()),
            items,
        }
    }

    pub(crate) fn location(id: &str, categories: Vec<MenuCategory>) -> Location {
        Location {
            id: id.to_string(),
            image: format!("/static/{}.png", id),
            tab_label: id.to_uppercase(),
            map_url: None,
            categories,
        }
    }

    /// Two locations: "a" with two categories, "b" with one.
    pub(crate) fn sample_catalog() -> MenuCatalog {
        MenuCatalog::new(vec![
            location(
                "a",
                vec![
                    category(
                        "Antipasti",
                        vec![item("Caprese", "15 €"), item("Focaccia", "from 5 €")],
                    ),
                    category("Dolci", vec![item("Torta", "8 €")]),
                ],
            ),
            location(
                "b",
                vec![category(
                    "Primi",
                    vec![
                        item("Cacio e pepe", "13 €"),
                        item("Carbonara", "13 €"),
                        item("Amatriciana", "13,5 €"),
                    ],
                )],
            ),
        ])
        .unwrap()
    }

    // ==================== Catalog Tests ====================

    #[test]
    fn test_get_by_id() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("b").unwrap().categories.len(), 1);
        assert_eq!(catalog.get("a").unwrap().categories.len(), 2);
        assert!(catalog.get("c").is_none());
    }

    #[test]
    fn test_locations_keep_declaration_order() {
        let catalog = sample_catalog();
        let ids: Vec<_> = catalog.locations().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(catalog.first().unwrap().id, "a");
    }

    #[test]
    fn test_duplicate_location_rejected() {
        let result = MenuCatalog::new(vec![location("a", vec![]), location("a", vec![])]);
        assert!(matches!(result, Err(ContentError::DuplicateLocation(id)) if id == "a"));
    }

    #[test]
    fn test_malformed_location_id_rejected() {
        for id in ["", "Borgo Pio", "a&b", "x\"y"] {
            let result = MenuCatalog::new(vec![location(id, vec![])]);
            assert!(
                matches!(result, Err(ContentError::InvalidLocationId(_))),
                "id {:?} should be rejected",
                id
            );
        }
    }

    #[test]
    fn test_empty_item_name_rejected() {
        let result = MenuCatalog::new(vec![location(
            "a",
            vec![category("Pizze", vec![item("Margherita", "12 €"), item("  ", "1 €")])],
        )]);
        match result {
            Err(ContentError::EmptyItemName { location, category, index }) => {
                assert_eq!(location, "a");
                assert_eq!(category, "Pizze");
                assert_eq!(index, 1);
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    // ==================== SiteContent Tests ====================

    #[test]
    fn test_embedded_content_loads() {
        let content = SiteContent::embedded().expect("embedded content should be valid");
        let ids: Vec<_> = content
            .catalog
            .locations()
            .iter()
            .map(|l| l.id.as_str())
            .collect();
        assert_eq!(ids, vec!["trastevere", "borgo_pio", "prenestina"]);
        assert_eq!(content.catalog.get("trastevere").unwrap().categories.len(), 7);
        assert_eq!(content.catalog.get("borgo_pio").unwrap().categories.len(), 2);
        assert_eq!(content.catalog.get("prenestina").unwrap().categories.len(), 1);
        assert_eq!(content.reviews.len(), 3);
        assert!(content.links.phone.starts_with("tel:"));
    }

    #[test]
    fn test_embedded_prices_are_kept_as_labels() {
        let content = SiteContent::embedded().unwrap();
        let antipasti = &content.catalog.get("trastevere").unwrap().categories[0];
        let prices: Vec<_> = antipasti.items.iter().map(|i| i.price.as_str()).collect();
        assert_eq!(prices, vec!["21,5 €", "9,5 €", "15 €", "from 5 €"]);
    }

    #[test]
    fn test_optional_description() {
        let content = SiteContent::embedded().unwrap();
        let antipasti = &content.catalog.get("trastevere").unwrap().categories[0];
        assert_eq!(
            antipasti.items[0].description.as_deref(),
            Some("Tagliere with artisanal cold cuts, cheeses, jams, olives")
        );
        assert!(antipasti.items[1].description.is_none());
    }

    fn content_json(reviews: &str) -> String {
        format!(
            r##"{{
                "brand": "Test",
                "hero_image": "/static/hero.png",
                "locations": [
                    {{ "id": "a", "image": "/a.png", "tab_label": "A", "categories": [] }}
                ],
                "reviews": {},
                "links": {{
                    "booking_url": "https://book.example",
                    "phone": "tel:+39000",
                    "instagram_url": "#",
                    "facebook_url": "https://fb.example",
                    "credit": {{ "name": "N", "role": "R", "url": "https://n.example" }}
                }}
            }}"##,
            reviews
        )
    }

    #[test]
    fn test_rating_above_five_rejected() {
        let json = content_json(r#"[{ "id": 1, "rating": 6 }]"#);
        let result = SiteContent::from_json(&json, "test");
        assert!(matches!(
            result,
            Err(ContentError::RatingOutOfRange { id: 1, rating: 6 })
        ));
    }

    #[test]
    fn test_rating_zero_accepted() {
        let json = content_json(r#"[{ "id": 1, "rating": 0 }]"#);
        let content = SiteContent::from_json(&json, "test").unwrap();
        assert_eq!(content.reviews[0].rating, 0);
        assert!(content.links.partners.is_empty());
    }

    #[test]
    fn test_duplicate_review_rejected() {
        let json = content_json(r#"[{ "id": 2, "rating": 4 }, { "id": 2, "rating": 5 }]"#);
        let result = SiteContent::from_json(&json, "test");
        assert!(matches!(result, Err(ContentError::DuplicateReview(2))));
    }

    #[test]
    fn test_invalid_json_names_origin() {
        let err = SiteContent::from_json("{ not json", "broken.json").unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, content_json("[]")).unwrap();

        let content = SiteContent::from_file(&path).unwrap();
        assert_eq!(content.brand, "Test");
        assert!(content.catalog.contains("a"));
    }

    #[test]
    fn test_from_missing_file() {
        let result = SiteContent::from_file(Path::new("/nonexistent/site.json"));
        assert!(matches!(result, Err(ContentError::Io { .. })));
    }

    #[test]
    fn test_required_keys() {
        let json = content_json(r#"[{ "id": 7, "rating": 3 }]"#);
        let content = SiteContent::from_json(&json, "test").unwrap();
        assert_eq!(
            content.required_keys(),
            vec![
                "locations.a.title",
                "locations.a.desc",
                "reviews.7.text",
                "reviews.7.author",
                "reviews.7.source",
            ]
        );
    }
}
