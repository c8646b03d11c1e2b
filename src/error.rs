use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating site content and locale files.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("location id '{0}' must be a non-empty slug of [a-z0-9_-]")]
    InvalidLocationId(String),

    #[error("location id '{0}' is defined more than once")]
    DuplicateLocation(String),

    #[error("menu item #{index} in '{location}' / '{category}' has an empty name")]
    EmptyItemName {
        location: String,
        category: String,
        index: usize,
    },

    #[error("review id {0} is defined more than once")]
    DuplicateReview(u32),

    #[error("review {id} has rating {rating}, expected 0..=5")]
    RatingOutOfRange { id: u32, rating: u8 },

    #[error("locale file for '{0}' must contain a JSON object at the top level")]
    LocaleNotObject(String),
}
