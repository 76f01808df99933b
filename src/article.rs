/// Data structures for article-shelf
use serde::{Deserialize, Serialize};

/// One entry of the articles feed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: String,
    pub title: String,
    pub summary: String,
    // display-only; a missing value renders empty instead of dropping the feed
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub read_time: String,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Delimiter used in the `data-categories` attribute
pub const CATEGORY_DELIMITER: &str = ",";

impl Article {
    /// Categories as they appear in the `data-categories` attribute.
    pub fn joined_categories(&self) -> String {
        self.categories.join(CATEGORY_DELIMITER)
    }

    pub fn facets(&self) -> CardFacets {
        CardFacets {
            title: self.title.clone(),
            summary: self.summary.clone(),
            categories: self.joined_categories(),
        }
    }
}

/// The filterable projection of a rendered card
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CardFacets {
    pub title: String,
    pub summary: String,
    /// Comma-joined, exactly as stored on the card.
    pub categories: String,
}

impl CardFacets {
    pub fn new(title: &str, summary: &str, categories: &str) -> CardFacets {
        CardFacets {
            title: title.to_string(),
            summary: summary.to_string(),
            categories: categories.to_string(),
        }
    }

    /// Split the joined category string back into its parts.
    pub fn category_list(&self) -> impl Iterator<Item = &str> {
        self.categories.split(CATEGORY_DELIMITER)
    }
}

/// The highlighted article on the home page is the first one in the feed.
pub fn latest(articles: &[Article]) -> Option<&Article> {
    articles.first()
}
