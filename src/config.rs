/// Per-page configuration
///
/// Pages declare which features they want instead of the code guessing from
/// which elements happen to exist. Every field has a default, so a page can
/// pass `{}` or only the fields it cares about.
use crate::error::{Error, Result};
use crate::filter::SearchMode;
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PageConfig {
    /// Feed location, relative to the document.
    pub feed_path: String,
    /// Target of the "View All Articles" link under the latest article.
    pub listing_href: String,
    pub features: Features,
    pub selectors: Selectors,
    pub search_mode: SearchMode,
    /// Distance kept between a scrolled-to element and the viewport top.
    pub scroll_offset: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Features {
    pub article_list: bool,
    pub latest_article: bool,
    pub filters: bool,
    pub smooth_scroll: bool,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub article_list: String,
    pub latest_article: String,
    pub search_input_id: String,
    pub category_button: String,
    pub card: String,
    pub nav_links: String,
}

impl PageConfig {
    /// Full listing with search, category buttons and in-page navigation.
    pub fn articles_page() -> Self {
        PageConfig {
            features: Features {
                article_list: true,
                filters: true,
                smooth_scroll: true,
                ..Features::none()
            },
            ..Default::default()
        }
    }

    /// Home page with only the latest-article highlight.
    pub fn home_page() -> Self {
        PageConfig {
            features: Features {
                latest_article: true,
                smooth_scroll: true,
                ..Features::none()
            },
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| Error::config(e.to_string()))
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        PageConfig {
            feed_path: "articles.json".to_string(),
            listing_href: "articles.html".to_string(),
            features: Features::default(),
            selectors: Selectors::default(),
            search_mode: SearchMode::default(),
            scroll_offset: 80.0,
        }
    }
}

impl Features {
    pub fn none() -> Self {
        Features {
            article_list: false,
            latest_article: false,
            filters: false,
            smooth_scroll: false,
        }
    }
}

/// With no explicit choice every feature is attempted, and a missing
/// container simply makes that feature a no-op.
impl Default for Features {
    fn default() -> Self {
        Features {
            article_list: true,
            latest_article: true,
            filters: true,
            smooth_scroll: true,
        }
    }
}

impl Default for Selectors {
    fn default() -> Self {
        Selectors {
            article_list: ".article-list".to_string(),
            latest_article: "#latest-article .featured-section".to_string(),
            search_input_id: "article-search".to_string(),
            category_button: ".category-filter-btn".to_string(),
            card: ".article-card".to_string(),
            nav_links: "nav a".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PageConfig::default();

        assert_eq!(config.feed_path, "articles.json");
        assert_eq!(config.scroll_offset, 80.0);
        assert_eq!(config.search_mode, SearchMode::Substring);
        assert_eq!(config.selectors.search_input_id, "article-search");
        assert!(config.features.article_list && config.features.latest_article);
    }

    #[test]
    fn test_page_presets() {
        let articles = PageConfig::articles_page();
        assert!(articles.features.article_list);
        assert!(articles.features.filters);
        assert!(!articles.features.latest_article);

        let home = PageConfig::home_page();
        assert!(home.features.latest_article);
        assert!(!home.features.article_list);
        assert!(!home.features.filters);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = PageConfig::from_json(
            r#"{"feedPath": "data/feed.json", "features": {"filters": false}, "searchMode": "per-category"}"#,
        )
        .unwrap();

        assert_eq!(config.feed_path, "data/feed.json");
        assert!(!config.features.filters);
        // unspecified feature flags keep their defaults
        assert!(config.features.article_list);
        assert_eq!(config.search_mode, SearchMode::PerCategory);
        assert_eq!(config.selectors.card, ".article-card");
    }

    #[test]
    fn test_empty_object() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn test_invalid_json() {
        let err = PageConfig::from_json(r#"{"scrollOffset": "far"}"#).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }
}
