/// Same-page anchor detection for navigation links
use once_cell::sync::Lazy;
use regex::Regex;

/// Links like `articles.html#top` navigate to another document
static CROSS_PAGE_FRAGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.html?#").expect("valid cross-page fragment pattern"));

/// Whether a nav link's href points at an element on the current page.
///
/// Examples:
/// - `#about` → true
/// - `articles.html#latest` → false
/// - `articles.html` → false
pub fn is_same_page_anchor(href: &str) -> bool {
    href.contains('#') && !CROSS_PAGE_FRAGMENT.is_match(href)
}

/// Scroll destination for an element, leaving room for the sticky header.
pub fn scroll_top_for(offset_top: i32, header_offset: f64) -> f64 {
    offset_top as f64 - header_offset
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_only_links() {
        assert!(is_same_page_anchor("#about"));
        assert!(is_same_page_anchor("#latest-article"));
    }

    #[test]
    fn test_cross_page_links() {
        assert!(!is_same_page_anchor("articles.html#top"));
        assert!(!is_same_page_anchor("index.htm#contact"));
        assert!(!is_same_page_anchor("/blog/post.html#section-2"));
    }

    #[test]
    fn test_links_without_fragment() {
        assert!(!is_same_page_anchor("articles.html"));
        assert!(!is_same_page_anchor("https://github.com"));
        assert!(!is_same_page_anchor(""));
    }

    #[test]
    fn test_scroll_top_for() {
        assert_eq!(scroll_top_for(500, 80.0), 420.0);
        assert_eq!(scroll_top_for(40, 80.0), -40.0);
    }
}
