/// Search and category filtering over rendered cards
///
/// Everything in here is pure: the DOM binding in `page::filters` owns a
/// `FilterState`, feeds it events and applies the returned visibility flags.
use crate::article::CardFacets;
use serde::Deserialize;

/// Category identifier that disables category filtering
pub const ALL_CATEGORIES: &str = "all";

/// How the free-text query is matched against a card's categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SearchMode {
    /// Substring of the comma-joined category string. A query may match
    /// across a delimiter, e.g. "t,w" matches "rust,web".
    #[default]
    Substring,
    /// Substring of one individual category.
    PerCategory,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterEvent {
    Search(String),
    SelectCategory(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub selected_category: String,
    pub query: String,
}

impl FilterState {
    pub fn new() -> Self {
        FilterState {
            selected_category: ALL_CATEGORIES.to_string(),
            query: String::new(),
        }
    }

    /// Fold one event into the state and recompute every card's visibility.
    pub fn apply(
        self,
        event: FilterEvent,
        cards: &[CardFacets],
        mode: SearchMode,
    ) -> (FilterState, Vec<bool>) {
        let next = match event {
            FilterEvent::Search(query) => FilterState { query, ..self },
            FilterEvent::SelectCategory(selected_category) => FilterState {
                selected_category,
                ..self
            },
        };
        let visible = visibility(cards, &next, mode);
        (next, visible)
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn matches_search(card: &CardFacets, query: &str, mode: SearchMode) -> bool {
    let query = query.to_lowercase();

    if card.title.to_lowercase().contains(&query) || card.summary.to_lowercase().contains(&query) {
        return true;
    }

    match mode {
        SearchMode::Substring => card.categories.to_lowercase().contains(&query),
        SearchMode::PerCategory => card
            .category_list()
            .any(|category| category.to_lowercase().contains(&query)),
    }
}

/// Exact, case-sensitive membership in the card's category list.
pub fn matches_category(card: &CardFacets, selected: &str) -> bool {
    selected == ALL_CATEGORIES || card.category_list().any(|category| category == selected)
}

pub fn is_visible(card: &CardFacets, state: &FilterState, mode: SearchMode) -> bool {
    matches_search(card, &state.query, mode) && matches_category(card, &state.selected_category)
}

pub fn visibility(cards: &[CardFacets], state: &FilterState, mode: SearchMode) -> Vec<bool> {
    cards.iter().map(|card| is_visible(card, state, mode)).collect()
}

/// Active flags for a single-select button group after `clicked` was pressed
pub fn active_flags(button_count: usize, clicked: usize) -> Vec<bool> {
    (0..button_count).map(|i| i == clicked).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn go_and_rust() -> Vec<CardFacets> {
        vec![
            CardFacets::new("Go Basics", "intro", "go"),
            CardFacets::new("Rust Tips", "advanced", "rust"),
        ]
    }

    #[test]
    fn test_default_state() {
        let state = FilterState::new();
        assert_eq!(state.selected_category, "all");
        assert_eq!(state.query, "");
    }

    #[test]
    fn test_empty_query_shows_everything() {
        let cards = go_and_rust();
        let visible = visibility(&cards, &FilterState::new(), SearchMode::Substring);
        assert_eq!(visible, vec![true, true]);
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let card = CardFacets::new("Rust Tips", "Advanced Topics", "rust");

        assert!(matches_search(&card, "RUST", SearchMode::Substring));
        assert!(matches_search(&card, "advanced", SearchMode::Substring));
        assert!(!matches_search(&card, "python", SearchMode::Substring));
    }

    #[test]
    fn test_search_matches_categories_string() {
        let card = CardFacets::new("Title", "Summary", "systems,web");

        assert!(matches_search(&card, "sys", SearchMode::Substring));
        assert!(matches_search(&card, "web", SearchMode::PerCategory));
    }

    #[test]
    fn test_search_across_delimiter_only_in_substring_mode() {
        let card = CardFacets::new("Title", "Summary", "rust,web");

        assert!(matches_search(&card, "t,w", SearchMode::Substring));
        assert!(!matches_search(&card, "t,w", SearchMode::PerCategory));
    }

    #[test]
    fn test_category_match_is_exact() {
        let card = CardFacets::new("Title", "Summary", "rust,webassembly");

        assert!(matches_category(&card, "rust"));
        assert!(matches_category(&card, "webassembly"));
        assert!(!matches_category(&card, "web"));
        assert!(!matches_category(&card, "Rust"));
        assert!(matches_category(&card, ALL_CATEGORIES));
    }

    #[test]
    fn test_all_never_hides_on_category_grounds() {
        let cards = vec![
            CardFacets::new("A", "a", ""),
            CardFacets::new("B", "b", "x,y"),
        ];
        let visible = visibility(&cards, &FilterState::new(), SearchMode::Substring);
        assert!(visible.iter().all(|v| *v));
    }

    #[test]
    fn test_go_rust_scenario() {
        let cards = go_and_rust();
        let mode = SearchMode::Substring;

        let (state, visible) = FilterState::new().apply(FilterEvent::Search("rust".into()), &cards, mode);
        assert_eq!(visible, vec![false, true]);

        let (state, visible) = state.apply(FilterEvent::SelectCategory("go".into()), &cards, mode);
        // "rust" still filters out the go card
        assert_eq!(visible, vec![false, false]);

        let (state, visible) = state.apply(FilterEvent::Search(String::new()), &cards, mode);
        assert_eq!(visible, vec![true, false]);
        assert_eq!(state.selected_category, "go");
    }

    #[test]
    fn test_search_does_not_change_category() {
        let cards = go_and_rust();
        let state = FilterState {
            selected_category: "rust".to_string(),
            query: String::new(),
        };

        let (state, _) = state.apply(FilterEvent::Search("tips".into()), &cards, SearchMode::Substring);

        assert_eq!(state.selected_category, "rust");
        assert_eq!(state.query, "tips");
    }

    #[test]
    fn test_visibility_preserves_card_count() {
        let cards = go_and_rust();
        let (_, visible) =
            FilterState::new().apply(FilterEvent::Search("zzz".into()), &cards, SearchMode::Substring);

        assert_eq!(visible.len(), cards.len());
        assert_eq!(visible, vec![false, false]);
    }

    #[test]
    fn test_active_flags_exactly_one() {
        let flags = active_flags(4, 2);

        assert_eq!(flags, vec![false, false, true, false]);
        assert_eq!(flags.iter().filter(|f| **f).count(), 1);
    }
}
