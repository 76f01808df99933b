/// Page bootstrapping: loads the feed once and wires the configured features

pub mod clipboard;
pub mod filters;
pub mod scroll;

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Element, NodeList};
use yew::prelude::*;
use crate::article::{latest, Article};
use crate::config::PageConfig;
use crate::feed::load_articles;
use crate::ui::cards::{ArticleList, ArticleListProps, LatestArticle, LatestArticleProps};
use filters::FilterEngine;

/// Run every feature `config` enables on the current document, once the
/// document has finished parsing.
pub fn start(config: PageConfig) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        log::warn!("No document; nothing to initialise");
        return;
    };

    let ready_state = document.ready_state();
    let target = document.clone();
    if when_ready(&target, &ready_state, move || run(document, config)) {
        log::debug!("Document still loading; waiting for DOMContentLoaded");
    }
}

/// Run `body` now, or on `DOMContentLoaded` while the document is still
/// loading. Returns whether it was deferred.
pub fn when_ready(document: &Document, ready_state: &str, body: impl FnOnce() + 'static) -> bool {
    if ready_state != "loading" {
        body();
        return false;
    }

    let on_ready = Closure::once_into_js(body);
    if let Err(e) = document
        .add_event_listener_with_callback("DOMContentLoaded", on_ready.unchecked_ref::<js_sys::Function>())
    {
        log::error!("Failed to wait for DOMContentLoaded: {:?}", e);
    }
    true
}

fn run(document: Document, config: PageConfig) {
    if config.features.smooth_scroll {
        let watched = scroll::install_anchor_scroller(
            &document,
            &config.selectors.nav_links,
            config.scroll_offset,
        );
        log::debug!("Watching {} nav links", watched);
    }

    let list_container = config
        .features
        .article_list
        .then(|| find(&document, &config.selectors.article_list))
        .flatten();
    let latest_container = config
        .features
        .latest_article
        .then(|| find(&document, &config.selectors.latest_article))
        .flatten();

    if list_container.is_none() && latest_container.is_none() {
        return;
    }

    spawn_local(async move {
        let articles = load_articles(&config.feed_path).await;

        if let Some(container) = latest_container {
            populate_latest_article(container, &articles, &config);
        }
        if let Some(container) = list_container {
            populate_article_list(document, container, articles, &config);
        }
    });
}

/// Replace the container's content with one card per article, then bind the
/// filters once the cards are in the DOM.
pub fn populate_article_list(
    document: Document,
    container: Element,
    articles: Vec<Article>,
    config: &PageConfig,
) {
    container.set_inner_html("");

    let on_rendered = {
        let container = container.clone();
        let selectors = config.selectors.clone();
        let mode = config.search_mode;
        let filters = config.features.filters;

        Callback::from(move |count: usize| {
            log::debug!("Rendered {} article cards", count);
            if filters {
                FilterEngine::bind(&document, &container, &selectors, mode);
            }
        })
    };

    yew::Renderer::<ArticleList>::with_root_and_props(
        container,
        ArticleListProps {
            articles,
            on_rendered,
        },
    )
    .render();
}

/// Highlight the first article. An empty feed leaves the authored
/// placeholder in place.
pub fn populate_latest_article(container: Element, articles: &[Article], config: &PageConfig) {
    let Some(article) = latest(articles) else {
        log::debug!("No articles; keeping latest-article placeholder");
        return;
    };

    container.set_inner_html("");
    yew::Renderer::<LatestArticle>::with_root_and_props(
        container,
        LatestArticleProps {
            article: article.clone(),
            listing_href: AttrValue::from(config.listing_href.clone()),
        },
    )
    .render();
}

fn find(document: &Document, selector: &str) -> Option<Element> {
    match document.query_selector(selector) {
        Ok(Some(element)) => Some(element),
        Ok(None) => {
            log::debug!("{} not on this page", selector);
            None
        }
        Err(e) => {
            log::warn!("Invalid selector {}: {:?}", selector, e);
            None
        }
    }
}

/// Collect the element nodes of a `NodeList`.
pub(crate) fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}
