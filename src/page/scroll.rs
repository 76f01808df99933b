/// Smooth scrolling for same-page navigation links

use wasm_bindgen::prelude::*;
use web_sys::{Document, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions};
use crate::anchor::{is_same_page_anchor, scroll_top_for};
use super::elements;

/// Intercept clicks on nav links that target this page. Returns the number
/// of links watched.
pub fn install_anchor_scroller(document: &Document, selector: &str, header_offset: f64) -> usize {
    let links = document
        .query_selector_all(selector)
        .map(elements)
        .unwrap_or_default();

    for link in &links {
        let on_click = {
            let link = link.clone();
            Closure::<dyn FnMut(MouseEvent)>::new(move |event: MouseEvent| {
                let href = link.get_attribute("href").unwrap_or_default();
                if !is_same_page_anchor(&href) {
                    return;
                }
                event.prevent_default();
                scroll_to_target(&href, header_offset);
            })
        };
        if let Err(e) = link.add_event_listener_with_callback("click", on_click.as_ref().unchecked_ref()) {
            log::error!("Failed to listen for nav clicks: {:?}", e);
        }
        on_click.forget();
    }

    links.len()
}

/// Scroll to the element `href` selects. Unknown targets are ignored.
pub fn scroll_to_target(href: &str, header_offset: f64) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let target = match document.query_selector(href) {
        Ok(Some(target)) => target,
        Ok(None) => {
            log::debug!("No element matches {}", href);
            return;
        }
        Err(e) => {
            log::debug!("{} is not a usable selector: {:?}", href, e);
            return;
        }
    };
    let Some(target) = target.dyn_ref::<HtmlElement>() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(scroll_top_for(target.offset_top(), header_offset));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}
