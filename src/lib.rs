/// article-shelf - article cards, search and filters for a static site
/// Built with Rust + WASM + Yew

pub mod anchor;
pub mod article;
pub mod config;
pub mod copy;
pub mod error;
pub mod feed;
pub mod filter;
pub mod page;
pub mod ui;

use wasm_bindgen::prelude::*;
use crate::config::PageConfig;

// Set up panic hook for better error messages in the browser console
#[wasm_bindgen(start)]
pub fn main() {
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}

// Start the articles page: full list, search and category filters
#[wasm_bindgen]
pub fn start_articles_page() {
    page::start(PageConfig::articles_page());
}

// Start the home page: latest article highlight
#[wasm_bindgen]
pub fn start_home_page() {
    page::start(PageConfig::home_page());
}

// Start with a page-supplied configuration; missing fields take defaults
#[wasm_bindgen]
pub fn boot(config: JsValue) {
    let config = if config.is_null() || config.is_undefined() {
        PageConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config).unwrap_or_else(|e| {
            log::error!("Invalid page config, using defaults: {:?}", e);
            PageConfig::default()
        })
    };
    page::start(config);
}

// Called from `onclick="copyCode(this)"` on code block buttons
#[wasm_bindgen(js_name = copyCode)]
pub fn copy_code(button: web_sys::HtmlElement) {
    page::clipboard::copy_code(button);
}
