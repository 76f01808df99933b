/// Loading the articles feed
use crate::article::Article;
use crate::error::{Error, Result};
use url::Url;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

/// Parse a feed body into articles, keeping feed order.
pub fn parse_feed(json: &str) -> Result<Vec<Article>> {
    Ok(serde_json::from_str(json)?)
}

/// Resolve the feed path against the page it is loaded from.
pub fn resolve_feed_url(base: &str, feed_path: &str) -> Result<String> {
    let base = Url::parse(base).map_err(|e| Error::fetch(format!("Bad base URL {}: {}", base, e)))?;
    let url = base
        .join(feed_path)
        .map_err(|e| Error::fetch(format!("Bad feed path {}: {}", feed_path, e)))?;
    Ok(url.to_string())
}

/// Fetch and parse the feed. Any failure is logged and yields no articles.
pub async fn load_articles(feed_path: &str) -> Vec<Article> {
    match fetch_articles(feed_path).await {
        Ok(articles) => {
            log::debug!("Loaded {} articles from {}", articles.len(), feed_path);
            articles
        }
        Err(e) => {
            log::error!("Error loading {}: {}", feed_path, e);
            Vec::new()
        }
    }
}

async fn fetch_articles(feed_path: &str) -> Result<Vec<Article>> {
    let window = web_sys::window().ok_or_else(|| Error::dom("no window"))?;
    let document = window.document().ok_or_else(|| Error::dom("no document"))?;

    let base = document
        .base_uri()
        .map_err(|e| Error::dom(format!("{:?}", e)))?
        .ok_or_else(|| Error::dom("document has no base URI"))?;
    let url = resolve_feed_url(&base, feed_path)?;

    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|e| Error::fetch(format!("{:?}", e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| Error::fetch("fetch did not resolve to a Response"))?;

    if !response.ok() {
        return Err(Error::Status {
            status: response.status(),
            url,
        });
    }

    let body = response.text().map_err(|e| Error::fetch(format!("{:?}", e)))?;
    let body = JsFuture::from(body)
        .await
        .map_err(|e| Error::fetch(format!("Failed to read body: {:?}", e)))?;
    let body = body
        .as_string()
        .ok_or_else(|| Error::fetch("response body is not text"))?;

    parse_feed(&body)
}
