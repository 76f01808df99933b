/// Error types for article-shelf
///
/// Nothing here is fatal: every caller logs the error and degrades to an
/// inert page state.
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// The fetch promise rejected (network failure, CORS, bad URL).
    #[error("Fetch failed: {0}")]
    Fetch(String),

    /// The server answered with a non-success status.
    #[error("Unexpected HTTP status {status} for {url}")]
    Status { status: u16, url: String },

    /// The feed body was not a valid article array.
    #[error("Failed to parse feed: {0}")]
    Parse(#[from] serde_json::Error),

    /// The clipboard write was rejected or is unavailable.
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    /// An expected element or browser object was missing.
    #[error("DOM error: {0}")]
    Dom(String),

    /// The page configuration could not be read.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    pub fn fetch(msg: impl Into<String>) -> Self {
        Self::Fetch(msg.into())
    }

    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }

    pub fn dom(msg: impl Into<String>) -> Self {
        Self::Dom(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
