pub mod scraper;
pub mod utils;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Listing page scraped when nothing else is configured.
pub const DEFAULT_SOURCE_URL: &str = "http://www.echojs.com/";

/// One title/link pair pulled out of a listing page.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct ScrapedArticle {
    pub title: String,
    pub link: String,
}

impl ScrapedArticle {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid source url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} answered with HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("fetch failed: {0}")]
    Other(String),
}
