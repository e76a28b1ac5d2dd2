use anyhow::Result;
use async_trait::async_trait;
use news_scraper::{scraper::PageFetcher, FetchError};
use news_server::{
    build_router, config::FailurePolicy, db, models::NewArticle, state::AppState,
    store::{RecordStore, SqlStore},
};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Serves a canned page, or fails, without touching the network.
#[allow(dead_code)]
pub struct StubFetcher {
    page: Option<String>,
    pub calls: AtomicUsize,
}

#[allow(dead_code)]
impl StubFetcher {
    pub fn serving(html: impl Into<String>) -> Self {
        Self {
            page: Some(html.into()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            page: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.page
            .clone()
            .ok_or_else(|| FetchError::Other("connection refused".to_string()))
    }
}

/// A listing page with one `<article><h2><a>` entry per title, linked `/a1`, `/a2`, ...
#[allow(dead_code)]
pub fn listing_html(titles: &[&str]) -> String {
    let entries: String = titles
        .iter()
        .enumerate()
        .map(|(i, t)| format!("<article><h2><a href=\"/a{}\">{}</a></h2></article>\n", i + 1, t))
        .collect();
    format!("<html><body>\n{entries}</body></html>")
}

/// SQL store on a private in-memory database.
#[allow(dead_code)]
pub async fn sql_store() -> Result<SqlStore> {
    // one connection, otherwise each pooled connection sees its own empty database
    let pool = db::init_db("sqlite::memory:", 1).await?;
    Ok(SqlStore::new(pool))
}

#[allow(dead_code)]
pub async fn seed_articles(store: &dyn RecordStore, titles: &[&str]) -> Result<Vec<String>> {
    let mut ids = Vec::new();
    for (i, title) in titles.iter().enumerate() {
        let article = store
            .create_article(NewArticle {
                title: title.to_string(),
                link: format!("http://news.test/{}", i + 1),
            })
            .await?;
        ids.push(article.id);
    }
    Ok(ids)
}

#[allow(dead_code)]
pub fn app(
    store: Arc<dyn RecordStore>,
    fetcher: Arc<dyn PageFetcher>,
    failure_policy: FailurePolicy,
) -> axum::Router {
    let state = AppState::new(store, fetcher, "http://news.test/", failure_policy);
    build_router(state, Path::new(concat!(env!("CARGO_MANIFEST_DIR"), "/../public")))
}
