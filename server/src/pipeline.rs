//! Fetch the listing page, extract its headings and store one article per
//! heading.
//!
//! Every insert is issued up front and the results are handled in whatever
//! order the store finishes them. Completion is keyed on position: the signal
//! fires when the insert for the *last extracted heading* succeeds, no matter
//! how many of the others have finished or failed. A listing with no headings,
//! or whose last insert fails, never signals.

use futures::stream::{FuturesUnordered, StreamExt};
use news_scraper::{
    scraper::{extract_articles, PageFetcher},
    FetchError,
};
use tokio::sync::oneshot;
use tracing::{debug, error, info, instrument, warn};

use crate::models::Article;
use crate::store::{RecordStore, StoreError};

/// Fired once the positionally last article has been stored.
pub type CompletionSignal = oneshot::Sender<()>;

#[derive(Debug, Default)]
pub struct ScrapeReport {
    /// Headings found on the page.
    pub matched: usize,
    /// Stored articles with their position on the page, in completion order.
    pub created: Vec<(usize, Article)>,
    pub failures: Vec<(usize, StoreError)>,
    /// Whether the completion signal fired.
    pub completed: bool,
}

impl ScrapeReport {
    /// Completion fired even though some other insert failed.
    pub fn completed_with_failures(&self) -> bool {
        self.completed && !self.failures.is_empty()
    }
}

#[instrument(level = "info", skip(fetcher, store, completion))]
pub async fn scrape(
    fetcher: &dyn PageFetcher,
    store: &dyn RecordStore,
    source_url: &str,
    completion: Option<CompletionSignal>,
) -> Result<ScrapeReport, FetchError> {
    let html = match fetcher.fetch(source_url).await {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, "could not fetch source page");
            return Err(e);
        }
    };

    let scraped = extract_articles(&html);
    let matched = scraped.len();
    let mut report = ScrapeReport {
        matched,
        ..Default::default()
    };
    if matched == 0 {
        warn!("no article headings on the page, nothing to store");
        return Ok(report);
    }

    let mut completion = completion;
    let mut pending: FuturesUnordered<_> = scraped
        .into_iter()
        .enumerate()
        .map(|(index, item)| async move { (index, store.create_article(item.into()).await) })
        .collect();

    while let Some((index, result)) = pending.next().await {
        match result {
            Ok(article) => {
                debug!(index, article_id = %article.id, "article stored");
                if index == matched - 1 {
                    info!(index, matched, "last article stored, signalling completion");
                    if let Some(signal) = completion.take() {
                        // receiver may have gone away with the client
                        let _ = signal.send(());
                    }
                    report.completed = true;
                }
                report.created.push((index, article));
            }
            Err(e) => {
                error!(index, error = %e, "could not store article");
                report.failures.push((index, e));
            }
        }
    }

    if report.completed_with_failures() {
        warn!(
            failed = report.failures.len(),
            "completion was signalled although some articles were not stored"
        );
    }
    info!(
        matched,
        created = report.created.len(),
        failed = report.failures.len(),
        "scrape finished"
    );
    Ok(report)
}
