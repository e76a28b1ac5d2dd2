use news_scraper::scraper::PageFetcher;
use std::sync::Arc;
use axum::response::{IntoResponse, Response};
use tracing::error;

use crate::config::FailurePolicy;
use crate::error::AppError;
use crate::store::RecordStore;

/// Shared by every handler: the store handle, the page fetcher and the
/// failure policy.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub fetcher: Arc<dyn PageFetcher>,
    pub source_url: String,
    pub failure_policy: FailurePolicy,
}

impl AppState {
    pub fn new(
        store: Arc<dyn RecordStore>,
        fetcher: Arc<dyn PageFetcher>,
        source_url: impl Into<String>,
        failure_policy: FailurePolicy,
    ) -> Self {
        AppState {
            store,
            fetcher,
            source_url: source_url.into(),
            failure_policy,
        }
    }

    /// Log `err` and answer according to the failure policy. Under
    /// [`FailurePolicy::Legacy`] this never returns.
    pub async fn fail(&self, err: AppError) -> Response {
        error!(error = %err, "request failed");
        match self.failure_policy {
            FailurePolicy::Legacy => std::future::pending().await,
            FailurePolicy::Report => err.into_response(),
        }
    }
}
