use axum::{extract::State, response::Response};
use tokio::sync::oneshot;
use tracing::{info, warn};

use super::found;
use crate::error::AppError;
use crate::pipeline;
use crate::state::AppState;

/// GET /scrape
///
/// Runs the pipeline in the background and redirects as soon as it signals
/// completion; writes still in flight keep going after the response.
pub async fn scrape(State(state): State<AppState>) -> Response {
    let (signal, completed) = oneshot::channel();

    let task_state = state.clone();
    let task = tokio::spawn(async move {
        pipeline::scrape(
            task_state.fetcher.as_ref(),
            task_state.store.as_ref(),
            &task_state.source_url,
            Some(signal),
        )
        .await
    });

    if completed.await.is_ok() {
        info!("scrape completed, redirecting to listing");
        return found("/articles");
    }

    // The signal was dropped unfired, so the pipeline has already returned.
    let err = match task.await {
        Ok(Ok(report)) => {
            warn!(matched = report.matched, failed = report.failures.len(), "scrape did not complete");
            AppError::ScrapeIncomplete {
                matched: report.matched,
                failed: report.failures.len(),
            }
        }
        Ok(Err(fetch_err)) => AppError::Fetch(fetch_err),
        Err(join_err) => AppError::TaskAborted(join_err.to_string()),
    };
    state.fail(err).await
}
