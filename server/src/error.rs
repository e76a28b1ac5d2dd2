use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use news_scraper::FetchError;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("could not fetch source page: {0}")]
    Fetch(#[from] FetchError),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    #[error("{kind} not found: {id}")]
    NotFound { kind: &'static str, id: String },
    #[error("invalid note: {0}")]
    InvalidNote(String),
    #[error("scrape matched {matched} headings but never completed ({failed} writes failed)")]
    ScrapeIncomplete { matched: usize, failed: usize },
    #[error("scrape task aborted: {0}")]
    TaskAborted(String),
}

impl AppError {
    pub fn article_not_found(id: &str) -> Self {
        AppError::NotFound {
            kind: "article",
            id: id.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Fetch(_) | AppError::ScrapeIncomplete { .. } => StatusCode::BAD_GATEWAY,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::InvalidNote(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Store(_) | AppError::TaskAborted(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        (
            self.status(),
            Json(json!({ "message": self.to_string() })),
        )
            .into_response()
    }
}
