//! Scrape a news listing into SQLite, then browse, favorite and annotate the
//! articles through a small server-rendered site.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod pipeline;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod views;

use axum::Router;
use std::path::Path;
use tower_http::{services::ServeDir, trace::TraceLayer};

use routes::{articles::article_routes, notes::note_routes};
use state::AppState;

/// All application routes, with static files from `static_dir` as fallback.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .merge(article_routes())
        .merge(note_routes())
        .fallback_service(ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
