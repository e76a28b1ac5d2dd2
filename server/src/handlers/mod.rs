pub mod article_handlers;
pub mod note_handlers;
pub mod scrape_handler;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

/// 302 Found to `location`.
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(header::LOCATION, location.to_string())]).into_response()
}
