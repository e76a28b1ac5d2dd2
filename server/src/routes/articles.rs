use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::article_handlers::{
    attach_note, get_article, index, list_articles, list_favorites, set_favorite,
};
use crate::handlers::scrape_handler::scrape;
use crate::state::AppState;

pub fn article_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/scrape", get(scrape))
        .route("/articles", get(list_articles))
        .route("/articles/{id}", get(get_article).post(attach_note))
        .route("/favorite-articles", get(list_favorites))
        .route("/favorite-articles/{id}", post(set_favorite))
}
