use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::found;
use crate::models::NotePayload;
use crate::service;
use crate::state::AppState;
use crate::views::HtmlPresenter;

/// GET /
pub async fn index() -> Response {
    found("/articles")
}

/// GET /articles
pub async fn list_articles(State(state): State<AppState>) -> Response {
    match service::list_articles(state.store.as_ref()).await {
        Ok(articles) => Html(HtmlPresenter::new().render_index(&articles)).into_response(),
        Err(e) => state.fail(e).await,
    }
}

/// GET /favorite-articles
pub async fn list_favorites(State(state): State<AppState>) -> Response {
    match service::list_favorites(state.store.as_ref()).await {
        Ok(articles) => Html(HtmlPresenter::new().render_favorites(&articles)).into_response(),
        Err(e) => state.fail(e).await,
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct FavoriteForm {
    #[serde(rename = "type", default)]
    pub kind: String,
}

/// POST /favorite-articles/{id}
///
/// Only `type=favorite` saves; anything else clears the flag. The redirect
/// follows the requested action, not the resulting state.
pub async fn set_favorite(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Form(form): Form<FavoriteForm>,
) -> Response {
    let make_favorite = form.kind == "favorite";

    match service::set_favorite(state.store.as_ref(), &article_id, make_favorite).await {
        Ok(()) if form.kind == "unfavorite" => found("/favorite-articles"),
        Ok(()) => found("/articles"),
        Err(e) => state.fail(e).await,
    }
}

/// GET /articles/{id}
///
/// Answers `null` for an unknown id.
pub async fn get_article(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
) -> Response {
    match service::get_article_with_note(state.store.as_ref(), &article_id).await {
        Ok(article) => Json(article).into_response(),
        Err(e) => state.fail(e).await,
    }
}

/// POST /articles/{id}
///
/// Redirects to the notes page even when the article is unknown.
pub async fn attach_note(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Form(payload): Form<NotePayload>,
) -> Response {
    match service::attach_note(state.store.as_ref(), &article_id, payload).await {
        Ok(_) => found(&format!("/notes/{article_id}")),
        Err(e) => state.fail(e).await,
    }
}
