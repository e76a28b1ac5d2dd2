use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Response},
};

use super::found;
use crate::error::AppError;
use crate::models::NoteForm;
use crate::service;
use crate::state::AppState;
use crate::views::HtmlPresenter;

/// GET /notes/{id}
pub async fn list_notes(State(state): State<AppState>, Path(article_id): Path<String>) -> Response {
    let store = state.store.as_ref();

    let page = async {
        let article = store.find_article(&article_id).await?;
        let notes = service::list_notes_for_article(store, &article_id).await?;
        Ok::<_, AppError>(HtmlPresenter::new().render_notes(&article_id, article.as_ref(), &notes))
    };

    match page.await {
        Ok(html) => Html(html).into_response(),
        Err(e) => state.fail(e).await,
    }
}

/// POST /notes/{id}
pub async fn create_note(
    State(state): State<AppState>,
    Path(article_id): Path<String>,
    Form(form): Form<NoteForm>,
) -> Response {
    match service::create_note(state.store.as_ref(), &article_id, form.title, form.body).await {
        Ok(_) => found(&format!("/notes/{article_id}")),
        Err(e) => state.fail(e).await,
    }
}
