//! Article and note operations shared by the HTTP handlers.

use tracing::{info, instrument, warn};

use crate::error::AppError;
use crate::models::{Article, ArticleFilter, ArticleWithNote, NewNote, Note, NotePayload};
use crate::store::RecordStore;

pub async fn list_articles(store: &dyn RecordStore) -> Result<Vec<Article>, AppError> {
    Ok(store.find_articles(ArticleFilter::All).await?)
}

pub async fn list_favorites(store: &dyn RecordStore) -> Result<Vec<Article>, AppError> {
    Ok(store.find_articles(ArticleFilter::Saved).await?)
}

#[instrument(level = "info", skip(store))]
pub async fn set_favorite(
    store: &dyn RecordStore,
    article_id: &str,
    make_favorite: bool,
) -> Result<(), AppError> {
    if !store.set_saved(article_id, make_favorite).await? {
        return Err(AppError::article_not_found(article_id));
    }
    Ok(())
}

/// `None` when the article does not exist.
pub async fn get_article_with_note(
    store: &dyn RecordStore,
    article_id: &str,
) -> Result<Option<ArticleWithNote>, AppError> {
    let found = store.find_article_with_note(article_id).await?;
    Ok(found.map(|(article, note)| ArticleWithNote::new(article, note)))
}

pub async fn list_notes_for_article(
    store: &dyn RecordStore,
    article_id: &str,
) -> Result<Vec<Note>, AppError> {
    Ok(store.find_notes_for_article(article_id).await?)
}

/// Add a note to an article's note list without touching `Article.note`.
#[instrument(level = "info", skip(store, title, body))]
pub async fn create_note(
    store: &dyn RecordStore,
    article_id: &str,
    title: String,
    body: String,
) -> Result<Note, AppError> {
    let note = store
        .create_note(NewNote {
            title,
            body,
            article: Some(article_id.to_string()),
        })
        .await?;
    info!(note_id = %note.id, "note created");
    Ok(note)
}

/// Store the payload as a new note and make it the article's current note.
///
/// The note's own `article` field comes from the payload, so an attached note
/// only shows up in the article's note list when the payload names it.
/// Returns `None` without storing anything when the article does not exist.
#[instrument(level = "info", skip(store, payload))]
pub async fn attach_note(
    store: &dyn RecordStore,
    article_id: &str,
    payload: NotePayload,
) -> Result<Option<Note>, AppError> {
    let new_note = payload.validate()?;

    if store.find_article(article_id).await?.is_none() {
        warn!("no such article, note not stored");
        return Ok(None);
    }

    let note = store.create_note(new_note).await?;
    if !store.set_article_note(article_id, &note.id).await? {
        warn!(note_id = %note.id, "article vanished before the note was attached");
    } else {
        info!(note_id = %note.id, "note attached");
    }
    Ok(Some(note))
}
