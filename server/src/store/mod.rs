//! Persistence for articles and notes.
//!
//! Handlers and the scrape pipeline only see [`RecordStore`]; the running
//! server uses [`SqlStore`] and tests can swap in [`MemoryStore`].

pub mod memory;
pub mod sql;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::{Article, ArticleFilter, NewArticle, NewNote, Note};

pub use memory::MemoryStore;
pub use sql::SqlStore;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("write rejected: {0}")]
    Rejected(String),
}

#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert an article with `saved = false` and no note.
    async fn create_article(&self, article: NewArticle) -> Result<Article, StoreError>;

    /// Articles matching `filter`, in insertion order.
    async fn find_articles(&self, filter: ArticleFilter) -> Result<Vec<Article>, StoreError>;

    async fn find_article(&self, id: &str) -> Result<Option<Article>, StoreError>;

    /// Returns `false` when no article has that id.
    async fn set_saved(&self, id: &str, saved: bool) -> Result<bool, StoreError>;

    /// Point `Article.note` at `note_id`. Returns `false` when no article has that id.
    async fn set_article_note(&self, id: &str, note_id: &str) -> Result<bool, StoreError>;

    async fn create_note(&self, note: NewNote) -> Result<Note, StoreError>;

    async fn find_note(&self, id: &str) -> Result<Option<Note>, StoreError>;

    /// Every note whose `article` is `article_id`, in insertion order.
    async fn find_notes_for_article(&self, article_id: &str) -> Result<Vec<Note>, StoreError>;

    /// Fetch an article and resolve its note reference.
    async fn find_article_with_note(
        &self,
        id: &str,
    ) -> Result<Option<(Article, Option<Note>)>, StoreError> {
        let Some(article) = self.find_article(id).await? else {
            return Ok(None);
        };
        let note = match article.note.as_deref() {
            Some(note_id) => self.find_note(note_id).await?,
            None => None,
        };
        Ok(Some((article, note)))
    }
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
