use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use super::{new_id, RecordStore, StoreError};
use crate::models::{Article, ArticleFilter, NewArticle, NewNote, Note};

/// [`RecordStore`] backed by a shared SQLite pool.
#[derive(Clone, Debug)]
pub struct SqlStore {
    pool: SqlitePool,
}

impl SqlStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl RecordStore for SqlStore {
    #[instrument(level = "debug", skip(self))]
    async fn create_article(&self, article: NewArticle) -> Result<Article, StoreError> {
        let id = new_id();
        sqlx::query("INSERT INTO articles (id, title, link) VALUES (?, ?, ?)")
            .bind(&id)
            .bind(&article.title)
            .bind(&article.link)
            .execute(&self.pool)
            .await?;

        Ok(Article {
            id,
            title: article.title,
            link: article.link,
            saved: false,
            note: None,
        })
    }

    async fn find_articles(&self, filter: ArticleFilter) -> Result<Vec<Article>, StoreError> {
        let sql = match filter {
            ArticleFilter::All => {
                "SELECT id, title, link, saved, note FROM articles ORDER BY rowid"
            }
            ArticleFilter::Saved => {
                "SELECT id, title, link, saved, note FROM articles WHERE saved = 1 ORDER BY rowid"
            }
        };
        let articles = sqlx::query_as::<_, Article>(sql)
            .fetch_all(&self.pool)
            .await?;
        Ok(articles)
    }

    async fn find_article(&self, id: &str) -> Result<Option<Article>, StoreError> {
        let article = sqlx::query_as::<_, Article>(
            "SELECT id, title, link, saved, note FROM articles WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(article)
    }

    #[instrument(level = "debug", skip(self))]
    async fn set_saved(&self, id: &str, saved: bool) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE articles SET saved = ? WHERE id = ?")
            .bind(saved)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(level = "debug", skip(self))]
    async fn set_article_note(&self, id: &str, note_id: &str) -> Result<bool, StoreError> {
        let result = sqlx::query("UPDATE articles SET note = ? WHERE id = ?")
            .bind(note_id)
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    #[instrument(level = "debug", skip(self, note))]
    async fn create_note(&self, note: NewNote) -> Result<Note, StoreError> {
        let id = new_id();
        sqlx::query("INSERT INTO notes (id, title, body, article) VALUES (?, ?, ?, ?)")
            .bind(&id)
            .bind(&note.title)
            .bind(&note.body)
            .bind(&note.article)
            .execute(&self.pool)
            .await?;

        Ok(Note {
            id,
            title: note.title,
            body: note.body,
            article: note.article,
        })
    }

    async fn find_note(&self, id: &str) -> Result<Option<Note>, StoreError> {
        let note = sqlx::query_as::<_, Note>(
            "SELECT id, title, body, article FROM notes WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(note)
    }

    async fn find_notes_for_article(&self, article_id: &str) -> Result<Vec<Note>, StoreError> {
        let notes = sqlx::query_as::<_, Note>(
            "SELECT id, title, body, article FROM notes WHERE article = ? ORDER BY rowid",
        )
        .bind(article_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(notes)
    }

    async fn find_article_with_note(
        &self,
        id: &str,
    ) -> Result<Option<(Article, Option<Note>)>, StoreError> {
        let row: Option<ArticleNoteRow> = sqlx::query_as(
            r#"
            SELECT a.id, a.title, a.link, a.saved, a.note,
                   n.id AS note_id, n.title AS note_title, n.body AS note_body,
                   n.article AS note_article
            FROM articles a
            LEFT JOIN notes n ON n.id = a.note
            WHERE a.id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(ArticleNoteRow::split))
    }
}

#[derive(sqlx::FromRow)]
struct ArticleNoteRow {
    id: String,
    title: String,
    link: String,
    saved: bool,
    note: Option<String>,
    note_id: Option<String>,
    note_title: Option<String>,
    note_body: Option<String>,
    note_article: Option<String>,
}

impl ArticleNoteRow {
    fn split(self) -> (Article, Option<Note>) {
        let note = self.note_id.map(|note_id| Note {
            id: note_id,
            title: self.note_title.unwrap_or_default(),
            body: self.note_body.unwrap_or_default(),
            article: self.note_article,
        });
        let article = Article {
            id: self.id,
            title: self.title,
            link: self.link,
            saved: self.saved,
            note: self.note,
        };
        (article, note)
    }
}
