use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;

use super::{new_id, RecordStore, StoreError};
use crate::models::{Article, ArticleFilter, NewArticle, NewNote, Note};

/// In-process [`RecordStore`] for tests and local experiments.
///
/// Article inserts can be delayed or made to fail by title, which lets tests
/// control the order in which concurrent writes complete.
#[derive(Debug, Default)]
pub struct MemoryStore {
    articles: Mutex<Vec<Article>>,
    notes: Mutex<Vec<Note>>,
    failing_titles: HashSet<String>,
    delays: HashMap<String, Duration>,
    fail_reads: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reject any article insert with this title.
    pub fn fail_article_titled(mut self, title: impl Into<String>) -> Self {
        self.failing_titles.insert(title.into());
        self
    }

    /// Hold article inserts with this title for `delay` before completing.
    pub fn delay_article_titled(mut self, title: impl Into<String>, delay: Duration) -> Self {
        self.delays.insert(title.into(), delay);
        self
    }

    /// Make every read fail from now on.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn check_reads(&self) -> Result<(), StoreError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            return Err(StoreError::Rejected("reads disabled".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn create_article(&self, article: NewArticle) -> Result<Article, StoreError> {
        if let Some(delay) = self.delays.get(&article.title) {
            tokio::time::sleep(*delay).await;
        }
        if self.failing_titles.contains(&article.title) {
            return Err(StoreError::Rejected(format!(
                "insert of {:?} refused",
                article.title
            )));
        }

        let created = Article {
            id: new_id(),
            title: article.title,
            link: article.link,
            saved: false,
            note: None,
        };
        self.articles.lock().await.push(created.clone());
        Ok(created)
    }

    async fn find_articles(&self, filter: ArticleFilter) -> Result<Vec<Article>, StoreError> {
        self.check_reads()?;
        let articles = self.articles.lock().await;
        Ok(articles.iter().filter(|a| filter.matches(a)).cloned().collect())
    }

    async fn find_article(&self, id: &str) -> Result<Option<Article>, StoreError> {
        self.check_reads()?;
        let articles = self.articles.lock().await;
        Ok(articles.iter().find(|a| a.id == id).cloned())
    }

    async fn set_saved(&self, id: &str, saved: bool) -> Result<bool, StoreError> {
        let mut articles = self.articles.lock().await;
        match articles.iter_mut().find(|a| a.id == id) {
            Some(article) => {
                article.saved = saved;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn set_article_note(&self, id: &str, note_id: &str) -> Result<bool, StoreError> {
        if !self.notes.lock().await.iter().any(|n| n.id == note_id) {
            return Err(StoreError::Rejected(format!("note {note_id} does not exist")));
        }
        let mut articles = self.articles.lock().await;
        match articles.iter_mut().find(|a| a.id == id) {
            Some(article) => {
                article.note = Some(note_id.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn create_note(&self, note: NewNote) -> Result<Note, StoreError> {
        let created = Note {
            id: new_id(),
            title: note.title,
            body: note.body,
            article: note.article,
        };
        self.notes.lock().await.push(created.clone());
        Ok(created)
    }

    async fn find_note(&self, id: &str) -> Result<Option<Note>, StoreError> {
        self.check_reads()?;
        let notes = self.notes.lock().await;
        Ok(notes.iter().find(|n| n.id == id).cloned())
    }

    async fn find_notes_for_article(&self, article_id: &str) -> Result<Vec<Note>, StoreError> {
        self.check_reads()?;
        let notes = self.notes.lock().await;
        Ok(notes
            .iter()
            .filter(|n| n.article.as_deref() == Some(article_id))
            .cloned()
            .collect())
    }
}
