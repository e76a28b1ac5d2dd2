use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::note::Note;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub link: String,
    pub saved: bool,
    /// Most recently attached note, if any.
    pub note: Option<String>,
}

/// Fields the scrape pipeline supplies; the store assigns the rest.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NewArticle {
    pub title: String,
    pub link: String,
}

impl From<news_scraper::ScrapedArticle> for NewArticle {
    fn from(scraped: news_scraper::ScrapedArticle) -> Self {
        Self {
            title: scraped.title,
            link: scraped.link,
        }
    }
}

/// Which articles a listing should return.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ArticleFilter {
    #[default]
    All,
    Saved,
}

impl ArticleFilter {
    pub fn matches(&self, article: &Article) -> bool {
        match self {
            ArticleFilter::All => true,
            ArticleFilter::Saved => article.saved,
        }
    }
}

/// An article with its `note` reference resolved, as served by `GET /articles/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ArticleWithNote {
    pub id: String,
    pub title: String,
    pub link: String,
    pub saved: bool,
    pub note: Option<Note>,
}

impl ArticleWithNote {
    pub fn new(article: Article, note: Option<Note>) -> Self {
        Self {
            id: article.id,
            title: article.title,
            link: article.link,
            saved: article.saved,
            note,
        }
    }
}
