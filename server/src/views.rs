//! Server-rendered pages: the article listing, favorites and an article's notes.
use html_escape::{encode_double_quoted_attribute, encode_text};

use crate::models::{Article, Note};

#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlPresenter;

impl HtmlPresenter {
    pub fn new() -> Self {
        Self
    }

    pub fn render_index(&self, articles: &[Article]) -> String {
        let body = if articles.is_empty() {
            r#"<p class="empty">No articles yet. <a href="/scrape">Scrape the news</a>.</p>"#
                .to_string()
        } else {
            self.article_list(articles, false)
        };
        layout("Latest news", &body)
    }

    pub fn render_favorites(&self, articles: &[Article]) -> String {
        let body = if articles.is_empty() {
            r#"<p class="empty">No favorites saved.</p>"#.to_string()
        } else {
            self.article_list(articles, true)
        };
        layout("Favorite articles", &body)
    }

    /// `article` may be missing; the page still lists notes filed under `id`.
    pub fn render_notes(&self, id: &str, article: Option<&Article>, notes: &[Note]) -> String {
        let id_attr = encode_double_quoted_attribute(id);
        let heading = match article {
            Some(a) => format!(
                r#"<h2><a href="{}">{}</a></h2>"#,
                encode_double_quoted_attribute(&a.link),
                encode_text(&a.title)
            ),
            None => "<h2>Notes</h2>".to_string(),
        };

        let list = if notes.is_empty() {
            r#"<p class="empty">No notes for this article.</p>"#.to_string()
        } else {
            let items: String = notes
                .iter()
                .map(|n| {
                    format!(
                        "<li class=\"note\"><h3>{}</h3><p>{}</p></li>\n",
                        encode_text(&n.title),
                        encode_text(&n.body)
                    )
                })
                .collect();
            format!("<ul class=\"notes\">\n{items}</ul>")
        };

        let form = format!(
            r#"<form method="post" action="/notes/{id_attr}">
  <input type="text" name="title" placeholder="Title">
  <textarea name="body" placeholder="Your note"></textarea>
  <button type="submit">Save note</button>
</form>"#
        );

        layout("Notes", &format!("{heading}\n{list}\n{form}"))
    }

    fn article_list(&self, articles: &[Article], favorites_page: bool) -> String {
        let items: String = articles
            .iter()
            .map(|a| {
                let id = encode_double_quoted_attribute(&a.id);
                let (action, label) = match (favorites_page, a.saved) {
                    (true, _) | (false, true) => ("unfavorite", "Unfavorite"),
                    (false, false) => ("favorite", "Favorite"),
                };
                format!(
                    r#"<li class="article">
  <a href="{link}">{title}</a>
  <form method="post" action="/favorite-articles/{id}">
    <input type="hidden" name="type" value="{action}">
    <button type="submit">{label}</button>
  </form>
  <a class="notes-link" href="/notes/{id}">Notes</a>
</li>
"#,
                    link = encode_double_quoted_attribute(&a.link),
                    title = encode_text(&a.title),
                )
            })
            .collect();
        format!("<ul class=\"articles\">\n{items}</ul>")
    }
}

fn layout(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <link rel="stylesheet" href="/style.css">
</head>
<body>
<nav>
    <a href="/articles">Articles</a>
    <a href="/favorite-articles">Favorites</a>
    <a href="/scrape">Scrape</a>
</nav>
<main>
<h1>{title}</h1>
{body}
</main>
</body>
</html>
"#,
        title = encode_text(title),
    )
}
