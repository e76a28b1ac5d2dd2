use crate::{FetchError, ScrapedArticle};
use ::scraper::{ElementRef, Html, Selector};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, instrument, warn};
use url::Url;

/// Headings inside article containers, in document order.
pub const ARTICLE_HEADING_SELECTOR: &str = "article h2";

/// Source of raw listing pages.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<String, FetchError>;
}

/// Fetches pages over HTTP. No timeout unless one is configured.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Option<Duration>) -> Result<Self, FetchError> {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|e| FetchError::Other(e.to_string()))?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    #[instrument(level = "info", skip(self))]
    async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let parsed = Url::parse(url).map_err(|source| FetchError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let res = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(|source| FetchError::Request {
                url: url.to_string(),
                source,
            })?;

        if !res.status().is_success() {
            warn!(%url, status = %res.status(), "source page returned an error status");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: res.status().as_u16(),
            });
        }

        let body = res.text().await.map_err(|source| FetchError::Request {
            url: url.to_string(),
            source,
        })?;
        debug!(%url, bytes = body.len(), "fetched source page");
        Ok(body)
    }
}

/// Pull every `article h2` heading out of `html`.
///
/// The title is the text of the heading's direct `<a>` children and the link
/// is the `href` of the first of them. Either is empty when missing, so the
/// result always has one entry per matched heading.
pub fn extract_articles(html: &str) -> Vec<ScrapedArticle> {
    let doc = Html::parse_document(html);
    let heading_selector = Selector::parse(ARTICLE_HEADING_SELECTOR).unwrap();

    let articles: Vec<ScrapedArticle> = doc
        .select(&heading_selector)
        .map(|heading| {
            let anchors: Vec<ElementRef> = heading
                .children()
                .filter_map(ElementRef::wrap)
                .filter(|el| el.value().name() == "a")
                .collect();

            let title = anchors
                .iter()
                .flat_map(|a| a.text())
                .collect::<String>();
            let link = anchors
                .first()
                .and_then(|a| a.value().attr("href"))
                .unwrap_or_default()
                .to_string();

            ScrapedArticle { title, link }
        })
        .collect();

    info!(count = articles.len(), "extracted article headings");
    articles
}

/// Fetch `url` and extract its articles in one go.
pub async fn scrape_listing(
    fetcher: &dyn PageFetcher,
    url: &str,
) -> Result<Vec<ScrapedArticle>, FetchError> {
    let html = fetcher.fetch(url).await?;
    Ok(extract_articles(&html))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedFetcher(&'static str);

    #[async_trait]
    impl PageFetcher for CannedFetcher {
        async fn fetch(&self, _url: &str) -> Result<String, FetchError> {
            Ok(self.0.to_string())
        }
    }

    const LISTING: &str = r#"
        <html><body>
          <article><h2><a href="/a1">T1</a></h2></article>
          <article><h2><a href="/a2">T2</a></h2><p>ignored</p></article>
          <article><h2><a href="/a3">T3</a></h2></article>
        </body></html>
    "#;

    #[test]
    fn extracts_headings_in_document_order() {
        let articles = extract_articles(LISTING);

        assert_eq!(
            articles,
            vec![
                ScrapedArticle::new("T1", "/a1"),
                ScrapedArticle::new("T2", "/a2"),
                ScrapedArticle::new("T3", "/a3"),
            ]
        );
    }

    #[test]
    fn heading_without_link_yields_empty_fields() {
        let html = "<article><h2>Plain heading</h2></article>";

        let articles = extract_articles(html);

        assert_eq!(articles, vec![ScrapedArticle::default()]);
        assert!(articles[0].link.is_empty());
    }

    #[test]
    fn anchor_without_href_keeps_title() {
        let html = "<article><h2><a>No href</a></h2></article>";

        let articles = extract_articles(html);

        assert_eq!(articles, vec![ScrapedArticle::new("No href", "")]);
    }

    #[test]
    fn only_direct_anchor_children_count() {
        let html = r#"<article><h2><span><a href="/nested">Nested</a></span></h2></article>"#;

        let articles = extract_articles(html);

        assert_eq!(articles, vec![ScrapedArticle::default()]);
    }

    #[test]
    fn headings_outside_articles_are_ignored() {
        let html = r#"<h2><a href="/x">Outside</a></h2><div><h2><a href="/y">Y</a></h2></div>"#;

        assert!(extract_articles(html).is_empty());
    }

    #[test]
    fn multiple_anchors_concatenate_text_and_use_first_href() {
        let html = r#"<article><h2><a href="/first">Foo</a><a href="/second">Bar</a></h2></article>"#;

        let articles = extract_articles(html);

        assert_eq!(articles, vec![ScrapedArticle::new("FooBar", "/first")]);
    }

    #[tokio::test]
    async fn scrape_listing_fetches_then_extracts() {
        let fetcher = CannedFetcher(LISTING);

        let articles = scrape_listing(&fetcher, "http://example.test/").await.unwrap();

        assert_eq!(articles.len(), 3);
        assert_eq!(articles[2].title, "T3");
    }

    #[tokio::test]
    async fn http_fetcher_rejects_malformed_url() {
        let fetcher = HttpFetcher::new(None).unwrap();

        let err = fetcher.fetch("not a url").await.unwrap_err();

        assert!(matches!(err, FetchError::InvalidUrl { .. }));
    }
}
