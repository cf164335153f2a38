use crate::constants::DOC_API_FEED_TAG;
use crate::models::{Article, ArticleMeta, ArticleSearch, FetchWindow};

use chrono::{DateTime, Utc};
use log::{info, warn};
use std::collections::HashSet;

/// Drives one search call per fetch window and assembles the deduplicated
/// article corpus for a run.
pub struct ArticleCollector {
    max_records: u32,
}

impl ArticleCollector {
    pub fn new(max_records: u32) -> Self {
        ArticleCollector { max_records }
    }

    /// A failed window degrades to zero articles for that window and is
    /// logged with its failure kind; it never aborts the collection. Links
    /// are deduplicated across the whole run: the first occurrence wins,
    /// even across windows and candidates.
    pub fn collect(&self, windows: &[FetchWindow], search: &impl ArticleSearch) -> Vec<Article> {
        let mut seen_links: HashSet<String> = HashSet::new();
        let mut articles = Vec::new();

        for window in windows {
            let metas = match search.search(window, self.max_records) {
                Ok(metas) => metas,
                Err(err) => {
                    warn!(
                        "Window skipped for candidate {:?}: {}",
                        window.candidate, err
                    );
                    continue;
                }
            };

            for meta in metas {
                if meta.url.is_empty() || !seen_links.insert(meta.url.clone()) {
                    continue;
                }
                articles.push(Self::to_article(window, meta));
            }
        }

        info!("Collected {} articles.", articles.len());
        articles
    }

    fn to_article(window: &FetchWindow, meta: ArticleMeta) -> Article {
        let published = parse_seen_date(&meta.seendate);
        // Some entries arrive without a title; the seendate string is the
        // only stable fallback the payload offers.
        let title = if meta.title.is_empty() {
            meta.seendate
        } else {
            meta.title
        };
        Article {
            feed: DOC_API_FEED_TAG.to_string(),
            candidate: window.candidate.clone(),
            title,
            summary: meta.excerpt,
            link: meta.url,
            published,
            body: String::new(),
        }
    }
}

/// Timestamps arrive as `YYYY-MM-DDTHH:MM:SSZ`; anything else becomes `None`
/// rather than failing the record.
fn parse_seen_date(raw: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|parsed| parsed.with_timezone(&Utc))
}
