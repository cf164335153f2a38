use crate::constants::{BODY_EXCERPT_LIMIT, DEFAULT_MAX_TICKER_HITS, SENTENCE_LIMIT};
use crate::models::{AliasIndex, Article, BodyFetch, MentionRecord};
use crate::types::CandidateName;
use crate::utils::{extract_tickers, truncate_chars};

use log::debug;

/// Detects candidate/ticker co-occurrence at the document level.
pub struct MentionAggregator<'a> {
    alias_index: &'a AliasIndex,
    max_hits: usize,
}

impl<'a> MentionAggregator<'a> {
    pub fn new(alias_index: &'a AliasIndex) -> Self {
        MentionAggregator {
            alias_index,
            max_hits: DEFAULT_MAX_TICKER_HITS,
        }
    }

    /// Fetch each article's body (a failed fetch leaves it empty), build the combined
    /// title/summary/body blob, and emit one record per (candidate, article)
    /// pair whose combined text contains the candidate name and at least one
    /// ticker alias. A single article can yield records for several
    /// candidates. An empty result is a normal outcome, not an error.
    pub fn aggregate(
        &self,
        articles: &mut [Article],
        candidates: &[CandidateName],
        body_fetch: &impl BodyFetch,
    ) -> Vec<MentionRecord> {
        for article in articles.iter_mut() {
            article.body = body_fetch.fetch_body(&article.link);
        }

        let mut records = Vec::new();
        for article in articles.iter() {
            let combined = format!(
                "{}. {}. {}",
                article.title,
                article.summary,
                truncate_chars(&article.body, BODY_EXCERPT_LIMIT)
            );
            let combined_lower = combined.to_lowercase();

            for candidate in candidates {
                if !combined_lower.contains(&candidate.to_lowercase()) {
                    continue;
                }
                let Some(tickers) = extract_tickers(&combined, self.alias_index, self.max_hits)
                else {
                    continue;
                };
                debug!(
                    "{} co-mentioned with {:?} in {:?}",
                    candidate, tickers, article.link
                );
                records.push(MentionRecord {
                    candidate: candidate.clone(),
                    title: article.title.clone(),
                    summary: article.summary.clone(),
                    sentence: truncate_chars(&combined, SENTENCE_LIMIT).to_string(),
                    tickers,
                    link: article.link.clone(),
                    published: article.published,
                });
            }
        }
        records
    }
}
