//! Collects candidate news via an external document-search API, matches
//! co-mentioned ticker symbols against a company-name alias index, and rolls
//! per-run counts into an append-only history table.
//!
//! The matcher is deliberately recall-biased: whole-word alias containment
//! over normalized text, guarded only by a minimum alias length and a small
//! symbol exclusion list.

pub mod config;
mod constants;
pub mod models;
pub mod types;
mod utils;

pub use config::RunConfig;
pub use constants::{CRYPTO_ENTRIES, DEFAULT_MAX_TICKER_HITS, SYMBOL_EXCLUSIONS};
pub use models::{
    AliasEntry, AliasIndex, AliasSource, Article, ArticleBodyFetcher, ArticleCollector,
    ArticleMeta, ArticleSearch, BodyFetch, CandidateSummary, DocApiClient, Error, FetchWindow,
    HistoryWriter, MentionAggregator, MentionRecord, RunMetadata, RunOutcome,
};
pub use types::{CandidateName, CompanyAlias, CompanyName, TickerMentionCount, TickerSymbol};
pub use utils::normalize_text;

use chrono::Utc;
use log::info;

/// Extract up to the default number of ticker symbols from `text`.
pub fn extract_tickers_from_text(
    text: &str,
    alias_index: &AliasIndex,
) -> Option<Vec<TickerSymbol>> {
    utils::extract_tickers(text, alias_index, DEFAULT_MAX_TICKER_HITS)
}

/// Extract ticker symbols with a caller-chosen cap. Symbols are tested in
/// alias-index build order, which is also the tie-break order when the cap
/// truncates.
pub fn extract_tickers_from_text_with_max_hits(
    text: &str,
    alias_index: &AliasIndex,
    max_hits: usize,
) -> Option<Vec<TickerSymbol>> {
    utils::extract_tickers(text, alias_index, max_hits)
}

/// Run the full pipeline: compose fetch windows, collect and deduplicate
/// articles, aggregate co-mentions, summarize, and persist the run tables.
///
/// An empty collection or aggregation result short-circuits into the matching
/// [`RunOutcome`] variant without touching any output file.
pub fn run_pipeline(
    cfg: &RunConfig,
    alias_index: &AliasIndex,
    search: &impl ArticleSearch,
    body_fetch: &impl BodyFetch,
) -> Result<RunOutcome, Error> {
    let windows = FetchWindow::compose(cfg);
    let collector = ArticleCollector::new(cfg.maxrecords);
    let mut articles = collector.collect(&windows, search);
    if articles.is_empty() {
        info!("No articles collected.");
        return Ok(RunOutcome::NoArticles);
    }

    let aggregator = MentionAggregator::new(alias_index);
    let records = aggregator.aggregate(&mut articles, &cfg.candidates, body_fetch);
    if records.is_empty() {
        info!("No candidate-ticker co-mentions found.");
        return Ok(RunOutcome::NoMentions);
    }

    let summaries = CandidateSummary::summarize(&records);
    let metadata = RunMetadata::from_config(cfg, Utc::now());
    let writer = HistoryWriter::new(cfg.data_path());
    writer.write_raw_mentions(&records)?;
    writer.write_summary(&summaries)?;
    writer.append_history(&summaries, &metadata)?;

    Ok(RunOutcome::Completed {
        articles: articles.len(),
        mentions: records.len(),
        summaries,
    })
}
