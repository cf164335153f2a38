use crate::types::{CandidateName, TickerSymbol};
use chrono::{DateTime, Utc};

/// One (candidate, article) pair that passed the co-occurrence test: the
/// candidate name and at least one ticker alias both appear in the article's
/// combined text. These are the atomic units the summaries roll up.
#[derive(Debug, Clone)]
pub struct MentionRecord {
    pub candidate: CandidateName,
    pub title: String,
    pub summary: String,
    pub sentence: String,
    pub tickers: Vec<TickerSymbol>,
    pub link: String,
    pub published: Option<DateTime<Utc>>,
}
