use crate::types::CandidateName;
use chrono::{DateTime, Utc};

/// One collected article. `link` is the dedup key across the whole run;
/// `candidate` records which query window produced it. `body` starts empty
/// and is attached once the body-fetch collaborator has run.
#[derive(Debug, Clone)]
pub struct Article {
    pub feed: String,
    pub candidate: CandidateName,
    pub title: String,
    pub summary: String,
    pub link: String,
    pub published: Option<DateTime<Utc>>,
    pub body: String,
}
