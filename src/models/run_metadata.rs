use crate::config::RunConfig;
use crate::models::fetch_window::parse_date_range;
use crate::types::CandidateName;

use chrono::{DateTime, Datelike, Utc};

/// The parameters a run was launched with, stamped onto every history row.
#[derive(Debug, Clone)]
pub struct RunMetadata {
    pub run_at_utc: DateTime<Utc>,
    pub date_range: Option<String>,
    pub timespan: String,
    pub keywords: Vec<String>,
    pub domain_whitelist: Vec<String>,
    pub source_lang: Option<String>,
    pub source_country: Option<String>,
    pub candidates: Vec<CandidateName>,
}

impl RunMetadata {
    pub fn from_config(cfg: &RunConfig, run_at_utc: DateTime<Utc>) -> Self {
        RunMetadata {
            run_at_utc,
            date_range: cfg.date_range.clone(),
            timespan: cfg.timespan.clone(),
            keywords: cfg.keywords.clone(),
            domain_whitelist: cfg.domain_whitelist.clone(),
            source_lang: cfg.source_lang.clone(),
            source_country: cfg.source_country.clone(),
            candidates: cfg.candidates.clone(),
        }
    }

    /// The requested span exactly as configured: the explicit range string
    /// when present, the relative timespan token otherwise.
    pub fn requested_span(&self) -> &str {
        self.date_range.as_deref().unwrap_or(&self.timespan)
    }

    /// Human-readable row subtitle: resolved year, candidate pairing
    /// (`"A vs B"` for exactly two candidates, a comma join otherwise), and
    /// the requested span.
    pub fn subtitle(&self) -> String {
        let pairing = if self.candidates.len() == 2 {
            format!("{} vs {}", self.candidates[0], self.candidates[1])
        } else {
            self.candidates.join(", ")
        };
        format!("{} {} {}", self.resolved_year(), pairing, self.requested_span())
    }

    // The explicit range's start year when one parses, else the run year.
    fn resolved_year(&self) -> i32 {
        self.date_range
            .as_deref()
            .and_then(|raw| parse_date_range(raw).ok())
            .map(|(start, _)| start.year())
            .unwrap_or_else(|| self.run_at_utc.year())
    }
}
