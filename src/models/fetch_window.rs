use crate::config::RunConfig;
use crate::models::Error;
use crate::types::CandidateName;

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};
use log::warn;

/// One bounded query unit: a single candidate over either an explicit
/// day-bounded span or a relative timespan token. The two modes are mutually
/// exclusive; explicit bounds suppress the timespan.
#[derive(Debug, Clone)]
pub struct FetchWindow {
    pub candidate: CandidateName,
    pub query: String,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
    pub timespan: Option<String>,
}

impl FetchWindow {
    /// Expand the configured request into fetch windows.
    ///
    /// With a parseable explicit date range, every candidate gets one window
    /// per calendar day, spanning 00:00:00 through the last second of the day.
    /// Otherwise, including when range parsing fails, every candidate gets a
    /// single window carrying the relative timespan.
    pub fn compose(cfg: &RunConfig) -> Vec<FetchWindow> {
        let range = cfg.date_range.as_deref().and_then(|raw| {
            match parse_date_range(raw) {
                Ok(bounds) => Some(bounds),
                Err(err) => {
                    warn!(
                        "Failed to parse date_range {:?}: {}; falling back to timespan",
                        raw, err
                    );
                    None
                }
            }
        });

        let mut windows = Vec::new();
        match range {
            Some((range_start, range_end)) => {
                let mut day = range_start;
                while day <= range_end {
                    let day_start = Utc.from_utc_datetime(&day.and_time(NaiveTime::MIN));
                    let day_end = day_start + Duration::days(1) - Duration::seconds(1);
                    for candidate in &cfg.candidates {
                        windows.push(FetchWindow {
                            candidate: candidate.clone(),
                            query: build_query(candidate, cfg),
                            start: Some(day_start),
                            end: Some(day_end),
                            timespan: None,
                        });
                    }
                    day = day + Duration::days(1);
                }
            }
            None => {
                for candidate in &cfg.candidates {
                    windows.push(FetchWindow {
                        candidate: candidate.clone(),
                        query: build_query(candidate, cfg),
                        start: None,
                        end: None,
                        timespan: Some(cfg.timespan.clone()),
                    });
                }
            }
        }
        windows
    }
}

/// Parse `"DD-Mon-YYYY - DD-Mon-YYYY"` bounds. Without a `" - "` separator the
/// split falls back to the first `-`, matching the lenient input format.
pub fn parse_date_range(raw: &str) -> Result<(NaiveDate, NaiveDate), Error> {
    let (start_raw, end_raw) = match raw.split_once(" - ") {
        Some(bounds) => bounds,
        None => raw.split_once('-').ok_or_else(|| {
            Error::ParseFailure(format!("date_range {:?} has no separator", raw))
        })?,
    };

    let start = NaiveDate::parse_from_str(start_raw.trim(), "%d-%b-%Y")
        .map_err(|err| Error::ParseFailure(format!("start bound {:?}: {}", start_raw.trim(), err)))?;
    let end = NaiveDate::parse_from_str(end_raw.trim(), "%d-%b-%Y")
        .map_err(|err| Error::ParseFailure(format!("end bound {:?}: {}", end_raw.trim(), err)))?;
    Ok((start, end))
}

// The Doc API's boolean parser does not reliably accept grouping parentheses,
// so every multi-value clause stays a flat OR chain inside the AND join.
fn build_query(candidate: &str, cfg: &RunConfig) -> String {
    let mut parts = vec![format!("\"{}\"", candidate)];

    let keywords: Vec<&String> = cfg.keywords.iter().filter(|k| !k.is_empty()).collect();
    if !keywords.is_empty() {
        parts.push(
            keywords
                .iter()
                .map(|keyword| format!("\"{}\"", keyword))
                .collect::<Vec<_>>()
                .join(" OR "),
        );
    }

    if !cfg.domain_whitelist.is_empty() {
        parts.push(
            cfg.domain_whitelist
                .iter()
                .map(|domain| format!("site:{}", domain))
                .collect::<Vec<_>>()
                .join(" OR "),
        );
    }

    if let Some(country) = cfg.source_country.as_deref().filter(|c| !c.is_empty()) {
        parts.push(format!("sourcecountry:{}", country));
    }
    if let Some(lang) = cfg.source_lang.as_deref().filter(|l| !l.is_empty()) {
        parts.push(format!("sourcelang:{}", lang));
    }

    parts.join(" AND ")
}
