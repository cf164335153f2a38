use crate::constants::{DEFAULT_TIMESPAN, DOC_API_ENDPOINT, SEARCH_TIMEOUT_SECS};
use crate::models::{Error, FetchWindow};

use log::debug;
use serde::Deserialize;
use std::time::Duration;

/// One article metadata entry from the Doc API `ArtList` payload.
#[derive(Debug, Clone, Deserialize)]
pub struct ArticleMeta {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub seendate: String,
    #[serde(default)]
    pub excerpt: String,
}

#[derive(Debug, Default, Deserialize)]
struct DocApiPayload {
    #[serde(default)]
    articles: Vec<ArticleMeta>,
}

/// External search collaborator: one call per fetch window, returning zero or
/// more article metadata entries or a typed failure. Callers degrade a failed
/// window to "no articles"; an error here never aborts the collection run.
pub trait ArticleSearch {
    fn search(&self, window: &FetchWindow, max_records: u32) -> Result<Vec<ArticleMeta>, Error>;
}

/// GDELT Doc API 2.0 client.
pub struct DocApiClient {
    client: reqwest::blocking::Client,
    endpoint: String,
}

impl DocApiClient {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(SEARCH_TIMEOUT_SECS))
            .build()
            .map_err(|err| Error::TransportFailure(format!("building HTTP client: {}", err)))?;
        Ok(DocApiClient {
            client,
            endpoint: DOC_API_ENDPOINT.to_string(),
        })
    }
}

impl ArticleSearch for DocApiClient {
    fn search(&self, window: &FetchWindow, max_records: u32) -> Result<Vec<ArticleMeta>, Error> {
        let mut params = vec![
            ("query", window.query.clone()),
            ("mode", "ArtList".to_string()),
            ("format", "json".to_string()),
            ("maxrecords", max_records.to_string()),
        ];
        match (&window.start, &window.end) {
            (Some(start), Some(end)) => {
                params.push(("startdatetime", start.format("%Y%m%d%H%M%S").to_string()));
                params.push(("enddatetime", end.format("%Y%m%d%H%M%S").to_string()));
            }
            _ => {
                let timespan = window
                    .timespan
                    .clone()
                    .unwrap_or_else(|| DEFAULT_TIMESPAN.to_string());
                params.push(("timespan", timespan));
            }
        }

        let response = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .map_err(|err| Error::TransportFailure(format!("doc api request: {}", err)))?;

        let status = response.status();
        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();
        debug!(
            "query={:?} status={} content-type={}",
            window.query, status, content_type
        );

        if !status.is_success() {
            return Err(Error::TransportFailure(format!(
                "doc api status {} for query {:?}",
                status, window.query
            )));
        }
        if !content_type.to_lowercase().contains("json") {
            return Err(Error::ParseFailure(format!(
                "doc api returned content type {:?} for query {:?}",
                content_type, window.query
            )));
        }

        let payload: DocApiPayload = response
            .json()
            .map_err(|err| Error::ParseFailure(format!("doc api payload: {}", err)))?;
        Ok(payload.articles)
    }
}
