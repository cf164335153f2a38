use crate::constants::{BODY_FETCH_TIMEOUT_SECS, BODY_TEXT_CAP};
use crate::models::Error;
use crate::utils::truncate_chars;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;
use std::time::Duration;

/// External body-fetch collaborator: best-effort plain text for a URL. Any
/// failure degrades to an empty string, never an error.
pub trait BodyFetch {
    fn fetch_body(&self, url: &str) -> String;
}

/// Fetches an article page and reduces it to plain text: script/style blocks
/// and tags removed, embedded data blobs dropped, entities unescaped,
/// whitespace collapsed, length capped.
pub struct ArticleBodyFetcher {
    client: reqwest::blocking::Client,
}

impl ArticleBodyFetcher {
    pub fn new() -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(BODY_FETCH_TIMEOUT_SECS))
            .build()
            .map_err(|err| Error::TransportFailure(format!("building HTTP client: {}", err)))?;
        Ok(ArticleBodyFetcher { client })
    }
}

impl BodyFetch for ArticleBodyFetcher {
    fn fetch_body(&self, url: &str) -> String {
        if url.is_empty() {
            return String::new();
        }
        let html = match self
            .client
            .get(url)
            .send()
            .and_then(|response| response.error_for_status())
            .and_then(|response| response.text())
        {
            Ok(text) => text,
            Err(err) => {
                debug!("Body fetch failed for {}: {}", url, err);
                return String::new();
            }
        };
        strip_html(&html)
    }
}

/// Reduce an HTML page to capped plain text.
pub fn strip_html(html: &str) -> String {
    lazy_static! {
        static ref SCRIPT_RE: Regex =
            Regex::new(r"(?is)<(script|style|noscript)[^>]*>.*?</(?:script|style|noscript)>")
                .unwrap();
        static ref BLOCK_TAG_RE: Regex =
            Regex::new(r"(?i)</?(p|div|br|li|ul|ol|span|h[1-6])[^>]*>").unwrap();
        static ref TAG_RE: Regex = Regex::new(r"<[^>]+>").unwrap();
        static ref SELF_BLOB_RE: Regex = Regex::new(r"(?is)self\.\w+\s*=\s*\[.*?\];?").unwrap();
        static ref WINDOW_BLOB_RE: Regex = Regex::new(r"(?is)window\.\w+\s*=\s*\{.*?\};?").unwrap();
        static ref JSON_BLOB_RE: Regex = Regex::new(r"\{[^{}]{200,}\}").unwrap();
    }

    let text = SCRIPT_RE.replace_all(html, " ");
    let text = BLOCK_TAG_RE.replace_all(&text, " ");
    let text = TAG_RE.replace_all(&text, " ");
    let text = SELF_BLOB_RE.replace_all(&text, " ");
    let text = WINDOW_BLOB_RE.replace_all(&text, " ");
    let text = JSON_BLOB_RE.replace_all(&text, " ");

    let unescaped = unescape_entities(&text);
    let collapsed = unescaped.split_whitespace().collect::<Vec<_>>().join(" ");
    truncate_chars(&collapsed, BODY_TEXT_CAP).to_string()
}

fn unescape_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&apos;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
