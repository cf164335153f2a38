use std::cell::RefCell;
use std::collections::HashMap;

use election_ticker_sniffer::{
    AliasIndex, ArticleMeta, ArticleSearch, BodyFetch, Error, FetchWindow,
};

/// Build a synthetic alias index from `(symbol, display name)` pairs using
/// the production alias derivation, preserving insertion order.
pub fn alias_index_from_names(entries: &[(&str, &str)]) -> AliasIndex {
    let mut index = AliasIndex::new();
    for (symbol, name) in entries {
        index.insert(symbol.to_string(), AliasIndex::derive_name_aliases(name));
    }
    index
}

/// Convenience constructor for Doc API article metadata.
pub fn article_meta(url: &str, title: &str, seendate: &str, excerpt: &str) -> ArticleMeta {
    ArticleMeta {
        url: url.to_string(),
        title: title.to_string(),
        seendate: seendate.to_string(),
        excerpt: excerpt.to_string(),
    }
}

/// Scripted search stub: each call pops the next response in order; an
/// exhausted script returns empty result sets.
pub struct ScriptedSearch {
    responses: RefCell<Vec<Result<Vec<ArticleMeta>, Error>>>,
}

impl ScriptedSearch {
    pub fn new(responses: Vec<Result<Vec<ArticleMeta>, Error>>) -> Self {
        ScriptedSearch {
            responses: RefCell::new(responses),
        }
    }
}

impl ArticleSearch for ScriptedSearch {
    fn search(&self, _window: &FetchWindow, _max_records: u32) -> Result<Vec<ArticleMeta>, Error> {
        let mut responses = self.responses.borrow_mut();
        if responses.is_empty() {
            Ok(Vec::new())
        } else {
            responses.remove(0)
        }
    }
}

/// Body-fetch stub returning canned bodies by link; unknown links degrade to
/// an empty body like the production fetcher.
pub struct CannedBodies {
    bodies: HashMap<String, String>,
}

impl CannedBodies {
    pub fn new(bodies: &[(&str, &str)]) -> Self {
        CannedBodies {
            bodies: bodies
                .iter()
                .map(|(url, body)| (url.to_string(), body.to_string()))
                .collect(),
        }
    }

    pub fn empty() -> Self {
        CannedBodies {
            bodies: HashMap::new(),
        }
    }
}

impl BodyFetch for CannedBodies {
    fn fetch_body(&self, url: &str) -> String {
        self.bodies.get(url).cloned().unwrap_or_default()
    }
}
