use crate::models::AliasIndex;
use crate::types::TickerSymbol;
use crate::utils::{contains_whole_word, normalize_text};

/// Scan `text` for alias hits, walking the index in build order and recording
/// each symbol at most once (the first alias hit wins), stopping once
/// `max_hits` symbols are recorded.
///
/// Returns `None` when nothing matched; callers treat that as "no mention",
/// not an error.
pub fn extract_tickers(
    text: &str,
    alias_index: &AliasIndex,
    max_hits: usize,
) -> Option<Vec<TickerSymbol>> {
    let normalized = normalize_text(text);
    if normalized.is_empty() {
        return None;
    }

    let mut found: Vec<TickerSymbol> = Vec::new();
    for entry in alias_index.entries() {
        if entry
            .aliases
            .iter()
            .any(|alias| contains_whole_word(&normalized, alias))
        {
            found.push(entry.symbol.clone());
        }
        if found.len() >= max_hits {
            break;
        }
    }

    if found.is_empty() {
        None
    } else {
        Some(found)
    }
}
