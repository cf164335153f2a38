use crate::constants::{GENERIC_SUFFIXES, MIN_ALIAS_LEN};
use crate::models::AliasSource;
use crate::types::{CompanyAlias, TickerSymbol};
use crate::utils::normalize_text;

use log::{info, warn};
use std::collections::{HashMap, HashSet};

/// A ticker symbol together with its matchable name variants, in discovery
/// order: raw lowercase name, punctuation-stripped name, suffix-stripped name.
#[derive(Debug, Clone)]
pub struct AliasEntry {
    pub symbol: TickerSymbol,
    pub aliases: Vec<CompanyAlias>,
}

/// Ordered mapping of ticker symbols to alias lists.
///
/// Iteration order is the build order: listing sources in declaration order,
/// rows in file order, extra entries last. Extraction truncated at `max_hits`
/// resolves ties in this order, which keeps results reproducible. The index is
/// immutable once built and is shared by reference.
#[derive(Debug, Default)]
pub struct AliasIndex {
    entries: Vec<AliasEntry>,
    by_symbol: HashMap<TickerSymbol, usize>,
}

impl AliasIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the index from listing sources, then merge `extra_entries`, then
    /// drop everything in `exclusions`.
    ///
    /// A source that cannot be read or lacks the expected columns is skipped
    /// with a warning; it never blocks the remaining sources.
    pub fn build(
        sources: &[AliasSource],
        extra_entries: &[(&str, &[&str])],
        exclusions: &[&str],
    ) -> AliasIndex {
        let mut index = AliasIndex::new();

        for source in sources {
            match source.read_rows() {
                Ok(rows) => {
                    for (symbol, name) in rows {
                        let aliases = Self::derive_name_aliases(&name);
                        index.insert(symbol, aliases);
                    }
                }
                Err(err) => warn!("Skipping listing source {}: {}", source.name, err),
            }
        }

        for (symbol, aliases) in extra_entries {
            index.insert(
                symbol.to_string(),
                aliases.iter().map(|alias| alias.to_string()).collect(),
            );
        }

        for symbol in exclusions {
            index.remove(symbol);
        }

        info!("Alias index built with {} symbols", index.len());
        index
    }

    /// Derive the matchable variants of a display name: the raw lowercase
    /// name, the punctuation-stripped name, and the corporate-suffix-stripped
    /// name, deduplicated in that order. Variants under the minimum length are
    /// discarded.
    pub fn derive_name_aliases(raw_name: &str) -> Vec<CompanyAlias> {
        let lower = raw_name.trim().to_lowercase();
        let mut variants = vec![lower.clone()];

        let cleaned = normalize_text(&lower);
        if !cleaned.is_empty() {
            variants.push(cleaned.clone());
        }

        let base = cleaned
            .split_whitespace()
            .filter(|word| !GENERIC_SUFFIXES.contains(word))
            .collect::<Vec<_>>()
            .join(" ");
        if !base.is_empty() {
            variants.push(base);
        }

        let mut seen = HashSet::new();
        variants
            .into_iter()
            .filter(|alias| alias.len() >= MIN_ALIAS_LEN && seen.insert(alias.clone()))
            .collect()
    }

    /// Insert or replace an entry. A duplicate symbol keeps its original
    /// position but takes the new alias list (last writer wins).
    pub fn insert(&mut self, symbol: TickerSymbol, aliases: Vec<CompanyAlias>) {
        match self.by_symbol.get(&symbol) {
            Some(&idx) => self.entries[idx].aliases = aliases,
            None => {
                self.by_symbol.insert(symbol.clone(), self.entries.len());
                self.entries.push(AliasEntry { symbol, aliases });
            }
        }
    }

    fn remove(&mut self, symbol: &str) {
        if self.by_symbol.remove(symbol).is_some() {
            self.entries.retain(|entry| entry.symbol != symbol);
            self.by_symbol = self
                .entries
                .iter()
                .enumerate()
                .map(|(idx, entry)| (entry.symbol.clone(), idx))
                .collect();
        }
    }

    pub fn entries(&self) -> &[AliasEntry] {
        &self.entries
    }

    pub fn get(&self, symbol: &str) -> Option<&AliasEntry> {
        self.by_symbol.get(symbol).map(|&idx| &self.entries[idx])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
