use crate::constants::{
    LISTING_REFRESH_TIMEOUT_SECS, LISTING_SOURCES, LISTING_STALE_AFTER_HOURS, NAME_COLUMNS,
    SYMBOL_COLUMNS,
};
use crate::models::Error;
use crate::types::{CompanyName, TickerSymbol};

use csv::ReaderBuilder;
use log::{debug, warn};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

/// One remote company-listing source with a locally cached copy.
pub struct AliasSource {
    pub name: String,
    pub url: String,
    pub path: PathBuf,
}

impl AliasSource {
    pub fn new(name: impl Into<String>, url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        AliasSource {
            name: name.into(),
            url: url.into(),
            path: path.into(),
        }
    }

    /// The built-in NASDAQ/NYSE listing sources, cached under `data_dir`.
    pub fn default_sources(data_dir: &Path) -> Vec<AliasSource> {
        LISTING_SOURCES
            .iter()
            .map(|(name, url, file_name)| AliasSource::new(*name, *url, data_dir.join(file_name)))
            .collect()
    }

    /// Re-download every listing file that is absent or older than the
    /// freshness window. A failed refresh leaves the cached copy (or its
    /// absence) in place and is never fatal.
    pub fn refresh_all(sources: &[AliasSource]) {
        let client = match reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(LISTING_REFRESH_TIMEOUT_SECS))
            .build()
        {
            Ok(client) => client,
            Err(err) => {
                warn!("Listing refresh skipped, HTTP client unavailable: {}", err);
                return;
            }
        };

        for source in sources {
            if source.is_fresh() {
                continue;
            }
            if let Err(err) = source.download(&client) {
                warn!(
                    "Failed to update listing {} from {}: {}",
                    source.name, source.url, err
                );
            }
        }
    }

    fn is_fresh(&self) -> bool {
        let Ok(metadata) = fs::metadata(&self.path) else {
            return false;
        };
        let Ok(modified) = metadata.modified() else {
            return false;
        };
        match SystemTime::now().duration_since(modified) {
            Ok(age) => age <= Duration::from_secs(LISTING_STALE_AFTER_HOURS * 3600),
            // Modified-in-the-future clock skew; leave the file alone.
            Err(_) => true,
        }
    }

    fn download(&self, client: &reqwest::blocking::Client) -> Result<(), Error> {
        let body = client.get(&self.url).send()?.error_for_status()?.bytes()?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, &body)?;
        debug!("Refreshed listing {} ({} bytes)", self.name, body.len());
        Ok(())
    }

    /// Read `(symbol, company name)` rows from the cached file, resolving the
    /// symbol and name columns from the prioritized header lists. Rows with an
    /// empty symbol or name are skipped.
    pub fn read_rows(&self) -> Result<Vec<(TickerSymbol, CompanyName)>, Error> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .from_path(&self.path)
            .map_err(|err| {
                Error::SourceUnavailable(format!("{}: {}", self.path.display(), err))
            })?;

        let headers = reader
            .headers()
            .map_err(|err| {
                Error::SourceUnavailable(format!(
                    "{}: failed to read headers: {}",
                    self.path.display(),
                    err
                ))
            })?
            .clone();

        let symbol_col = SYMBOL_COLUMNS
            .iter()
            .find_map(|column| headers.iter().position(|header| header == *column));
        let name_col = NAME_COLUMNS
            .iter()
            .find_map(|column| headers.iter().position(|header| header == *column));

        let (Some(symbol_col), Some(name_col)) = (symbol_col, name_col) else {
            return Err(Error::SourceUnavailable(format!(
                "{} missing expected columns; found: {:?}",
                self.path.display(),
                headers
            )));
        };

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record
                .map_err(|err| Error::ParseFailure(format!("{}: {}", self.path.display(), err)))?;
            let symbol = record.get(symbol_col).unwrap_or("").trim();
            let name = record.get(name_col).unwrap_or("").trim();
            if symbol.is_empty() || name.is_empty() {
                continue;
            }
            rows.push((symbol.to_string(), name.to_string()));
        }

        Ok(rows)
    }
}
