use crate::constants::{DEFAULT_MAX_RECORDS, DEFAULT_TIMESPAN};
use crate::models::Error;

use config::{Config, File};
use serde::Deserialize;
use std::path::Path;

/// Run configuration, read once at startup from a config file with
/// environment-variable overrides (`__` separator).
#[derive(Debug, Clone, Deserialize)]
pub struct RunConfig {
    /// Candidate names to query and test for co-occurrence. Required.
    pub candidates: Vec<String>,
    /// Keywords OR-combined into every query. Empty entries are ignored.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Domains OR-combined into a `site:` restriction clause when present.
    #[serde(default)]
    pub domain_whitelist: Vec<String>,
    /// Per-window cap passed to the search API.
    #[serde(default = "default_max_records")]
    pub maxrecords: u32,
    /// Relative timespan token used when no explicit date range is set.
    #[serde(default = "default_timespan")]
    pub timespan: String,
    /// Optional explicit range, `"DD-Mon-YYYY - DD-Mon-YYYY"`.
    #[serde(default)]
    pub date_range: Option<String>,
    #[serde(default)]
    pub source_lang: Option<String>,
    #[serde(default)]
    pub source_country: Option<String>,
    /// Directory holding the cached listing files and the output tables.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
}

fn default_max_records() -> u32 {
    DEFAULT_MAX_RECORDS
}

fn default_timespan() -> String {
    DEFAULT_TIMESPAN.to_string()
}

fn default_data_dir() -> String {
    "data".to_string()
}

impl RunConfig {
    pub fn load(path: &str) -> Result<Self, Error> {
        let cfg = Config::builder()
            .add_source(File::with_name(path))
            .add_source(config::Environment::default().separator("__"))
            .build()
            .map_err(|err| Error::ConfigError(format!("building config: {}", err)))?;

        let run_cfg: RunConfig = cfg
            .try_deserialize()
            .map_err(|err| Error::ConfigError(format!("deserializing config: {}", err)))?;
        run_cfg.validate()?;
        Ok(run_cfg)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.candidates.is_empty() {
            return Err(Error::ConfigError("candidates must not be empty".to_string()));
        }
        if self.maxrecords == 0 {
            return Err(Error::ConfigError("maxrecords must be > 0".to_string()));
        }
        if self.timespan.is_empty() {
            return Err(Error::ConfigError("timespan must not be empty".to_string()));
        }
        Ok(())
    }

    pub fn data_path(&self) -> &Path {
        Path::new(&self.data_dir)
    }
}
