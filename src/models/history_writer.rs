use crate::constants::{HISTORY_OUTPUT_FILE, RAW_OUTPUT_FILE, SUMMARY_OUTPUT_FILE};
use crate::models::{CandidateSummary, Error, MentionRecord, RunMetadata};

use csv::Writer;
use log::info;
use std::fs::{self, OpenOptions};
use std::path::PathBuf;

const HISTORY_HEADER: &[&str] = &[
    "run_at_utc",
    "candidate",
    "top5_mentions",
    "total_mentions",
    "requested_span",
    "keywords",
    "domain_whitelist",
    "source_lang",
    "source_country",
    "subtitle",
];

/// Writes the per-run mention and summary tables (fresh each run) and
/// maintains the append-only history table.
pub struct HistoryWriter {
    data_dir: PathBuf,
}

impl HistoryWriter {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        HistoryWriter {
            data_dir: data_dir.into(),
        }
    }

    pub fn raw_path(&self) -> PathBuf {
        self.data_dir.join(RAW_OUTPUT_FILE)
    }

    pub fn summary_path(&self) -> PathBuf {
        self.data_dir.join(SUMMARY_OUTPUT_FILE)
    }

    pub fn history_path(&self) -> PathBuf {
        self.data_dir.join(HISTORY_OUTPUT_FILE)
    }

    /// One row per mention record; tickers are `;`-joined. The file is
    /// replaced on every run.
    pub fn write_raw_mentions(&self, records: &[MentionRecord]) -> Result<(), Error> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.raw_path();
        let mut writer = Writer::from_path(&path)?;
        writer.write_record([
            "candidate",
            "title",
            "summary",
            "sentence",
            "tickers",
            "link",
            "published",
        ])?;
        for record in records {
            let tickers = record.tickers.join(";");
            let published = record
                .published
                .map(|ts| ts.to_rfc3339())
                .unwrap_or_default();
            writer.write_record([
                record.candidate.as_str(),
                record.title.as_str(),
                record.summary.as_str(),
                record.sentence.as_str(),
                tickers.as_str(),
                record.link.as_str(),
                published.as_str(),
            ])?;
        }
        writer.flush()?;
        info!("Saved {} rows -> {}", records.len(), path.display());
        Ok(())
    }

    /// One row per candidate summary. The file is replaced on every run.
    pub fn write_summary(&self, summaries: &[CandidateSummary]) -> Result<(), Error> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.summary_path();
        let mut writer = Writer::from_path(&path)?;
        writer.write_record(["candidate", "top5_mentions", "total_mentions"])?;
        for summary in summaries {
            let total = summary.total_mentions.to_string();
            writer.write_record([
                summary.candidate.as_str(),
                summary.top_mentions.as_str(),
                total.as_str(),
            ])?;
        }
        writer.flush()?;
        info!("Saved {} rows -> {}", summaries.len(), path.display());
        Ok(())
    }

    /// Append-only: one row per candidate per run, annotated with the run's
    /// parameters. The header is written only when the file does not exist
    /// yet; existing rows are never rewritten or truncated.
    pub fn append_history(
        &self,
        summaries: &[CandidateSummary],
        meta: &RunMetadata,
    ) -> Result<(), Error> {
        fs::create_dir_all(&self.data_dir)?;
        let path = self.history_path();
        let needs_header = !path.exists();

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        let mut writer = csv::WriterBuilder::new().has_headers(false).from_writer(file);
        if needs_header {
            writer.write_record(HISTORY_HEADER)?;
        }

        let run_at = meta.run_at_utc.to_rfc3339();
        let keywords = meta.keywords.join(";");
        let domains = meta.domain_whitelist.join(";");
        let lang = meta.source_lang.clone().unwrap_or_default();
        let country = meta.source_country.clone().unwrap_or_default();
        let subtitle = meta.subtitle();

        for summary in summaries {
            let total = summary.total_mentions.to_string();
            writer.write_record([
                run_at.as_str(),
                summary.candidate.as_str(),
                summary.top_mentions.as_str(),
                total.as_str(),
                meta.requested_span(),
                keywords.as_str(),
                domains.as_str(),
                lang.as_str(),
                country.as_str(),
                subtitle.as_str(),
            ])?;
        }
        writer.flush()?;
        info!(
            "Appended {} history rows -> {}",
            summaries.len(),
            path.display()
        );
        Ok(())
    }
}
