use chrono::{DateTime, TimeZone, Utc};
use election_ticker_sniffer::{CandidateSummary, HistoryWriter, MentionRecord, RunMetadata};

fn summaries() -> Vec<CandidateSummary> {
    vec![
        CandidateSummary {
            candidate: "Jane Doe".to_string(),
            top_mentions: "EXM (3)".to_string(),
            total_mentions: 3,
        },
        CandidateSummary {
            candidate: "John Roe".to_string(),
            top_mentions: "ACME (1)".to_string(),
            total_mentions: 1,
        },
    ]
}

fn metadata_at(run_at_utc: DateTime<Utc>) -> RunMetadata {
    RunMetadata {
        run_at_utc,
        date_range: Some("01-Sep-2024 - 03-Sep-2024".to_string()),
        timespan: "1d".to_string(),
        keywords: vec!["stock".to_string()],
        domain_whitelist: vec!["example.com".to_string()],
        source_lang: None,
        source_country: None,
        candidates: vec!["Jane Doe".to_string(), "John Roe".to_string()],
    }
}

#[test]
fn test_history_appends_rows_with_header_written_once() {
    let dir = tempfile::tempdir().unwrap();
    let writer = HistoryWriter::new(dir.path());

    let first_run = Utc.with_ymd_and_hms(2024, 9, 4, 8, 0, 0).unwrap();
    let second_run = Utc.with_ymd_and_hms(2024, 9, 5, 8, 0, 0).unwrap();
    writer.append_history(&summaries(), &metadata_at(first_run)).unwrap();
    writer.append_history(&summaries(), &metadata_at(second_run)).unwrap();

    let contents = std::fs::read_to_string(writer.history_path()).unwrap();
    let lines: Vec<&str> = contents.lines().collect();

    // Header + two rows per run.
    assert_eq!(lines.len(), 5);
    assert!(lines[0].starts_with("run_at_utc,candidate,top5_mentions"));
    assert_eq!(contents.matches("run_at_utc").count(), 1);
    assert!(lines[1].contains("2024-09-04"));
    assert!(lines[3].contains("2024-09-05"));
    assert!(lines[1].contains("Jane Doe"));
    assert!(lines[2].contains("John Roe"));
}

#[test]
fn test_subtitle_uses_range_year_and_vs_pairing() {
    let meta = metadata_at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    assert_eq!(
        meta.subtitle(),
        "2024 Jane Doe vs John Roe 01-Sep-2024 - 03-Sep-2024"
    );
}

#[test]
fn test_subtitle_falls_back_to_run_year_and_timespan() {
    let mut meta = metadata_at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    meta.date_range = None;
    assert_eq!(meta.subtitle(), "2025 Jane Doe vs John Roe 1d");
}

#[test]
fn test_subtitle_comma_joins_other_candidate_counts() {
    let mut meta = metadata_at(Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    meta.candidates = vec![
        "Jane Doe".to_string(),
        "John Roe".to_string(),
        "Casey Poe".to_string(),
    ];
    assert!(meta.subtitle().contains("Jane Doe, John Roe, Casey Poe"));
}

#[test]
fn test_raw_and_summary_files_are_rewritten_each_run() {
    let dir = tempfile::tempdir().unwrap();
    let writer = HistoryWriter::new(dir.path());

    let record = MentionRecord {
        candidate: "Jane Doe".to_string(),
        title: "Jane Doe praises Example Corp".to_string(),
        summary: "".to_string(),
        sentence: "Jane Doe praises Example Corp. . ".to_string(),
        tickers: vec!["EXM".to_string(), "ACME".to_string()],
        link: "https://news.test/a".to_string(),
        published: None,
    };

    writer.write_raw_mentions(&[record.clone(), record.clone()]).unwrap();
    writer.write_raw_mentions(&[record.clone()]).unwrap();

    let contents = std::fs::read_to_string(writer.raw_path()).unwrap();
    // Header plus exactly the last run's single row.
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.contains("EXM;ACME"));

    writer.write_summary(&summaries()).unwrap();
    writer.write_summary(&summaries()[..1].to_vec()).unwrap();
    let contents = std::fs::read_to_string(writer.summary_path()).unwrap();
    assert_eq!(contents.lines().count(), 2);
    assert!(contents.contains("EXM (3)"));
}
