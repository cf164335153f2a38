use election_ticker_sniffer::{run_pipeline, RunConfig, RunOutcome};
use std::path::Path;
use test_utils::{alias_index_from_names, article_meta, CannedBodies, ScriptedSearch};

fn config_with_dir(dir: &Path) -> RunConfig {
    RunConfig {
        candidates: vec!["Jane Doe".to_string()],
        keywords: vec![],
        domain_whitelist: vec![],
        maxrecords: 75,
        timespan: "1d".to_string(),
        date_range: None,
        source_lang: None,
        source_country: None,
        data_dir: dir.to_string_lossy().into_owned(),
    }
}

#[test]
fn test_zero_article_run_terminates_cleanly_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_with_dir(dir.path());
    let index = alias_index_from_names(&[("EXM", "Example Corp")]);
    let search = ScriptedSearch::new(vec![Ok(vec![])]);

    let outcome = run_pipeline(&cfg, &index, &search, &CannedBodies::empty()).unwrap();

    assert!(matches!(outcome, RunOutcome::NoArticles));
    assert!(!dir.path().join("raw_articles.csv").exists());
    assert!(!dir.path().join("summary.csv").exists());
    assert!(!dir.path().join("history.csv").exists());
}

#[test]
fn test_zero_mention_run_terminates_cleanly_without_writing() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_with_dir(dir.path());
    let index = alias_index_from_names(&[("EXM", "Example Corp")]);
    let search = ScriptedSearch::new(vec![Ok(vec![article_meta(
        "https://news.test/a",
        "Weather stays mild across the region",
        "2024-09-01T10:00:00Z",
        "",
    )])]);

    let outcome = run_pipeline(&cfg, &index, &search, &CannedBodies::empty()).unwrap();

    assert!(matches!(outcome, RunOutcome::NoMentions));
    assert!(!dir.path().join("raw_articles.csv").exists());
    assert!(!dir.path().join("summary.csv").exists());
    assert!(!dir.path().join("history.csv").exists());
}

#[test]
fn test_completed_run_writes_all_three_tables() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_with_dir(dir.path());
    let index = alias_index_from_names(&[("EXM", "Example Corp")]);
    // Three articles where candidate and company co-occur, two where the
    // company appears without the candidate.
    let search = ScriptedSearch::new(vec![Ok(vec![
        article_meta(
            "https://news.test/1",
            "Jane Doe praises Example Corp",
            "2024-09-01T10:00:00Z",
            "",
        ),
        article_meta(
            "https://news.test/2",
            "Example Corp backs Jane Doe rally",
            "2024-09-01T11:00:00Z",
            "",
        ),
        article_meta(
            "https://news.test/3",
            "Jane Doe tours Example Corp plant",
            "2024-09-01T12:00:00Z",
            "",
        ),
        article_meta(
            "https://news.test/4",
            "Example Corp quarterly earnings beat",
            "2024-09-01T13:00:00Z",
            "",
        ),
        article_meta(
            "https://news.test/5",
            "Example Corp hires new chief",
            "2024-09-01T14:00:00Z",
            "",
        ),
    ])]);

    let outcome = run_pipeline(&cfg, &index, &search, &CannedBodies::empty()).unwrap();

    match outcome {
        RunOutcome::Completed {
            articles,
            mentions,
            summaries,
        } => {
            assert_eq!(articles, 5);
            assert_eq!(mentions, 3);
            assert_eq!(summaries.len(), 1);
            assert_eq!(summaries[0].top_mentions, "EXM (3)");
            assert_eq!(summaries[0].total_mentions, 3);
        }
        other => panic!("expected Completed, got {:?}", other),
    }

    let raw = std::fs::read_to_string(dir.path().join("raw_articles.csv")).unwrap();
    assert_eq!(raw.lines().count(), 4); // header + 3 mention rows

    let summary = std::fs::read_to_string(dir.path().join("summary.csv")).unwrap();
    assert!(summary.contains("Jane Doe"));
    assert!(summary.contains("EXM (3)"));

    let history = std::fs::read_to_string(dir.path().join("history.csv")).unwrap();
    assert_eq!(history.lines().count(), 2); // header + one candidate row
    assert!(history.lines().next().unwrap().starts_with("run_at_utc"));
}

#[test]
fn test_two_runs_append_history_but_replace_run_tables() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config_with_dir(dir.path());
    let index = alias_index_from_names(&[("EXM", "Example Corp")]);

    for _ in 0..2 {
        let search = ScriptedSearch::new(vec![Ok(vec![article_meta(
            "https://news.test/1",
            "Jane Doe praises Example Corp",
            "2024-09-01T10:00:00Z",
            "",
        )])]);
        run_pipeline(&cfg, &index, &search, &CannedBodies::empty()).unwrap();
    }

    let raw = std::fs::read_to_string(dir.path().join("raw_articles.csv")).unwrap();
    assert_eq!(raw.lines().count(), 2);

    let history = std::fs::read_to_string(dir.path().join("history.csv")).unwrap();
    assert_eq!(history.lines().count(), 3); // header + one row per run
    assert_eq!(history.matches("run_at_utc").count(), 1);
}
