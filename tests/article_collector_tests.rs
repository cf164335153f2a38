use election_ticker_sniffer::{ArticleCollector, Error, FetchWindow};
use test_utils::{article_meta, ScriptedSearch};

fn window_for(candidate: &str) -> FetchWindow {
    FetchWindow {
        candidate: candidate.to_string(),
        query: format!("\"{}\"", candidate),
        start: None,
        end: None,
        timespan: Some("1d".to_string()),
    }
}

#[test]
fn test_dedup_across_windows_keeps_first_seen_metadata() {
    let windows = vec![window_for("Jane Doe"), window_for("John Roe")];
    let search = ScriptedSearch::new(vec![
        Ok(vec![article_meta(
            "https://news.test/a",
            "First title",
            "2024-09-01T10:00:00Z",
            "first excerpt",
        )]),
        Ok(vec![
            article_meta(
                "https://news.test/a",
                "Second title",
                "2024-09-02T10:00:00Z",
                "second excerpt",
            ),
            article_meta("https://news.test/b", "Other", "2024-09-02T11:00:00Z", ""),
        ]),
    ]);

    let articles = ArticleCollector::new(75).collect(&windows, &search);

    assert_eq!(articles.len(), 2);
    assert_eq!(articles[0].link, "https://news.test/a");
    assert_eq!(articles[0].title, "First title");
    assert_eq!(articles[0].candidate, "Jane Doe");
    assert_eq!(articles[1].link, "https://news.test/b");
}

#[test]
fn test_failed_window_degrades_to_empty() {
    let windows = vec![window_for("Jane Doe"), window_for("John Roe")];
    let search = ScriptedSearch::new(vec![
        Err(Error::TransportFailure("connect timeout".to_string())),
        Ok(vec![article_meta(
            "https://news.test/a",
            "Title",
            "2024-09-01T10:00:00Z",
            "",
        )]),
    ]);

    let articles = ArticleCollector::new(75).collect(&windows, &search);
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].candidate, "John Roe");
}

#[test]
fn test_unparseable_seendate_becomes_none() {
    let windows = vec![window_for("Jane Doe")];
    let search = ScriptedSearch::new(vec![Ok(vec![article_meta(
        "https://news.test/a",
        "Title",
        "yesterday afternoon",
        "",
    )])]);

    let articles = ArticleCollector::new(75).collect(&windows, &search);
    assert_eq!(articles.len(), 1);
    assert!(articles[0].published.is_none());
}

#[test]
fn test_parseable_seendate_is_kept_in_utc() {
    let windows = vec![window_for("Jane Doe")];
    let search = ScriptedSearch::new(vec![Ok(vec![article_meta(
        "https://news.test/a",
        "Title",
        "2024-09-01T10:00:00Z",
        "",
    )])]);

    let articles = ArticleCollector::new(75).collect(&windows, &search);
    assert_eq!(
        articles[0].published.unwrap().to_rfc3339(),
        "2024-09-01T10:00:00+00:00"
    );
}

#[test]
fn test_missing_title_falls_back_to_seendate() {
    let windows = vec![window_for("Jane Doe")];
    let search = ScriptedSearch::new(vec![Ok(vec![article_meta(
        "https://news.test/a",
        "",
        "2024-09-01T10:00:00Z",
        "",
    )])]);

    let articles = ArticleCollector::new(75).collect(&windows, &search);
    assert_eq!(articles[0].title, "2024-09-01T10:00:00Z");
}

#[test]
fn test_entries_without_links_are_dropped() {
    let windows = vec![window_for("Jane Doe")];
    let search = ScriptedSearch::new(vec![Ok(vec![article_meta(
        "",
        "Linkless",
        "2024-09-01T10:00:00Z",
        "",
    )])]);

    let articles = ArticleCollector::new(75).collect(&windows, &search);
    assert!(articles.is_empty());
}

#[test]
fn test_zero_articles_is_a_normal_result() {
    let windows = vec![window_for("Jane Doe")];
    let search = ScriptedSearch::new(vec![Ok(vec![])]);
    assert!(ArticleCollector::new(75).collect(&windows, &search).is_empty());
}
