use election_ticker_sniffer::normalize_text;

#[test]
fn test_lowercases_and_replaces_punctuation() {
    assert_eq!(normalize_text("Apple, Inc. (AAPL)!"), "apple inc aapl");
}

#[test]
fn test_collapses_mixed_whitespace() {
    assert_eq!(normalize_text("a \t b\n\nc"), "a b c");
}

#[test]
fn test_trims_edges() {
    assert_eq!(normalize_text("  leading and trailing  "), "leading and trailing");
}

#[test]
fn test_symbol_only_input_becomes_empty() {
    assert_eq!(normalize_text("!!! ?? ..."), "");
    assert_eq!(normalize_text(""), "");
}

#[test]
fn test_idempotent() {
    let samples = [
        "Apple, Inc. (AAPL)!",
        "  spaced\tout\ninput ",
        "already normalized text",
        "Ünïcödé — puncts…",
        "",
    ];
    for sample in samples {
        let once = normalize_text(sample);
        assert_eq!(normalize_text(&once), once, "not idempotent for {:?}", sample);
    }
}
