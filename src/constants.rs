//! Static configuration data: listing-source descriptors, alias derivation
//! tables, and the fixed caps used across the pipeline.

/// Header names accepted for the ticker symbol column, in priority order.
pub const SYMBOL_COLUMNS: &[&str] = &[
    "ACT Symbol",
    "Symbol",
    "Ticker",
    "Trading Symbol",
    "NASDAQ Symbol",
    "CQS Symbol",
];

/// Header names accepted for the company display-name column, in priority order.
pub const NAME_COLUMNS: &[&str] = &["Company Name", "Security Name", "Name", "Company"];

/// Corporate-form tokens removed from the suffix-stripped alias variant only.
pub const GENERIC_SUFFIXES: &[&str] = &[
    "inc",
    "inc.",
    "incorporated",
    "corp",
    "corp.",
    "corporation",
    "co",
    "co.",
    "company",
    "ltd",
    "ltd.",
    "limited",
    "plc",
    "sa",
    "nv",
    "group",
    "holdings",
    "holding",
    "ag",
    "spa",
    "llc",
    "common",
    "stock",
    "shares",
    "class",
];

/// Symbols whose company names collide with common English words; removed
/// from the index after every source has been merged.
pub const SYMBOL_EXCLUSIONS: &[&str] = &["MTCH", "NDAQ", "ROOT", "POST", "TISI"];

/// Crypto assets merged into the index after the listing sources, verbatim.
pub const CRYPTO_ENTRIES: &[(&str, &[&str])] = &[
    ("Bitcoin", &["bitcoin"]),
    ("Ethereum", &["ethereum", "ether"]),
    ("Ripple", &["ripple"]),
];

/// Remote listing sources as `(tag, url, cached file name)`.
pub const LISTING_SOURCES: &[(&str, &str, &str)] = &[
    (
        "nasdaq",
        "https://datahub.io/core/nasdaq-listings/r/nasdaq-listed.csv",
        "nasdaq-listed.csv",
    ),
    (
        "nyse",
        "https://datahub.io/core/nyse-other-listings/r/nyse-listed.csv",
        "nyse-listed.csv",
    ),
];

/// Cached listing files older than this are re-downloaded before a run.
pub const LISTING_STALE_AFTER_HOURS: u64 = 24;

/// Aliases shorter than this are discarded; short tokens are the dominant
/// false-positive source.
pub const MIN_ALIAS_LEN: usize = 4;

/// Upper bound on ticker symbols recorded per document.
pub const DEFAULT_MAX_TICKER_HITS: usize = 3;

/// Portion of the fetched body included in the combined matching text.
pub const BODY_EXCERPT_LIMIT: usize = 2000;

/// Length cap on the `sentence` field of a mention record.
pub const SENTENCE_LIMIT: usize = 500;

/// Hard cap on fetched article body text.
pub const BODY_TEXT_CAP: usize = 4000;

/// Number of ticker entries rendered in a candidate summary.
pub const TOP_MENTION_LIMIT: usize = 5;

pub const DOC_API_ENDPOINT: &str = "https://api.gdeltproject.org/api/v2/doc/doc";
pub const DOC_API_FEED_TAG: &str = "gdelt_docapi";

pub const DEFAULT_TIMESPAN: &str = "1d";
pub const DEFAULT_MAX_RECORDS: u32 = 75;

pub const LISTING_REFRESH_TIMEOUT_SECS: u64 = 30;
pub const SEARCH_TIMEOUT_SECS: u64 = 20;
pub const BODY_FETCH_TIMEOUT_SECS: u64 = 10;

pub const RAW_OUTPUT_FILE: &str = "raw_articles.csv";
pub const SUMMARY_OUTPUT_FILE: &str = "summary.csv";
pub const HISTORY_OUTPUT_FILE: &str = "history.csv";
