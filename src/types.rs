// Types listed here are either shared across multiple files and/or exposed via the library.

/// Represents a ticker symbol (stock or crypto asset identifier) as an owned `String`.
pub type TickerSymbol = String;

/// A normalized, matchable variant of a company display name.
pub type CompanyAlias = String;

/// A company display name as read from a listing source.
pub type CompanyName = String;

/// The configured name of a tracked political candidate.
pub type CandidateName = String;

/// Number of times a ticker symbol was co-mentioned with a candidate within a run.
pub type TickerMentionCount = usize;
