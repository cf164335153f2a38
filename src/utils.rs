pub mod contains_whole_word;
pub mod extract_tickers;
pub mod normalize_text;
pub mod truncate_chars;

pub use contains_whole_word::contains_whole_word;
pub use extract_tickers::extract_tickers;
pub use normalize_text::normalize_text;
pub use truncate_chars::truncate_chars;
