pub mod alias_index;
pub use alias_index::{AliasEntry, AliasIndex};

pub mod alias_source;
pub use alias_source::AliasSource;

pub mod article;
pub use article::Article;

pub mod article_body_fetcher;
pub use article_body_fetcher::{ArticleBodyFetcher, BodyFetch};

pub mod article_collector;
pub use article_collector::ArticleCollector;

pub mod candidate_summary;
pub use candidate_summary::CandidateSummary;

pub mod doc_api_client;
pub use doc_api_client::{ArticleMeta, ArticleSearch, DocApiClient};

pub mod error;
pub use error::Error;

pub mod fetch_window;
pub use fetch_window::FetchWindow;

pub mod history_writer;
pub use history_writer::HistoryWriter;

pub mod mention_aggregator;
pub use mention_aggregator::MentionAggregator;

pub mod mention_record;
pub use mention_record::MentionRecord;

pub mod run_metadata;
pub use run_metadata::RunMetadata;

pub mod run_outcome;
pub use run_outcome::RunOutcome;
