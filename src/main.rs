use election_ticker_sniffer::{
    run_pipeline, AliasIndex, AliasSource, ArticleBodyFetcher, DocApiClient, RunConfig,
    RunOutcome, CRYPTO_ENTRIES, SYMBOL_EXCLUSIONS,
};
use log::{error, info, warn};

fn main() {
    // Initialize the logger
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yml".to_string());
    let cfg = match RunConfig::load(&config_path) {
        Ok(cfg) => cfg,
        Err(err) => {
            error!("Unusable configuration ({}): {}", config_path, err);
            std::process::exit(1);
        }
    };
    info!("Candidates: {:?}", cfg.candidates);

    // Refresh the cached listing files and build the alias index. A failed
    // refresh or an unreadable source only reduces alias coverage.
    let sources = AliasSource::default_sources(cfg.data_path());
    AliasSource::refresh_all(&sources);
    let alias_index = AliasIndex::build(&sources, CRYPTO_ENTRIES, SYMBOL_EXCLUSIONS);
    if alias_index.is_empty() {
        warn!("Alias index is empty; no ticker mentions can be detected this run");
    }

    let search = match DocApiClient::new() {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to build search client: {}", err);
            std::process::exit(1);
        }
    };
    let body_fetch = match ArticleBodyFetcher::new() {
        Ok(client) => client,
        Err(err) => {
            error!("Failed to build body-fetch client: {}", err);
            std::process::exit(1);
        }
    };

    match run_pipeline(&cfg, &alias_index, &search, &body_fetch) {
        Ok(RunOutcome::NoArticles) => info!("No articles collected; exiting."),
        Ok(RunOutcome::NoMentions) => info!("No candidate-ticker sentences found; exiting."),
        Ok(RunOutcome::Completed {
            articles,
            mentions,
            summaries,
        }) => {
            info!("Analyzed {} articles into {} mention records", articles, mentions);
            for summary in &summaries {
                println!(
                    "{}: {} (total {})",
                    summary.candidate, summary.top_mentions, summary.total_mentions
                );
            }
        }
        Err(err) => {
            error!("Run failed: {}", err);
            std::process::exit(1);
        }
    }
}
