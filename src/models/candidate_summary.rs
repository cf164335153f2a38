use crate::constants::TOP_MENTION_LIMIT;
use crate::models::MentionRecord;
use crate::types::{CandidateName, TickerMentionCount, TickerSymbol};

/// Per-candidate rollup of ticker co-mention counts for one run.
#[derive(Debug, Clone)]
pub struct CandidateSummary {
    pub candidate: CandidateName,
    /// Rank-ordered rendering like `"EXM (3), ACME (1)"`, truncated to the
    /// top entries.
    pub top_mentions: String,
    /// Sum over every counted ticker, not only the rendered ones.
    pub total_mentions: TickerMentionCount,
}

impl CandidateSummary {
    /// Roll the records up per candidate, candidates in first-seen order.
    /// Tickers rank by count descending; equal counts keep first-seen order.
    pub fn summarize(records: &[MentionRecord]) -> Vec<CandidateSummary> {
        let mut order: Vec<&CandidateName> = Vec::new();
        for record in records {
            if !order.contains(&&record.candidate) {
                order.push(&record.candidate);
            }
        }
        order
            .into_iter()
            .map(|candidate| Self::summarize_candidate(candidate, records))
            .collect()
    }

    fn summarize_candidate(candidate: &str, records: &[MentionRecord]) -> CandidateSummary {
        let mut counts: Vec<(TickerSymbol, TickerMentionCount)> = Vec::new();
        for record in records.iter().filter(|r| r.candidate == candidate) {
            for ticker in &record.tickers {
                match counts.iter_mut().find(|(symbol, _)| symbol == ticker) {
                    Some((_, count)) => *count += 1,
                    None => counts.push((ticker.clone(), 1)),
                }
            }
        }

        // Stable sort keeps first-seen order for equal counts.
        counts.sort_by(|a, b| b.1.cmp(&a.1));

        let top_mentions = counts
            .iter()
            .take(TOP_MENTION_LIMIT)
            .map(|(symbol, count)| format!("{} ({})", symbol, count))
            .collect::<Vec<_>>()
            .join(", ");
        let total_mentions = counts.iter().map(|(_, count)| *count).sum();

        CandidateSummary {
            candidate: candidate.to_string(),
            top_mentions,
            total_mentions,
        }
    }
}
