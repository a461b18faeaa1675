//! Ranking and pagination of grouped season entries.

use crate::modules::season::domain::summary::SeasonSummaryEntry;
use crate::shared::application::pagination::{PagedResult, PaginationParams};

/// Order entries by role count (descending), breaking ties by total
/// significance (descending), then slice out the requested page.
///
/// The sort is stable: entries equal on both keys keep the grouping
/// engine's first-encounter order. `total_count` reflects all grouped
/// entries, not the window length.
pub fn rank_and_page(
    mut entries: Vec<SeasonSummaryEntry>,
    params: &PaginationParams,
) -> PagedResult<SeasonSummaryEntry> {
    let total_count = entries.len() as u64;

    entries.sort_by(|a, b| {
        b.pair_count()
            .cmp(&a.pair_count())
            .then_with(|| b.total_significance_value().cmp(&a.total_significance_value()))
    });

    let results: Vec<SeasonSummaryEntry> = entries
        .into_iter()
        .skip(params.skip())
        .take(params.take())
        .collect();

    PagedResult::new(results, total_count, params)
}
