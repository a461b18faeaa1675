use crate::modules::season::application::dto::SeasonSummaryEntryDto;
use crate::shared::application::pagination::PagedResult;

/// One page of ranked season summary entries, or `None` when the season is
/// unknown or has no anime matching the type filter.
pub type GetSeasonSummariesResult = Option<PagedResult<SeasonSummaryEntryDto>>;
