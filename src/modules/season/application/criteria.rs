use crate::modules::season::application::use_cases::get_season_summaries::GetSeasonSummariesQuery;
use crate::modules::season::domain::entities::SeasonName;
use crate::modules::season::domain::repositories::SeasonSearchCriteria;

/// Translates a season summary query into repository search criteria
pub struct SeasonSearchCriteriaService;

impl SeasonSearchCriteriaService {
    pub fn new() -> Self {
        Self
    }

    /// An unparseable season name yields criteria matching nothing, so the
    /// lookup resolves to "unknown season" instead of failing.
    pub fn build_criteria(&self, query: &GetSeasonSummariesQuery) -> SeasonSearchCriteria {
        SeasonSearchCriteria {
            name: SeasonName::parse(&query.season_name),
            year: query.season_year,
        }
    }
}

impl Default for SeasonSearchCriteriaService {
    fn default() -> Self {
        Self::new()
    }
}
