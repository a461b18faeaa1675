use async_trait::async_trait;

use crate::modules::season::domain::entities::{Season, SeasonName};
use crate::shared::errors::AppResult;

/// Filter for season lookups. `name: None` matches nothing; it is produced
/// when the requested season name does not parse, which the pipeline treats
/// as an unknown season rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeasonSearchCriteria {
    pub name: Option<SeasonName>,
    pub year: i32,
}

/// Port for season persistence; infrastructure provides the implementation
#[async_trait]
pub trait SeasonRepository: Send + Sync {
    /// Find the season matching the criteria
    async fn get(&self, criteria: &SeasonSearchCriteria) -> AppResult<Option<Season>>;

    /// Find a season by exact name and year, inserting it when absent.
    /// Used by catalog-update jobs when a provider reports a new window.
    async fn get_or_create(&self, name: SeasonName, year: i32) -> AppResult<Season>;
}
