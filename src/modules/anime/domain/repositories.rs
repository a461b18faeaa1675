use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::anime::domain::entities::{Anime, AnimeTypeFilter};
use crate::shared::errors::AppResult;

/// Port for anime persistence; infrastructure provides the implementation
#[async_trait]
pub trait AnimeRepository: Send + Sync {
    /// Find anime by ID
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Anime>>;

    /// All anime airing in the given season, optionally restricted to TV series
    async fn find_all_by_season_and_type(
        &self,
        season_id: Uuid,
        type_filter: AnimeTypeFilter,
    ) -> AppResult<Vec<Anime>>;

    /// Persist refreshed catalog data for an existing anime
    async fn update(&self, anime: &Anime) -> AppResult<()>;
}
