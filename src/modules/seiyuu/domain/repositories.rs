use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::seiyuu::domain::entities::{AnimeRole, Seiyuu};
use crate::shared::errors::AppResult;

/// Port for the season role query; infrastructure provides the implementation
#[async_trait]
pub trait SeasonRoleRepository: Send + Sync {
    /// All voice-acting credits across the given anime, optionally restricted
    /// to main roles. Credits without an assigned seiyuu are excluded.
    async fn get_all_roles_in_season(
        &self,
        anime_ids: &[Uuid],
        main_roles_only: bool,
    ) -> AppResult<Vec<AnimeRole>>;
}

/// Port for seiyuu persistence; infrastructure provides the implementation
#[async_trait]
pub trait SeiyuuRepository: Send + Sync {
    /// Find seiyuu by ID
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Seiyuu>>;

    /// Persist refreshed catalog data for an existing seiyuu
    async fn update(&self, seiyuu: &Seiyuu) -> AppResult<()>;
}
