use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::anime::domain::entities::{Anime, AnimeType, AnimeTypeFilter};
use crate::modules::anime::domain::repositories::AnimeRepository;
use crate::schema::anime;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{run_blocking, Database};

#[derive(Queryable)]
pub(crate) struct AnimeRow {
    pub id: Uuid,
    pub mal_id: i64,
    pub title: String,
    pub anime_type: String,
    pub image_url: Option<String>,
    pub about: Option<String>,
    pub season_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(AsChangeset)]
#[diesel(table_name = anime)]
struct AnimeChangeset {
    title: String,
    anime_type: String,
    image_url: Option<String>,
    about: Option<String>,
    season_id: Option<Uuid>,
    updated_at: DateTime<Utc>,
}

impl AnimeRow {
    pub(crate) fn into_entity(self) -> Anime {
        Anime {
            id: self.id,
            mal_id: self.mal_id,
            title: self.title,
            // FromStr for AnimeType is total (unknown formats map to Unknown)
            anime_type: self.anime_type.parse().unwrap_or(AnimeType::Unknown),
            image_url: self.image_url,
            about: self.about,
            season_id: self.season_id,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

pub struct AnimeRepositoryImpl {
    db: Arc<Database>,
}

impl AnimeRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl AnimeRepository for AnimeRepositoryImpl {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Anime>> {
        let row: Option<AnimeRow> = run_blocking(self.db.pool().clone(), move |conn| {
            anime::table
                .find(id)
                .first::<AnimeRow>(conn)
                .optional()
                .map_err(AppError::from)
        })
        .await?;

        Ok(row.map(AnimeRow::into_entity))
    }

    async fn find_all_by_season_and_type(
        &self,
        season_id: Uuid,
        type_filter: AnimeTypeFilter,
    ) -> AppResult<Vec<Anime>> {
        let rows: Vec<AnimeRow> = run_blocking(self.db.pool().clone(), move |conn| {
            let mut query = anime::table
                .filter(anime::season_id.eq(season_id))
                .into_boxed();

            if type_filter == AnimeTypeFilter::TvOnly {
                query = query.filter(anime::anime_type.eq(AnimeType::Tv.to_string()));
            }

            query
                .order(anime::title.asc())
                .load::<AnimeRow>(conn)
                .map_err(AppError::from)
        })
        .await?;

        Ok(rows.into_iter().map(AnimeRow::into_entity).collect())
    }

    async fn update(&self, entity: &Anime) -> AppResult<()> {
        let id = entity.id;
        let changeset = AnimeChangeset {
            title: entity.title.clone(),
            anime_type: entity.anime_type.to_string(),
            image_url: entity.image_url.clone(),
            about: entity.about.clone(),
            season_id: entity.season_id,
            updated_at: Utc::now(),
        };

        run_blocking(self.db.pool().clone(), move |conn| {
            diesel::update(anime::table.find(id))
                .set(changeset)
                .execute(conn)
                .map_err(AppError::from)?;
            Ok(())
        })
        .await
    }
}
