use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::anime::infrastructure::persistence::AnimeRow;
use crate::modules::seiyuu::domain::entities::{AnimeCharacter, AnimeRole, Seiyuu};
use crate::modules::seiyuu::domain::repositories::{SeasonRoleRepository, SeiyuuRepository};
use crate::schema::{anime, anime_characters, anime_roles, seiyuu};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{run_blocking, Database};

#[derive(Queryable)]
struct SeiyuuRow {
    id: Uuid,
    mal_id: i64,
    name: String,
    japanese_name: Option<String>,
    image_url: Option<String>,
    about: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Queryable)]
struct AnimeCharacterRow {
    id: Uuid,
    mal_id: i64,
    name: String,
    image_url: Option<String>,
}

#[derive(Queryable)]
struct AnimeRoleRow {
    id: Uuid,
    #[allow(dead_code)]
    anime_id: Uuid,
    #[allow(dead_code)]
    character_id: Uuid,
    #[allow(dead_code)]
    seiyuu_id: Option<Uuid>,
    role_type: String,
}

#[derive(AsChangeset)]
#[diesel(table_name = seiyuu)]
struct SeiyuuChangeset {
    name: String,
    japanese_name: Option<String>,
    image_url: Option<String>,
    about: Option<String>,
    updated_at: DateTime<Utc>,
}

impl SeiyuuRow {
    fn into_entity(self) -> Seiyuu {
        Seiyuu {
            id: self.id,
            mal_id: self.mal_id,
            name: self.name,
            japanese_name: self.japanese_name,
            image_url: self.image_url,
            about: self.about,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl AnimeCharacterRow {
    fn into_entity(self) -> AnimeCharacter {
        AnimeCharacter {
            id: self.id,
            mal_id: self.mal_id,
            name: self.name,
            image_url: self.image_url,
        }
    }
}

pub struct SeasonRoleRepositoryImpl {
    db: Arc<Database>,
}

impl SeasonRoleRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeasonRoleRepository for SeasonRoleRepositoryImpl {
    async fn get_all_roles_in_season(
        &self,
        anime_ids: &[Uuid],
        main_roles_only: bool,
    ) -> AppResult<Vec<AnimeRole>> {
        let ids: Vec<Uuid> = anime_ids.to_vec();

        let rows: Vec<(AnimeRoleRow, SeiyuuRow, AnimeRow, AnimeCharacterRow)> =
            run_blocking(self.db.pool().clone(), move |conn| {
                // The inner join on seiyuu excludes unassigned credits.
                let mut query = anime_roles::table
                    .inner_join(seiyuu::table)
                    .inner_join(anime::table)
                    .inner_join(anime_characters::table)
                    .filter(anime_roles::anime_id.eq_any(ids))
                    .into_boxed();

                if main_roles_only {
                    query = query.filter(anime_roles::role_type.eq("main"));
                }

                query.load(conn).map_err(AppError::from)
            })
            .await?;

        rows.into_iter()
            .map(|(role_row, seiyuu_row, anime_row, character_row)| {
                let role_type = role_row
                    .role_type
                    .parse()
                    .map_err(AppError::InternalError)?;

                Ok(AnimeRole {
                    id: role_row.id,
                    seiyuu: Some(seiyuu_row.into_entity()),
                    anime: anime_row.into_entity(),
                    character: character_row.into_entity(),
                    role_type,
                })
            })
            .collect()
    }
}

pub struct SeiyuuRepositoryImpl {
    db: Arc<Database>,
}

impl SeiyuuRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeiyuuRepository for SeiyuuRepositoryImpl {
    async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Seiyuu>> {
        let row: Option<SeiyuuRow> = run_blocking(self.db.pool().clone(), move |conn| {
            seiyuu::table
                .find(id)
                .first::<SeiyuuRow>(conn)
                .optional()
                .map_err(AppError::from)
        })
        .await?;

        Ok(row.map(SeiyuuRow::into_entity))
    }

    async fn update(&self, entity: &Seiyuu) -> AppResult<()> {
        let id = entity.id;
        let changeset = SeiyuuChangeset {
            name: entity.name.clone(),
            japanese_name: entity.japanese_name.clone(),
            image_url: entity.image_url.clone(),
            about: entity.about.clone(),
            updated_at: Utc::now(),
        };

        run_blocking(self.db.pool().clone(), move |conn| {
            diesel::update(seiyuu::table.find(id))
                .set(changeset)
                .execute(conn)
                .map_err(AppError::from)?;
            Ok(())
        })
        .await
    }
}
