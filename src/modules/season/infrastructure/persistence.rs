use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::season::domain::entities::{Season, SeasonName};
use crate::modules::season::domain::repositories::{SeasonRepository, SeasonSearchCriteria};
use crate::schema::seasons;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{run_blocking, Database};

#[derive(Queryable)]
struct SeasonRow {
    id: Uuid,
    name: String,
    year: i32,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = seasons)]
struct NewSeasonRow {
    name: String,
    year: i32,
}

impl SeasonRow {
    fn into_entity(self) -> AppResult<Season> {
        let name = SeasonName::parse(&self.name).ok_or_else(|| {
            AppError::InternalError(format!("Invalid season name in database: {}", self.name))
        })?;

        Ok(Season {
            id: self.id,
            name,
            year: self.year,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

pub struct SeasonRepositoryImpl {
    db: Arc<Database>,
}

impl SeasonRepositoryImpl {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SeasonRepository for SeasonRepositoryImpl {
    async fn get(&self, criteria: &SeasonSearchCriteria) -> AppResult<Option<Season>> {
        // Criteria without a parseable name match nothing by contract.
        let Some(name) = criteria.name else {
            return Ok(None);
        };
        let year = criteria.year;

        let row: Option<SeasonRow> = run_blocking(self.db.pool().clone(), move |conn| {
            seasons::table
                .filter(seasons::name.eq(name.to_string()))
                .filter(seasons::year.eq(year))
                .first::<SeasonRow>(conn)
                .optional()
                .map_err(AppError::from)
        })
        .await?;

        row.map(SeasonRow::into_entity).transpose()
    }

    async fn get_or_create(&self, name: SeasonName, year: i32) -> AppResult<Season> {
        let row: SeasonRow = run_blocking(self.db.pool().clone(), move |conn| {
            diesel::insert_into(seasons::table)
                .values(NewSeasonRow {
                    name: name.to_string(),
                    year,
                })
                .on_conflict((seasons::name, seasons::year))
                .do_update()
                .set(seasons::updated_at.eq(diesel::dsl::now))
                .get_result::<SeasonRow>(conn)
                .map_err(AppError::from)
        })
        .await?;

        row.into_entity()
    }
}
