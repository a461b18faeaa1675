use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::jobs::domain::entities::JobRecord;
use crate::schema::background_jobs;

#[derive(Queryable, QueryableByName)]
#[diesel(table_name = background_jobs)]
pub struct BackgroundJobModel {
    pub id: Uuid,
    pub job_type: String,
    pub payload: serde_json::Value,
    pub priority: i32,
    pub status: String,
    pub attempts: i32,
    pub max_attempts: i32,
    pub created_at: DateTime<Utc>,
    pub started_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub error: Option<String>,
}

#[derive(Insertable)]
#[diesel(table_name = background_jobs)]
pub struct NewJob {
    pub job_type: String,
    pub payload: serde_json::Value,
    pub priority: i32,
}

impl BackgroundJobModel {
    pub fn to_job_record(self) -> JobRecord {
        JobRecord {
            id: self.id,
            job_type: self.job_type,
            payload: self.payload,
            priority: self.priority,
            status: self.status,
            attempts: self.attempts,
            max_attempts: self.max_attempts,
            created_at: self.created_at,
            started_at: self.started_at,
            completed_at: self.completed_at,
            error: self.error,
        }
    }
}
