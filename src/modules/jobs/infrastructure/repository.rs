/// Diesel-based implementation of JobRepository
///
/// Uses PostgreSQL with SELECT FOR UPDATE SKIP LOCKED for atomic job
/// dequeuing, so multiple workers never pick up the same job.
use async_trait::async_trait;
use diesel::prelude::*;
use uuid::Uuid;

use crate::modules::jobs::domain::entities::{Job, JobRecord};
use crate::modules::jobs::domain::repository::{JobRepository, JobStatistics};
use crate::modules::jobs::infrastructure::models::{BackgroundJobModel, NewJob};
use crate::schema::background_jobs;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::infrastructure::{run_blocking, DbPool};

/// Helper struct for COUNT queries
#[derive(QueryableByName)]
struct CountResult {
    #[diesel(sql_type = diesel::sql_types::BigInt)]
    count: i64,
}

pub struct JobRepositoryImpl {
    pool: DbPool,
}

impl JobRepositoryImpl {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl JobRepository for JobRepositoryImpl {
    async fn enqueue(&self, job: Job) -> AppResult<JobRecord> {
        let new_job = NewJob {
            job_type: job.job_type.to_string(),
            payload: job.payload,
            priority: job.priority,
        };

        let inserted: BackgroundJobModel = run_blocking(self.pool.clone(), move |conn| {
            diesel::insert_into(background_jobs::table)
                .values(&new_job)
                .get_result(conn)
                .map_err(|e| AppError::DatabaseError(format!("Failed to enqueue job: {}", e)))
        })
        .await?;

        Ok(inserted.to_job_record())
    }

    async fn dequeue(&self) -> AppResult<Option<JobRecord>> {
        let result: Option<BackgroundJobModel> = run_blocking(self.pool.clone(), |conn| {
            diesel::sql_query(
                r#"
                UPDATE background_jobs
                SET status = 'running',
                    started_at = NOW(),
                    attempts = attempts + 1
                WHERE id = (
                    SELECT id
                    FROM background_jobs
                    WHERE status = 'pending'
                      AND attempts < max_attempts
                    ORDER BY priority ASC, created_at ASC
                    LIMIT 1
                    FOR UPDATE SKIP LOCKED
                )
                RETURNING id, job_type, payload, priority, status,
                          attempts, max_attempts, created_at,
                          started_at, completed_at, error
                "#,
            )
            .get_result(conn)
            .optional()
            .map_err(|e| AppError::DatabaseError(format!("Failed to dequeue job: {}", e)))
        })
        .await?;

        Ok(result.map(|job| job.to_job_record()))
    }

    async fn mark_completed(&self, job_id: Uuid) -> AppResult<()> {
        run_blocking(self.pool.clone(), move |conn| {
            diesel::sql_query(
                "UPDATE background_jobs
                 SET status = 'completed', completed_at = NOW()
                 WHERE id = $1",
            )
            .bind::<diesel::sql_types::Uuid, _>(job_id)
            .execute(conn)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to mark job as completed: {}", e))
            })?;
            Ok(())
        })
        .await
    }

    async fn mark_failed(&self, job_id: Uuid, error: &str) -> AppResult<()> {
        let error = error.to_string();

        run_blocking(self.pool.clone(), move |conn| {
            // Reset to pending while attempts remain; park as failed after.
            diesel::sql_query(
                "UPDATE background_jobs
                 SET status = CASE
                     WHEN attempts < max_attempts THEN 'pending'
                     ELSE 'failed'
                 END,
                 completed_at = CASE
                     WHEN attempts >= max_attempts THEN NOW()
                     ELSE NULL
                 END,
                 started_at = NULL,
                 error = $2
                 WHERE id = $1",
            )
            .bind::<diesel::sql_types::Uuid, _>(job_id)
            .bind::<diesel::sql_types::Text, _>(error)
            .execute(conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to mark job as failed: {}", e)))?;
            Ok(())
        })
        .await
    }

    async fn get_by_id(&self, job_id: Uuid) -> AppResult<Option<JobRecord>> {
        let job: Option<BackgroundJobModel> = run_blocking(self.pool.clone(), move |conn| {
            background_jobs::table
                .find(job_id)
                .first(conn)
                .optional()
                .map_err(|e| AppError::DatabaseError(format!("Failed to get job by id: {}", e)))
        })
        .await?;

        Ok(job.map(|j| j.to_job_record()))
    }

    async fn get_pending_jobs(&self) -> AppResult<Vec<JobRecord>> {
        let jobs: Vec<BackgroundJobModel> = run_blocking(self.pool.clone(), |conn| {
            background_jobs::table
                .filter(background_jobs::status.eq("pending"))
                .order((
                    background_jobs::priority.asc(),
                    background_jobs::created_at.asc(),
                ))
                .load(conn)
                .map_err(|e| AppError::DatabaseError(format!("Failed to get pending jobs: {}", e)))
        })
        .await?;

        Ok(jobs.into_iter().map(|j| j.to_job_record()).collect())
    }

    async fn delete_old_completed(&self, days: i32) -> AppResult<usize> {
        run_blocking(self.pool.clone(), move |conn| {
            diesel::sql_query(
                "DELETE FROM background_jobs
                 WHERE status IN ('completed', 'failed')
                 AND completed_at < NOW() - INTERVAL '1 day' * $1",
            )
            .bind::<diesel::sql_types::Integer, _>(days)
            .execute(conn)
            .map_err(|e| AppError::DatabaseError(format!("Failed to delete old jobs: {}", e)))
        })
        .await
    }

    async fn get_statistics(&self) -> AppResult<JobStatistics> {
        run_blocking(self.pool.clone(), |conn| {
            let count_by_status = |conn: &mut PgConnection, status: &str| -> AppResult<i64> {
                let row: CountResult = diesel::sql_query(
                    "SELECT COUNT(*) as count FROM background_jobs WHERE status = $1",
                )
                .bind::<diesel::sql_types::Text, _>(status)
                .get_result(conn)
                .map_err(|e| AppError::DatabaseError(format!("Failed to count jobs: {}", e)))?;
                Ok(row.count)
            };

            let pending = count_by_status(&mut *conn, "pending")?;
            let running = count_by_status(&mut *conn, "running")?;
            let completed = count_by_status(&mut *conn, "completed")?;
            let failed = count_by_status(&mut *conn, "failed")?;

            let total: CountResult =
                diesel::sql_query("SELECT COUNT(*) as count FROM background_jobs")
                    .get_result(conn)
                    .map_err(|e| AppError::DatabaseError(format!("Failed to count total: {}", e)))?;

            Ok(JobStatistics {
                pending_count: pending,
                running_count: running,
                completed_count: completed,
                failed_count: failed,
                total_count: total.count,
            })
        })
        .await
    }
}
