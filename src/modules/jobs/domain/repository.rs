use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::jobs::domain::entities::{Job, JobRecord};
use crate::shared::errors::AppResult;

#[async_trait]
pub trait JobRepository: Send + Sync {
    /// Enqueue a new job
    async fn enqueue(&self, job: Job) -> AppResult<JobRecord>;

    /// Dequeue the next pending job (atomic, safe with concurrent workers).
    /// Returns None if no jobs are available
    async fn dequeue(&self) -> AppResult<Option<JobRecord>>;

    /// Mark job as completed
    async fn mark_completed(&self, job_id: Uuid) -> AppResult<()>;

    /// Mark job as failed; it returns to pending while attempts remain
    async fn mark_failed(&self, job_id: Uuid, error: &str) -> AppResult<()>;

    /// Get job by ID
    async fn get_by_id(&self, job_id: Uuid) -> AppResult<Option<JobRecord>>;

    /// All pending jobs, for monitoring
    async fn get_pending_jobs(&self) -> AppResult<Vec<JobRecord>>;

    /// Delete completed/failed jobs older than the given number of days
    async fn delete_old_completed(&self, days: i32) -> AppResult<usize>;

    /// Queue counters by status
    async fn get_statistics(&self) -> AppResult<JobStatistics>;
}

/// Job queue statistics
#[derive(Debug, Clone)]
pub struct JobStatistics {
    pub pending_count: i64,
    pub running_count: i64,
    pub completed_count: i64,
    pub failed_count: i64,
    pub total_count: i64,
}
