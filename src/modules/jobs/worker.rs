/// Background worker for catalog refresh jobs.
///
/// Continuously polls the job queue and refreshes anime/seiyuu records from
/// the external metadata provider. Start with `tokio::spawn(worker.run())`.
use log::{debug, error, info, warn};
use std::sync::Arc;
use std::time::Duration;

use crate::modules::anime::domain::repositories::AnimeRepository;
use crate::modules::jobs::domain::entities::{JobRecord, JobType};
use crate::modules::jobs::domain::repository::JobRepository;
use crate::modules::provider::JikanClient;
use crate::modules::season::domain::repositories::SeasonRepository;
use crate::modules::seiyuu::domain::repositories::SeiyuuRepository;
use crate::shared::errors::{AppError, AppResult};

pub struct BackgroundWorker {
    job_repository: Arc<dyn JobRepository>,
    anime_repository: Arc<dyn AnimeRepository>,
    seiyuu_repository: Arc<dyn SeiyuuRepository>,
    season_repository: Arc<dyn SeasonRepository>,
    jikan_client: Arc<JikanClient>,
    poll_interval: Duration,
    is_running: Arc<tokio::sync::RwLock<bool>>,
}

impl BackgroundWorker {
    pub fn new(
        job_repository: Arc<dyn JobRepository>,
        anime_repository: Arc<dyn AnimeRepository>,
        seiyuu_repository: Arc<dyn SeiyuuRepository>,
        season_repository: Arc<dyn SeasonRepository>,
        jikan_client: Arc<JikanClient>,
        poll_interval: Duration,
    ) -> Self {
        Self {
            job_repository,
            anime_repository,
            seiyuu_repository,
            season_repository,
            jikan_client,
            poll_interval,
            is_running: Arc::new(tokio::sync::RwLock::new(false)),
        }
    }

    /// Run the worker loop until `stop` is called
    pub async fn run(self: Arc<Self>) {
        info!("Background worker started");

        {
            let mut running = self.is_running.write().await;
            *running = true;
        }

        loop {
            {
                let running = self.is_running.read().await;
                if !*running {
                    info!("Background worker stopped");
                    break;
                }
            }

            match self.process_next_job().await {
                Ok(processed) => {
                    if !processed {
                        // Queue drained; sleep before the next poll.
                        tokio::time::sleep(self.poll_interval).await;
                    }
                }
                Err(e) => {
                    error!("Error in worker loop: {}", e);
                    tokio::time::sleep(self.poll_interval).await;
                }
            }
        }
    }

    pub async fn stop(&self) {
        let mut running = self.is_running.write().await;
        *running = false;
        info!("Background worker stop requested");
    }

    /// Process the next job in the queue.
    ///
    /// Returns true if a job was processed, false if the queue was empty
    async fn process_next_job(&self) -> AppResult<bool> {
        let job = match self.job_repository.dequeue().await? {
            Some(job) => job,
            None => return Ok(false),
        };

        info!(
            "Processing job {} (type: {}, attempts: {}/{})",
            job.id, job.job_type, job.attempts, job.max_attempts
        );

        let result = match job.parse_job_type() {
            Ok(JobType::UpdateAnime) => self.handle_update_anime(&job).await,
            Ok(JobType::UpdateSeiyuu) => self.handle_update_seiyuu(&job).await,
            Err(e) => {
                error!("Invalid job type '{}': {}", job.job_type, e);
                Err(AppError::ValidationError(format!("Invalid job type: {}", e)))
            }
        };

        match result {
            Ok(_) => {
                self.job_repository.mark_completed(job.id).await?;
                info!("Job {} completed successfully", job.id);
            }
            Err(e) => {
                let error_msg = format!("{}", e);
                warn!("Job {} failed: {}", job.id, error_msg);
                self.job_repository.mark_failed(job.id, &error_msg).await?;

                if !job.can_retry() {
                    error!(
                        "Job {} failed permanently after {} attempts",
                        job.id, job.attempts
                    );
                }
            }
        }

        Ok(true)
    }

    async fn handle_update_anime(&self, job: &JobRecord) -> AppResult<()> {
        let payload = job.parse_update_anime_payload().map_err(|e| {
            AppError::ValidationError(format!("Invalid update_anime payload: {}", e))
        })?;

        let mut anime = self
            .anime_repository
            .get_by_id(payload.anime_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Anime {} not found", payload.anime_id)))?;

        debug!("Refreshing anime {} (MAL {})", anime.id, anime.mal_id);

        let metadata = match self.jikan_client.get_anime_by_id(anime.mal_id).await? {
            Some(metadata) => metadata,
            None => {
                warn!("MAL {} no longer exists upstream, skipping refresh", anime.mal_id);
                return Ok(());
            }
        };

        anime.title = metadata.title;
        anime.anime_type = metadata.anime_type;
        if metadata.image_url.is_some() {
            anime.image_url = metadata.image_url;
        }
        if metadata.about.is_some() {
            anime.about = metadata.about;
        }

        if let Some((season_name, year)) = metadata.season {
            let season = self.season_repository.get_or_create(season_name, year).await?;
            anime.season_id = Some(season.id);
        }

        self.anime_repository.update(&anime).await?;
        info!("Anime {} refreshed from provider", anime.id);

        Ok(())
    }

    async fn handle_update_seiyuu(&self, job: &JobRecord) -> AppResult<()> {
        let payload = job.parse_update_seiyuu_payload().map_err(|e| {
            AppError::ValidationError(format!("Invalid update_seiyuu payload: {}", e))
        })?;

        let mut seiyuu = self
            .seiyuu_repository
            .get_by_id(payload.seiyuu_id)
            .await?
            .ok_or_else(|| {
                AppError::NotFound(format!("Seiyuu {} not found", payload.seiyuu_id))
            })?;

        debug!("Refreshing seiyuu {} (MAL {})", seiyuu.id, seiyuu.mal_id);

        let metadata = match self.jikan_client.get_person_by_id(seiyuu.mal_id).await? {
            Some(metadata) => metadata,
            None => {
                warn!("MAL person {} no longer exists upstream, skipping refresh", seiyuu.mal_id);
                return Ok(());
            }
        };

        seiyuu.name = metadata.name;
        if metadata.japanese_name.is_some() {
            seiyuu.japanese_name = metadata.japanese_name;
        }
        if metadata.image_url.is_some() {
            seiyuu.image_url = metadata.image_url;
        }
        if metadata.about.is_some() {
            seiyuu.about = metadata.about;
        }

        self.seiyuu_repository.update(&seiyuu).await?;
        info!("Seiyuu {} refreshed from provider", seiyuu.id);

        Ok(())
    }

    /// Queue and worker state, for monitoring
    pub async fn get_statistics(&self) -> AppResult<WorkerStatistics> {
        let job_stats = self.job_repository.get_statistics().await?;
        let is_running = *self.is_running.read().await;

        Ok(WorkerStatistics {
            is_running,
            pending_jobs: job_stats.pending_count,
            running_jobs: job_stats.running_count,
            completed_jobs: job_stats.completed_count,
            failed_jobs: job_stats.failed_count,
            total_jobs: job_stats.total_count,
        })
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct WorkerStatistics {
    pub is_running: bool,
    pub pending_jobs: i64,
    pub running_jobs: i64,
    pub completed_jobs: i64,
    pub failed_jobs: i64,
    pub total_jobs: i64,
}
