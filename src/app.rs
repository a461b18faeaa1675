//! Composition root: wires configuration, the connection pool, repositories
//! and handlers into a ready-to-embed application context. The HTTP layer
//! hosting this crate constructs an [`AppContext`] at startup and calls the
//! handlers it exposes.

use std::sync::Arc;

use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;
use tokio::task::JoinHandle;

use crate::modules::anime::domain::repositories::AnimeRepository;
use crate::modules::anime::infrastructure::AnimeRepositoryImpl;
use crate::modules::jobs::infrastructure::JobRepositoryImpl;
use crate::modules::jobs::{BackgroundWorker, JobRepository};
use crate::modules::provider::JikanClient;
use crate::modules::season::application::criteria::SeasonSearchCriteriaService;
use crate::modules::season::domain::repositories::SeasonRepository;
use crate::modules::season::infrastructure::SeasonRepositoryImpl;
use crate::modules::season::GetSeasonSummariesHandler;
use crate::modules::seiyuu::domain::repositories::{SeasonRoleRepository, SeiyuuRepository};
use crate::modules::seiyuu::infrastructure::{SeasonRoleRepositoryImpl, SeiyuuRepositoryImpl};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::{AppConfig, Database};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

pub struct AppContext {
    pub season_summary_handler: Arc<GetSeasonSummariesHandler>,
    pub job_repository: Arc<dyn JobRepository>,
    pub background_worker: Arc<BackgroundWorker>,
}

impl AppContext {
    /// Build the full dependency graph from an already-loaded configuration
    /// and run pending migrations.
    pub fn initialize(config: &AppConfig) -> AppResult<Self> {
        let database = Arc::new(Database::new(&config.database_url)?);

        {
            let mut conn = database.get_connection()?;
            conn.run_pending_migrations(MIGRATIONS).map_err(|e| {
                AppError::DatabaseError(format!("Failed to run migrations: {}", e))
            })?;
            info!("Database migrations completed");
        }

        let season_repository: Arc<dyn SeasonRepository> =
            Arc::new(SeasonRepositoryImpl::new(Arc::clone(&database)));
        let anime_repository: Arc<dyn AnimeRepository> =
            Arc::new(AnimeRepositoryImpl::new(Arc::clone(&database)));
        let role_repository: Arc<dyn SeasonRoleRepository> =
            Arc::new(SeasonRoleRepositoryImpl::new(Arc::clone(&database)));
        let seiyuu_repository: Arc<dyn SeiyuuRepository> =
            Arc::new(SeiyuuRepositoryImpl::new(Arc::clone(&database)));

        let season_summary_handler = Arc::new(GetSeasonSummariesHandler::new(
            Arc::clone(&season_repository),
            Arc::clone(&anime_repository),
            Arc::clone(&role_repository),
            SeasonSearchCriteriaService::new(),
        ));

        let job_repository: Arc<dyn JobRepository> =
            Arc::new(JobRepositoryImpl::new(database.pool().clone()));

        let jikan_client = Arc::new(JikanClient::new(&config.jikan_url)?);

        let background_worker = Arc::new(BackgroundWorker::new(
            Arc::clone(&job_repository),
            anime_repository,
            seiyuu_repository,
            season_repository,
            jikan_client,
            config.worker_poll_interval,
        ));

        Ok(Self {
            season_summary_handler,
            job_repository,
            background_worker,
        })
    }

    /// Start the catalog-refresh worker on the current runtime
    pub fn spawn_worker(&self) -> JoinHandle<()> {
        let worker = Arc::clone(&self.background_worker);
        tokio::spawn(async move {
            worker.run().await;
        })
    }
}
