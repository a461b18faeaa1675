use std::time::Duration;

use diesel::pg::PgConnection;
use diesel::r2d2::{self, ConnectionManager, Pool};
use log::info;

use crate::shared::errors::{AppError, AppResult};

pub type DbPool = Pool<ConnectionManager<PgConnection>>;
pub type DbConnection = r2d2::PooledConnection<ConnectionManager<PgConnection>>;

/// Run a Diesel closure on the blocking thread pool so repository calls do
/// not stall the async runtime.
pub async fn run_blocking<T, F>(pool: DbPool, f: F) -> AppResult<T>
where
    F: FnOnce(&mut PgConnection) -> AppResult<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        let mut conn = pool.get().map_err(AppError::from)?;
        f(&mut conn)
    })
    .await
    .map_err(|e| AppError::InternalError(format!("Blocking database task failed: {}", e)))?
}

pub struct Database {
    pool: DbPool,
}

impl Database {
    pub fn new(database_url: &str) -> AppResult<Self> {
        let manager = ConnectionManager::<PgConnection>::new(database_url);

        let pool = r2d2::Pool::builder()
            .max_size(20)
            .min_idle(Some(3))
            .connection_timeout(Duration::from_secs(10))
            .idle_timeout(Some(Duration::from_secs(300)))
            .max_lifetime(Some(Duration::from_secs(1800)))
            .test_on_check_out(true)
            .build(manager)
            .map_err(|e| {
                AppError::DatabaseError(format!("Failed to create connection pool: {}", e))
            })?;

        info!(
            "Database connection pool initialized with max_size: {}",
            pool.max_size()
        );

        Ok(Self { pool })
    }

    pub fn get_connection(&self) -> AppResult<DbConnection> {
        self.pool.get().map_err(AppError::from)
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}
