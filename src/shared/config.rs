/// Application configuration, loaded once at startup and passed down
/// explicitly. There is no global configuration state; everything that needs
/// a setting receives it through its constructor.
use std::env;
use std::time::Duration;

use crate::shared::errors::{AppError, AppResult};

const DEFAULT_JIKAN_URL: &str = "https://api.jikan.moe/v4";
const DEFAULT_WORKER_POLL_SECS: u64 = 5;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub jikan_url: String,
    pub worker_poll_interval: Duration,
}

impl AppConfig {
    /// Read configuration from the process environment (a `.env` file is
    /// honored when present).
    pub fn from_env() -> AppResult<Self> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| AppError::ConfigError("DATABASE_URL is not set".to_string()))?;

        let jikan_url =
            env::var("JIKAN_URL").unwrap_or_else(|_| DEFAULT_JIKAN_URL.to_string());

        let worker_poll_interval = match env::var("WORKER_POLL_SECS") {
            Ok(raw) => {
                let secs = raw.parse::<u64>().map_err(|_| {
                    AppError::ConfigError(format!("WORKER_POLL_SECS is not a number: {}", raw))
                })?;
                Duration::from_secs(secs)
            }
            Err(_) => Duration::from_secs(DEFAULT_WORKER_POLL_SECS),
        };

        Ok(Self {
            database_url,
            jikan_url,
            worker_poll_interval,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_optional_settings() {
        // Only DATABASE_URL is mandatory; the rest fall back to defaults.
        let config = AppConfig {
            database_url: "postgres://localhost/seiyuu".to_string(),
            jikan_url: DEFAULT_JIKAN_URL.to_string(),
            worker_poll_interval: Duration::from_secs(DEFAULT_WORKER_POLL_SECS),
        };

        assert_eq!(config.jikan_url, "https://api.jikan.moe/v4");
        assert_eq!(config.worker_poll_interval, Duration::from_secs(5));
    }
}
