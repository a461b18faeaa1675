use log::{debug, warn};
use reqwest::StatusCode;
use std::time::Duration;
use tokio::time::sleep;

use crate::shared::errors::{AppError, AppResult};

/// Retry configuration for external API calls
#[derive(Debug, Clone)]
pub struct RetryConfig {
    pub max_retries: u32,
    pub base_delay: Duration,
    pub max_delay: Duration,
    pub backoff_multiplier: f64,
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_retries: 3,
            base_delay: Duration::from_millis(500),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
            jitter: true,
        }
    }
}

impl RetryConfig {
    /// Conservative settings for background catalog refreshes
    pub fn conservative() -> Self {
        Self {
            max_retries: 2,
            base_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(10),
            backoff_multiplier: 1.5,
            jitter: true,
        }
    }
}

/// Retry utility for external API calls with exponential backoff
pub struct RetryUtil;

impl RetryUtil {
    pub async fn with_retry<F, Fut, T>(
        operation: F,
        config: &RetryConfig,
        operation_name: &str,
    ) -> AppResult<T>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = AppResult<T>>,
    {
        let mut last_error = None;

        for attempt in 0..=config.max_retries {
            match operation().await {
                Ok(result) => {
                    if attempt > 0 {
                        debug!(
                            "{} succeeded on attempt {} after {} retries",
                            operation_name,
                            attempt + 1,
                            attempt
                        );
                    }
                    return Ok(result);
                }
                Err(error) => {
                    last_error = Some(error.clone());

                    if !Self::is_retryable_error(&error) {
                        debug!(
                            "{} failed with non-retryable error: {}",
                            operation_name, error
                        );
                        return Err(error);
                    }

                    if attempt < config.max_retries {
                        let delay = Self::calculate_delay(attempt, config);
                        warn!(
                            "{} failed on attempt {} ({}), retrying in {:?}",
                            operation_name,
                            attempt + 1,
                            error,
                            delay
                        );
                        sleep(delay).await;
                    } else {
                        warn!(
                            "{} failed on final attempt {} ({}), giving up",
                            operation_name,
                            attempt + 1,
                            error
                        );
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| AppError::ExternalServiceError("All retries exhausted".to_string())))
    }

    fn calculate_delay(attempt: u32, config: &RetryConfig) -> Duration {
        let exponential_delay =
            config.base_delay.as_millis() as f64 * config.backoff_multiplier.powi(attempt as i32);

        let mut delay = Duration::from_millis(exponential_delay as u64);

        if delay > config.max_delay {
            delay = config.max_delay;
        }

        // Jitter spreads out concurrent retries
        if config.jitter {
            let jitter_factor = 0.1;
            let jitter_ms =
                (delay.as_millis() as f64 * jitter_factor * rand::random::<f64>()) as u64;
            delay = Duration::from_millis(delay.as_millis() as u64 + jitter_ms);
        }

        delay
    }

    fn is_retryable_error(error: &AppError) -> bool {
        match error {
            AppError::ExternalServiceError(_)
            | AppError::RateLimitError(_)
            | AppError::InternalError(_)
            | AppError::SerializationError(_)
            | AppError::DatabaseError(_) => true,

            AppError::ApiError(msg) => {
                let msg = msg.to_lowercase();
                !msg.contains("not found")
                    && !msg.contains("unauthorized")
                    && !msg.contains("forbidden")
                    && !msg.contains("bad request")
            }

            AppError::ValidationError(_)
            | AppError::InvalidInput(_)
            | AppError::NotFound(_)
            | AppError::ConfigError(_)
            | AppError::Cancelled => false,
        }
    }

    /// Retry specifically for HTTP requests with status code analysis
    pub async fn retry_http_request<F, Fut>(
        request_fn: F,
        config: &RetryConfig,
        operation_name: &str,
    ) -> AppResult<reqwest::Response>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        Self::with_retry(
            || async {
                match request_fn().await {
                    Ok(response) => {
                        let status = response.status();
                        if Self::is_retryable_status(status) {
                            Err(Self::status_to_app_error(status))
                        } else {
                            Ok(response)
                        }
                    }
                    Err(e) => Err(AppError::ExternalServiceError(format!(
                        "HTTP request failed: {}",
                        e
                    ))),
                }
            },
            config,
            operation_name,
        )
        .await
    }

    fn is_retryable_status(status: StatusCode) -> bool {
        matches!(
            status,
            StatusCode::INTERNAL_SERVER_ERROR
                | StatusCode::BAD_GATEWAY
                | StatusCode::SERVICE_UNAVAILABLE
                | StatusCode::GATEWAY_TIMEOUT
                | StatusCode::TOO_MANY_REQUESTS
                | StatusCode::REQUEST_TIMEOUT
        )
    }

    fn status_to_app_error(status: StatusCode) -> AppError {
        match status {
            StatusCode::TOO_MANY_REQUESTS => {
                AppError::RateLimitError("Rate limit exceeded".to_string())
            }
            StatusCode::NOT_FOUND => AppError::NotFound("Resource not found".to_string()),
            _ if status.is_server_error() => {
                AppError::ExternalServiceError(format!("Server error: {}", status))
            }
            _ => AppError::ApiError(format!("HTTP error: {}", status)),
        }
    }
}

/// Common HTTP plumbing for provider clients
pub struct CommonHttpHandler;

impl CommonHttpHandler {
    pub fn handle_response_status(status: StatusCode, provider_name: &str) -> AppResult<()> {
        match status {
            StatusCode::OK => Ok(()),
            StatusCode::TOO_MANY_REQUESTS => Err(AppError::RateLimitError(format!(
                "{} rate limit exceeded",
                provider_name
            ))),
            StatusCode::NOT_FOUND => Err(AppError::NotFound("Resource not found".to_string())),
            StatusCode::BAD_REQUEST => Err(AppError::ApiError(format!(
                "Bad request to {} API",
                provider_name
            ))),
            StatusCode::INTERNAL_SERVER_ERROR
            | StatusCode::SERVICE_UNAVAILABLE
            | StatusCode::BAD_GATEWAY
            | StatusCode::GATEWAY_TIMEOUT => Err(AppError::ExternalServiceError(format!(
                "{} service unavailable",
                provider_name
            ))),
            _ => Err(AppError::ApiError(format!(
                "Unexpected status code from {}: {}",
                provider_name, status
            ))),
        }
    }

    pub fn create_http_client(timeout_secs: u64, user_agent: &str) -> AppResult<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| {
                AppError::ExternalServiceError(format!("Failed to create HTTP client: {}", e))
            })
    }

    /// Execute HTTP request with retry logic
    pub async fn execute_with_retry<F, Fut>(
        request_fn: F,
        provider_name: &str,
        operation_name: &str,
    ) -> AppResult<reqwest::Response>
    where
        F: Fn() -> Fut,
        Fut: std::future::Future<Output = Result<reqwest::Response, reqwest::Error>>,
    {
        let retry_config = RetryConfig::conservative();

        RetryUtil::retry_http_request(
            request_fn,
            &retry_config,
            &format!("{} {}", provider_name, operation_name),
        )
        .await
        .and_then(|response| {
            let status = response.status();
            Self::handle_response_status(status, provider_name)?;
            Ok(response)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn retries_transient_errors_until_success() {
        let attempts = AtomicU32::new(0);
        let config = RetryConfig {
            max_retries: 3,
            base_delay: Duration::from_millis(1),
            max_delay: Duration::from_millis(5),
            backoff_multiplier: 1.0,
            jitter: false,
        };

        let result = RetryUtil::with_retry(
            || async {
                if attempts.fetch_add(1, Ordering::SeqCst) < 2 {
                    Err(AppError::ExternalServiceError("flaky".to_string()))
                } else {
                    Ok(42)
                }
            },
            &config,
            "test op",
        )
        .await;

        assert_eq!(result.unwrap(), 42);
        assert_eq!(attempts.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn does_not_retry_not_found() {
        let attempts = AtomicU32::new(0);
        let config = RetryConfig::default();

        let result: AppResult<()> = RetryUtil::with_retry(
            || async {
                attempts.fetch_add(1, Ordering::SeqCst);
                Err(AppError::NotFound("gone".to_string()))
            },
            &config,
            "test op",
        )
        .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound(_)));
        assert_eq!(attempts.load(Ordering::SeqCst), 1);
    }
}
