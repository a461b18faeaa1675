use reqwest::Client;
use std::sync::Arc;

use crate::modules::provider::retry::CommonHttpHandler;
use crate::modules::season::domain::entities::SeasonName;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::RateLimiter;

use super::{
    dto::{JikanAnimeListResponse, JikanAnimeResponse, JikanPersonResponse},
    mapper::{AnimeMetadata, JikanMapper, SeiyuuMetadata},
};

/// Client for the Jikan (MyAnimeList) v4 API.
///
/// The base URL comes from configuration so test and staging environments
/// can point at a local Jikan instance.
pub struct JikanClient {
    client: Client,
    base_url: String,
    rate_limiter: Arc<RateLimiter>,
}

impl JikanClient {
    pub fn new(base_url: &str) -> AppResult<Self> {
        let client = CommonHttpHandler::create_http_client(30, "seiyuu-catalog/0.1")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            rate_limiter: Arc::new(RateLimiter::new(3.0)), // official Jikan limit
        })
    }

    pub async fn get_anime_by_id(&self, mal_id: i64) -> AppResult<Option<AnimeMetadata>> {
        self.rate_limiter.wait().await;

        let url = format!("{}/anime/{}", self.base_url, mal_id);
        let response = match CommonHttpHandler::execute_with_retry(
            || self.client.get(&url).send(),
            "Jikan",
            "get anime by ID",
        )
        .await
        {
            Ok(response) => response,
            Err(AppError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        let jikan_response = response
            .json::<JikanAnimeResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))?;

        Ok(Some(JikanMapper::to_anime_metadata(jikan_response.data)))
    }

    pub async fn get_person_by_id(&self, mal_id: i64) -> AppResult<Option<SeiyuuMetadata>> {
        self.rate_limiter.wait().await;

        let url = format!("{}/people/{}", self.base_url, mal_id);
        let response = match CommonHttpHandler::execute_with_retry(
            || self.client.get(&url).send(),
            "Jikan",
            "get person by ID",
        )
        .await
        {
            Ok(response) => response,
            Err(AppError::NotFound(_)) => return Ok(None),
            Err(e) => return Err(e),
        };

        let jikan_response = response
            .json::<JikanPersonResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))?;

        Ok(Some(JikanMapper::to_seiyuu_metadata(jikan_response.data)))
    }

    pub async fn get_seasonal_anime(
        &self,
        year: i32,
        season: SeasonName,
        page: i32,
    ) -> AppResult<Vec<AnimeMetadata>> {
        self.rate_limiter.wait().await;

        let url = format!("{}/seasons/{}/{}", self.base_url, year, season);
        let response = CommonHttpHandler::execute_with_retry(
            || {
                self.client
                    .get(&url)
                    .query(&[("page", page.to_string())])
                    .send()
            },
            "Jikan",
            "get seasonal anime",
        )
        .await?;

        let jikan_response = response
            .json::<JikanAnimeListResponse>()
            .await
            .map_err(|e| AppError::ApiError(format!("Failed to parse Jikan response: {}", e)))?;

        Ok(jikan_response
            .data
            .into_iter()
            .map(JikanMapper::to_anime_metadata)
            .collect())
    }
}
