use async_trait::async_trait;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use uuid::Uuid;

use crate::modules::anime::domain::entities::AnimeTypeFilter;
use crate::modules::anime::domain::repositories::AnimeRepository;
use crate::modules::season::application::criteria::SeasonSearchCriteriaService;
use crate::modules::season::application::dto::SeasonSummaryEntryDto;
use crate::modules::season::domain::repositories::SeasonRepository;
use crate::modules::season::domain::services::{ranking, role_grouping};
use crate::modules::seiyuu::domain::repositories::SeasonRoleRepository;
use crate::shared::{
    application::{pagination::PaginationParams, use_case::Query},
    errors::{AppError, AppResult},
};

use super::{query::GetSeasonSummariesQuery, result::GetSeasonSummariesResult};

/// Query handler for season summaries.
///
/// Resolves the season, the anime airing in it and their voice-acting
/// credits in three dependent gates, short-circuiting to `Ok(None)` when the
/// season is unknown or empty. Grouping and ranking run in-process on the
/// fetched roles. Holds no mutable state; one instance can serve concurrent
/// queries.
pub struct GetSeasonSummariesHandler {
    season_repository: Arc<dyn SeasonRepository>,
    anime_repository: Arc<dyn AnimeRepository>,
    role_repository: Arc<dyn SeasonRoleRepository>,
    criteria_service: SeasonSearchCriteriaService,
}

impl GetSeasonSummariesHandler {
    pub fn new(
        season_repository: Arc<dyn SeasonRepository>,
        anime_repository: Arc<dyn AnimeRepository>,
        role_repository: Arc<dyn SeasonRoleRepository>,
        criteria_service: SeasonSearchCriteriaService,
    ) -> Self {
        Self {
            season_repository,
            anime_repository,
            role_repository,
            criteria_service,
        }
    }

    /// Run the query, bailing out with `AppError::Cancelled` at the next
    /// gate once `token` is cancelled. Repository failures propagate
    /// unchanged; there are no retries here.
    pub async fn execute_with_cancellation(
        &self,
        query: GetSeasonSummariesQuery,
        token: &CancellationToken,
    ) -> AppResult<GetSeasonSummariesResult> {
        // Validate pagination before touching any repository.
        let pagination = PaginationParams::new(query.page, query.page_size)?;

        if token.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        let criteria = self.criteria_service.build_criteria(&query);
        let found_season = match self.season_repository.get(&criteria).await? {
            Some(season) => season,
            None => return Ok(None),
        };

        if token.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        let type_filter = if query.tv_series_only {
            AnimeTypeFilter::TvOnly
        } else {
            AnimeTypeFilter::AllTypes
        };

        let anime_in_season = self
            .anime_repository
            .find_all_by_season_and_type(found_season.id, type_filter)
            .await?;

        if anime_in_season.is_empty() {
            return Ok(None);
        }

        if token.is_cancelled() {
            return Err(AppError::Cancelled);
        }

        let anime_ids: Vec<Uuid> = anime_in_season.iter().map(|a| a.id).collect();
        let roles = self
            .role_repository
            .get_all_roles_in_season(&anime_ids, query.main_roles_only)
            .await?;

        let grouped = role_grouping::group_roles(roles);
        let page = ranking::rank_and_page(grouped, &pagination);

        Ok(Some(page.map(|entry| SeasonSummaryEntryDto::from(&entry))))
    }
}

#[async_trait]
impl Query<GetSeasonSummariesQuery, GetSeasonSummariesResult> for GetSeasonSummariesHandler {
    async fn execute(&self, query: GetSeasonSummariesQuery) -> AppResult<GetSeasonSummariesResult> {
        self.execute_with_cancellation(query, &CancellationToken::new())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use mockall::mock;
    use mockall::predicate::eq;

    use crate::modules::anime::domain::entities::Anime;
    use crate::modules::season::domain::entities::{Season, SeasonName};
    use crate::modules::season::domain::repositories::SeasonSearchCriteria;
    use crate::modules::seiyuu::domain::entities::{AnimeRole, RoleType, Seiyuu};
    use crate::modules::season::domain::test_support::{anime, character, role, seiyuu};

    mock! {
        SeasonRepo {}

        #[async_trait]
        impl SeasonRepository for SeasonRepo {
            async fn get(&self, criteria: &SeasonSearchCriteria) -> AppResult<Option<Season>>;
            async fn get_or_create(&self, name: SeasonName, year: i32) -> AppResult<Season>;
        }
    }

    mock! {
        AnimeRepo {}

        #[async_trait]
        impl AnimeRepository for AnimeRepo {
            async fn get_by_id(&self, id: Uuid) -> AppResult<Option<Anime>>;
            async fn find_all_by_season_and_type(
                &self,
                season_id: Uuid,
                type_filter: AnimeTypeFilter,
            ) -> AppResult<Vec<Anime>>;
            async fn update(&self, anime: &Anime) -> AppResult<()>;
        }
    }

    mock! {
        RoleRepo {}

        #[async_trait]
        impl SeasonRoleRepository for RoleRepo {
            async fn get_all_roles_in_season(
                &self,
                anime_ids: &[Uuid],
                main_roles_only: bool,
            ) -> AppResult<Vec<AnimeRole>>;
        }
    }

    fn spring_2020() -> Season {
        let now = Utc::now();
        Season {
            id: Uuid::new_v4(),
            name: SeasonName::Spring,
            year: 2020,
            created_at: now,
            updated_at: now,
        }
    }

    fn query() -> GetSeasonSummariesQuery {
        GetSeasonSummariesQuery {
            season_name: "spring".to_string(),
            season_year: 2020,
            tv_series_only: false,
            main_roles_only: false,
            page: 0,
            page_size: 10,
        }
    }

    fn handler(
        season_repo: MockSeasonRepo,
        anime_repo: MockAnimeRepo,
        role_repo: MockRoleRepo,
    ) -> GetSeasonSummariesHandler {
        GetSeasonSummariesHandler::new(
            Arc::new(season_repo),
            Arc::new(anime_repo),
            Arc::new(role_repo),
            SeasonSearchCriteriaService::new(),
        )
    }

    #[tokio::test]
    async fn unknown_season_returns_none_without_further_calls() {
        let mut season_repo = MockSeasonRepo::new();
        season_repo.expect_get().times(1).returning(|_| Ok(None));

        let mut anime_repo = MockAnimeRepo::new();
        anime_repo.expect_find_all_by_season_and_type().never();

        let mut role_repo = MockRoleRepo::new();
        role_repo.expect_get_all_roles_in_season().never();

        let result = handler(season_repo, anime_repo, role_repo)
            .execute(query())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn empty_anime_set_returns_none_without_role_lookup() {
        let season = spring_2020();
        let season_id = season.id;

        let mut season_repo = MockSeasonRepo::new();
        season_repo
            .expect_get()
            .times(1)
            .returning(move |_| Ok(Some(season.clone())));

        let mut anime_repo = MockAnimeRepo::new();
        anime_repo
            .expect_find_all_by_season_and_type()
            .with(eq(season_id), eq(AnimeTypeFilter::AllTypes))
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let mut role_repo = MockRoleRepo::new();
        role_repo.expect_get_all_roles_in_season().never();

        let result = handler(season_repo, anime_repo, role_repo)
            .execute(query())
            .await
            .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn groups_ranks_and_pages_roles_into_dtos() {
        let season = spring_2020();

        let show_a = anime("A");
        let show_b = anime("B");
        let busy: Seiyuu = seiyuu("busy");
        let quiet: Seiyuu = seiyuu("quiet");

        let roles = vec![
            role(&quiet, &show_a, &character("a"), RoleType::Supporting),
            role(&busy, &show_a, &character("b"), RoleType::Main),
            role(&busy, &show_b, &character("c"), RoleType::Main),
        ];

        let mut season_repo = MockSeasonRepo::new();
        season_repo
            .expect_get()
            .returning(move |_| Ok(Some(season.clone())));

        let shows = vec![show_a.clone(), show_b.clone()];
        let mut anime_repo = MockAnimeRepo::new();
        anime_repo
            .expect_find_all_by_season_and_type()
            .returning(move |_, _| Ok(shows.clone()));

        let mut role_repo = MockRoleRepo::new();
        role_repo
            .expect_get_all_roles_in_season()
            .withf(|ids, main_only| ids.len() == 2 && !*main_only)
            .times(1)
            .returning(move |_, _| Ok(roles.clone()));

        let page = handler(season_repo, anime_repo, role_repo)
            .execute(query())
            .await
            .unwrap()
            .expect("season with roles should produce a page");

        assert_eq!(page.total_count, 2);
        assert_eq!(page.results.len(), 2);
        // Two roles beat one.
        assert_eq!(page.results[0].seiyuu.name, "busy");
        assert_eq!(page.results[0].anime_character_pairs.len(), 2);
        assert_eq!(page.results[1].seiyuu.name, "quiet");
    }

    #[tokio::test]
    async fn tv_only_flag_reaches_the_anime_repository() {
        let season = spring_2020();
        let season_id = season.id;

        let mut season_repo = MockSeasonRepo::new();
        season_repo
            .expect_get()
            .returning(move |_| Ok(Some(season.clone())));

        let mut anime_repo = MockAnimeRepo::new();
        anime_repo
            .expect_find_all_by_season_and_type()
            .with(eq(season_id), eq(AnimeTypeFilter::TvOnly))
            .times(1)
            .returning(|_, _| Ok(Vec::new()));

        let role_repo = MockRoleRepo::new();

        let mut tv_query = query();
        tv_query.tv_series_only = true;

        let result = handler(season_repo, anime_repo, role_repo)
            .execute(tv_query)
            .await
            .unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn invalid_pagination_fails_before_any_repository_call() {
        let mut season_repo = MockSeasonRepo::new();
        season_repo.expect_get().never();

        let anime_repo = MockAnimeRepo::new();
        let role_repo = MockRoleRepo::new();

        let mut bad_query = query();
        bad_query.page = -1;

        let err = handler(season_repo, anime_repo, role_repo)
            .execute(bad_query)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[tokio::test]
    async fn repository_failure_propagates_unchanged() {
        let mut season_repo = MockSeasonRepo::new();
        season_repo
            .expect_get()
            .returning(|_| Err(AppError::DatabaseError("connection refused".to_string())));

        let anime_repo = MockAnimeRepo::new();
        let role_repo = MockRoleRepo::new();

        let err = handler(season_repo, anime_repo, role_repo)
            .execute(query())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn cancelled_token_stops_the_pipeline() {
        let mut season_repo = MockSeasonRepo::new();
        season_repo.expect_get().never();

        let anime_repo = MockAnimeRepo::new();
        let role_repo = MockRoleRepo::new();

        let token = CancellationToken::new();
        token.cancel();

        let err = handler(season_repo, anime_repo, role_repo)
            .execute_with_cancellation(query(), &token)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Cancelled));
    }

    #[tokio::test]
    async fn echoes_pagination_for_out_of_range_pages() {
        let season = spring_2020();
        let show = anime("A");
        let actor = seiyuu("only");

        let mut season_repo = MockSeasonRepo::new();
        season_repo
            .expect_get()
            .returning(move |_| Ok(Some(season.clone())));

        let shows = vec![show.clone()];
        let mut anime_repo = MockAnimeRepo::new();
        anime_repo
            .expect_find_all_by_season_and_type()
            .returning(move |_, _| Ok(shows.clone()));

        let roles = vec![role(&actor, &show, &character("a"), RoleType::Main)];
        let mut role_repo = MockRoleRepo::new();
        role_repo
            .expect_get_all_roles_in_season()
            .returning(move |_, _| Ok(roles.clone()));

        let mut far_query = query();
        far_query.page = 9;
        far_query.page_size = 5;

        let page = handler(season_repo, anime_repo, role_repo)
            .execute(far_query)
            .await
            .unwrap()
            .expect("known season still yields an envelope");

        assert!(page.results.is_empty());
        assert_eq!(page.total_count, 1);
        assert_eq!(page.page, 9);
        assert_eq!(page.page_size, 5);
    }
}
