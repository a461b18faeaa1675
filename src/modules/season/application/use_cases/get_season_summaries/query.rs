/// Query for a season summary page.
///
/// `page` is zero-based; `page`/`page_size` arrive unvalidated from the
/// request layer and are checked by the handler before any repository call.
#[derive(Debug, Clone)]
pub struct GetSeasonSummariesQuery {
    pub season_name: String,
    pub season_year: i32,
    pub tv_series_only: bool,
    pub main_roles_only: bool,
    pub page: i64,
    pub page_size: i64,
}
