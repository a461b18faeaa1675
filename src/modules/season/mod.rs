pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::use_cases::get_season_summaries::{
    GetSeasonSummariesHandler, GetSeasonSummariesQuery, GetSeasonSummariesResult,
};
pub use domain::repositories::SeasonRepository;
