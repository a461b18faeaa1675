mod handler;
mod query;
mod result;

pub use handler::GetSeasonSummariesHandler;
pub use query::GetSeasonSummariesQuery;
pub use result::GetSeasonSummariesResult;
