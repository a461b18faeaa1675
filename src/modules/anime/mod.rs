pub mod domain;
pub mod infrastructure;

pub use domain::entities::{Anime, AnimeType, AnimeTypeFilter};
pub use domain::repositories::AnimeRepository;
