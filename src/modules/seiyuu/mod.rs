pub mod domain;
pub mod infrastructure;

pub use domain::entities::{AnimeCharacter, AnimeRole, RoleType, Seiyuu};
pub use domain::repositories::{SeasonRoleRepository, SeiyuuRepository};
