pub mod persistence;

pub use persistence::{SeasonRoleRepositoryImpl, SeiyuuRepositoryImpl};
