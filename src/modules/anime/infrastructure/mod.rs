pub mod persistence;

pub use persistence::AnimeRepositoryImpl;
