// Shared kernel: cross-module application patterns, errors and infrastructure

pub mod application;
pub mod config;
pub mod errors;
pub mod infrastructure;
pub mod utils;

pub use config::AppConfig;
pub use infrastructure::Database;
