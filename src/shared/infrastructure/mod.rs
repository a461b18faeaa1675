pub mod database;

pub use database::{run_blocking, Database, DbConnection, DbPool};
