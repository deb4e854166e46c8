pub mod database;
pub mod repositories;

pub use database::{Database, DatabaseOptions, SqlitePool};
pub use repositories::*;
