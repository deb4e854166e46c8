use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection};
use domain::DomainError;
use std::time::Duration;
use tracing::debug;

pub mod schema;
pub use schema::*;

pub type SqlitePool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

const CREATE_USERS_TABLE: &str = "
    CREATE TABLE IF NOT EXISTS users (
        uuid TEXT PRIMARY KEY NOT NULL,
        name TEXT NOT NULL,
        email TEXT NOT NULL UNIQUE,
        password TEXT NOT NULL,
        tag_name TEXT NOT NULL UNIQUE,
        bio TEXT,
        profile_image TEXT,
        number_of_publications BIGINT NOT NULL DEFAULT 0,
        publications TEXT NOT NULL DEFAULT '[]'
    );
";

#[derive(Debug, Clone)]
pub struct DatabaseOptions {
    pub max_connections: u32,
    /// How long a connection waits on a locked database before giving up.
    pub busy_timeout: Duration,
}

impl Default for DatabaseOptions {
    fn default() -> Self {
        Self {
            max_connections: 8,
            busy_timeout: Duration::from_millis(5000),
        }
    }
}

#[derive(Debug)]
struct SqliteConnectionCustomizer {
    busy_timeout: Duration,
}

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqliteConnectionCustomizer {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute(&format!(
            "PRAGMA busy_timeout = {};",
            self.busy_timeout.as_millis()
        ))
        .map_err(r2d2::Error::QueryError)
    }
}

pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (or creates) the SQLite database and makes sure the schema exists.
    pub fn open(database_path: &str, options: DatabaseOptions) -> Result<Self, DomainError> {
        let manager = ConnectionManager::<SqliteConnection>::new(database_path);
        let pool = r2d2::Pool::builder()
            .max_size(options.max_connections)
            .connection_customizer(Box::new(SqliteConnectionCustomizer {
                busy_timeout: options.busy_timeout,
            }))
            .build(manager)
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        let database = Database { pool };
        database.initialize_schema()?;
        debug!(path = database_path, "database ready");
        Ok(database)
    }

    pub fn get_pool(&self) -> &SqlitePool {
        &self.pool
    }

    fn initialize_schema(&self) -> Result<(), DomainError> {
        let mut conn = self
            .pool
            .get()
            .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;

        conn.batch_execute(CREATE_USERS_TABLE)
            .map_err(|e| DomainError::RepositoryError(e.to_string()))
    }
}
