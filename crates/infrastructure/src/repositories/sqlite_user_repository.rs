use crate::database::{users, SqlitePool};
use async_trait::async_trait;
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use domain::{
    Bio, DomainError, Email, Name, Password, PublicationRef, TagName, UniqueKey, User,
    UserRepository, UserUuid,
};
use tracing::debug;

// Database model
#[derive(Queryable, Selectable, Debug)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
struct UserModel {
    uuid: String,
    name: String,
    email: String,
    password: String,
    tag_name: String,
    bio: Option<String>,
    profile_image: Option<String>,
    number_of_publications: i64,
    publications: String,
}

#[derive(Insertable, Debug)]
#[diesel(table_name = users)]
struct NewUserModel {
    uuid: String,
    name: String,
    email: String,
    password: String,
    tag_name: String,
    bio: Option<String>,
    profile_image: Option<String>,
    number_of_publications: i64,
    publications: String,
}

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        let row_uuid = model.uuid.clone();
        let corrupt = |reason: String| {
            DomainError::RepositoryError(format!("Corrupt user row {}: {}", row_uuid, reason))
        };

        let number_of_publications = u32::try_from(model.number_of_publications).map_err(|_| {
            corrupt(format!(
                "publication count {} out of range",
                model.number_of_publications
            ))
        })?;
        let publications: Vec<PublicationRef> =
            serde_json::from_str(&model.publications).map_err(|e| corrupt(e.to_string()))?;

        Ok(User {
            uuid: UserUuid::new(&model.uuid).map_err(|e| corrupt(e.to_string()))?,
            name: Name::new(&model.name).map_err(|e| corrupt(e.to_string()))?,
            email: Email::new(&model.email).map_err(|e| corrupt(e.to_string()))?,
            password: Password::new(&model.password).map_err(|e| corrupt(e.to_string()))?,
            tag_name: TagName::new(&model.tag_name).map_err(|e| corrupt(e.to_string()))?,
            bio: Bio::from_optional(model.bio.as_deref()).map_err(|e| corrupt(e.to_string()))?,
            profile_image: model.profile_image.unwrap_or_default(),
            number_of_publications,
            publications,
        })
    }
}

impl TryFrom<&User> for NewUserModel {
    type Error = DomainError;

    fn try_from(user: &User) -> Result<Self, Self::Error> {
        let publications = serde_json::to_string(&user.publications)
            .map_err(|e| DomainError::RepositoryError(e.to_string()))?;

        // Optional columns are always written, empty rather than NULL
        Ok(NewUserModel {
            uuid: user.uuid.as_str().to_string(),
            name: user.name.as_str().to_string(),
            email: user.email.as_str().to_string(),
            password: user.password.as_str().to_string(),
            tag_name: user.tag_name.as_str().to_string(),
            bio: Some(user.bio.as_str().to_string()),
            profile_image: Some(user.profile_image.clone()),
            number_of_publications: i64::from(user.number_of_publications),
            publications,
        })
    }
}

/// Maps a failed query or insert onto the domain taxonomy.
fn map_diesel_error(error: DieselError) -> DomainError {
    match error {
        DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, info) => {
            match violated_key(info.message()) {
                Some(key) => DomainError::UniqueViolation(key),
                None => DomainError::RepositoryError(info.message().to_string()),
            }
        }
        // SQLITE_BUSY / SQLITE_LOCKED once busy_timeout has run out
        DieselError::DatabaseError(_, info) if is_lock_timeout(info.message()) => {
            DomainError::StoreUnavailable(info.message().to_string())
        }
        other => DomainError::RepositoryError(other.to_string()),
    }
}

fn is_lock_timeout(message: &str) -> bool {
    message.contains("database is locked") || message.contains("database is busy")
}

/// SQLite reports `UNIQUE constraint failed: users.email`.
fn violated_key(message: &str) -> Option<UniqueKey> {
    let (_, columns) = message.split_once("constraint failed:")?;
    columns
        .split(',')
        .find_map(|column| match column.trim() {
            "users.uuid" => Some(UniqueKey::Uuid),
            "users.email" => Some(UniqueKey::Email),
            "users.tag_name" => Some(UniqueKey::TagName),
            _ => None,
        })
}

pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Checks out a connection and runs `query` on the blocking pool.
    async fn run<T, F>(&self, query: F) -> Result<T, DomainError>
    where
        F: FnOnce(&mut SqliteConnection) -> QueryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();

        tokio::task::spawn_blocking(move || {
            let mut conn = pool
                .get()
                .map_err(|e| DomainError::StoreUnavailable(e.to_string()))?;
            query(&mut *conn).map_err(map_diesel_error)
        })
        .await
        .map_err(|e| DomainError::RepositoryError(e.to_string()))?
    }

    async fn find_one(&self, key: UniqueKey, value: String) -> Result<Option<User>, DomainError> {
        debug!(%key, "user lookup");

        let found = self
            .run(move |conn| {
                let row = match key {
                    UniqueKey::Uuid => users::table
                        .filter(users::uuid.eq(value))
                        .select(UserModel::as_select())
                        .first::<UserModel>(conn),
                    UniqueKey::Email => users::table
                        .filter(users::email.eq(value))
                        .select(UserModel::as_select())
                        .first::<UserModel>(conn),
                    UniqueKey::TagName => users::table
                        .filter(users::tag_name.eq(value))
                        .select(UserModel::as_select())
                        .first::<UserModel>(conn),
                };
                row.optional()
            })
            .await?;

        found.map(User::try_from).transpose()
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_uuid(&self, uuid: &UserUuid) -> Result<Option<User>, DomainError> {
        self.find_one(UniqueKey::Uuid, uuid.as_str().to_string())
            .await
    }

    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError> {
        self.find_one(UniqueKey::Email, email.as_str().to_string())
            .await
    }

    async fn find_by_tag_name(&self, tag_name: &TagName) -> Result<Option<User>, DomainError> {
        self.find_one(UniqueKey::TagName, tag_name.as_str().to_string())
            .await
    }

    async fn create(&self, user: &User) -> Result<(), DomainError> {
        let new_user = NewUserModel::try_from(user)?;

        self.run(move |conn| {
            diesel::insert_into(users::table)
                .values(&new_user)
                .execute(conn)
        })
        .await?;

        Ok(())
    }
}
