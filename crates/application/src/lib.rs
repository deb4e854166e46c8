use domain::*;
use infrastructure::*;
use std::sync::Arc;
use tracing::info;

/// User Application - wires the SQLite store into the registration use case
pub struct UserApp {
    pub registration_service: RegistrationService,
    user_repository: Arc<dyn UserRepository>,
}

impl UserApp {
    pub fn new(database_path: &str, options: DatabaseOptions) -> Result<Self, DomainError> {
        // Infrastructure layer - database setup
        let database = Database::open(database_path, options)?;
        let pool = database.get_pool().clone();

        let user_repository: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(pool));
        info!(path = database_path, "user store opened");

        Ok(Self::with_repository(user_repository))
    }

    /// Builds the app on top of any store implementation.
    pub fn with_repository(user_repository: Arc<dyn UserRepository>) -> Self {
        let registration_service = RegistrationService::new(user_repository.clone());

        Self {
            registration_service,
            user_repository,
        }
    }

    pub async fn register_user(&self, input: RegistrationInput) -> Result<(), DomainError> {
        self.registration_service.execute(input).await
    }

    pub async fn find_user_by_uuid(&self, uuid: &str) -> Result<Option<User>, DomainError> {
        let uuid = UserUuid::new(uuid)?;
        self.user_repository.find_by_uuid(&uuid).await
    }

    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let email = Email::new(email)?;
        self.user_repository.find_by_email(&email).await
    }

    pub async fn find_user_by_tag_name(&self, tag_name: &str) -> Result<Option<User>, DomainError> {
        let tag_name = TagName::new(tag_name)?;
        self.user_repository.find_by_tag_name(&tag_name).await
    }
}
