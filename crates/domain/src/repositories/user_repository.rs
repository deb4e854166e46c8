use crate::entities::User;
use crate::errors::DomainError;
use crate::value_objects::{Email, TagName, UserUuid};
use async_trait::async_trait;

/// Repository trait - defines what we need from persistence layer
/// This is a PORT in hexagonal architecture
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_uuid(&self, uuid: &UserUuid) -> Result<Option<User>, DomainError>;
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, DomainError>;
    async fn find_by_tag_name(&self, tag_name: &TagName) -> Result<Option<User>, DomainError>;
    /// Inserts a new user. A unique-constraint rejection is reported as
    /// `DomainError::UniqueViolation`.
    async fn create(&self, user: &User) -> Result<(), DomainError>;
}
