use crate::entities::{RegistrationInput, User};
use crate::errors::{DomainError, UniqueKey};
use crate::repositories::UserRepository;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Registration Service - the "register user" use case
///
/// Probes the store for an existing uuid, email and tag name (in that order,
/// one after the other) and inserts the user only when none of them is taken.
/// The probes and the insert are not atomic: two concurrent registrations can
/// both pass the probes, in which case the store's unique constraints decide
/// and the loser gets the same duplicate error a probe would have produced.
pub struct RegistrationService {
    user_repository: Arc<dyn UserRepository>,
}

impl RegistrationService {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    pub async fn execute(&self, input: RegistrationInput) -> Result<(), DomainError> {
        let user = User::register(input)?;

        debug!(uuid = %user.uuid, "checking uuid availability");
        if self.user_repository.find_by_uuid(&user.uuid).await?.is_some() {
            warn!(uuid = %user.uuid, "registration rejected: uuid in use");
            return Err(DomainError::DuplicateIdentifier(user.uuid.into_inner()));
        }

        debug!(email = %user.email, "checking email availability");
        if self.user_repository.find_by_email(&user.email).await?.is_some() {
            warn!(email = %user.email, "registration rejected: email in use");
            return Err(DomainError::DuplicateEmail(user.email.into_inner()));
        }

        debug!(tag_name = %user.tag_name, "checking tag name availability");
        if self
            .user_repository
            .find_by_tag_name(&user.tag_name)
            .await?
            .is_some()
        {
            warn!(tag_name = %user.tag_name, "registration rejected: tag name in use");
            return Err(DomainError::DuplicateTagName(user.tag_name.into_inner()));
        }

        match self.user_repository.create(&user).await {
            Ok(()) => {
                info!(uuid = %user.uuid, tag_name = %user.tag_name, "user registered");
                Ok(())
            }
            Err(DomainError::UniqueViolation(key)) => {
                warn!(uuid = %user.uuid, %key, "registration lost a race on insert");
                Err(duplicate_error(key, user))
            }
            Err(e) => Err(e),
        }
    }
}

fn duplicate_error(key: UniqueKey, user: User) -> DomainError {
    match key {
        UniqueKey::Uuid => DomainError::DuplicateIdentifier(user.uuid.into_inner()),
        UniqueKey::Email => DomainError::DuplicateEmail(user.email.into_inner()),
        UniqueKey::TagName => DomainError::DuplicateTagName(user.tag_name.into_inner()),
    }
}
