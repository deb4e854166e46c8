use std::fmt;
use thiserror::Error;

/// Columns that carry a uniqueness constraint on users.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueKey {
    Uuid,
    Email,
    TagName,
}

impl fmt::Display for UniqueKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueKey::Uuid => write!(f, "uuid"),
            UniqueKey::Email => write!(f, "email"),
            UniqueKey::TagName => write!(f, "tag name"),
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    #[error("Invalid {field}: {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("User id is already in use: {0}")]
    DuplicateIdentifier(String),

    #[error("User email is already in use: {0}")]
    DuplicateEmail(String),

    #[error("User tag name is already in use: {0}")]
    DuplicateTagName(String),

    /// Raised by the store when an insert trips a unique constraint.
    #[error("Unique constraint violated on {0}")]
    UniqueViolation(UniqueKey),

    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

impl DomainError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        DomainError::InvalidField {
            field,
            reason: reason.into(),
        }
    }

    /// True for the errors a caller should surface as a conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            DomainError::DuplicateIdentifier(_)
                | DomainError::DuplicateEmail(_)
                | DomainError::DuplicateTagName(_)
                | DomainError::UniqueViolation(_)
        )
    }
}
