use crate::errors::DomainError;
use serde::Serialize;
use std::fmt;

const MAX_LEN: usize = 64;

/// Opaque user identifier. Any non-blank token without whitespace is accepted,
/// so both canonical UUIDs and short external ids fit.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct UserUuid(String);

impl UserUuid {
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::invalid("uuid", "cannot be empty"));
        }
        if value.chars().count() > MAX_LEN {
            return Err(DomainError::invalid(
                "uuid",
                format!("maximum {} characters", MAX_LEN),
            ));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::invalid("uuid", "cannot contain whitespace"));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for UserUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
