use crate::errors::DomainError;
use serde::Serialize;
use std::fmt;

const MAX_LEN: usize = 254;

/// Email address, unique per user.
///
/// Only the shape is checked: a single `@`, a non-empty local part and a
/// dotted domain. Deliverability is not this type's concern.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::invalid("email", "cannot be empty"));
        }
        if value.chars().count() > MAX_LEN {
            return Err(DomainError::invalid(
                "email",
                format!("maximum {} characters", MAX_LEN),
            ));
        }
        if value.chars().any(char::is_whitespace) {
            return Err(DomainError::invalid("email", "cannot contain whitespace"));
        }

        let (local, domain) = value
            .split_once('@')
            .ok_or_else(|| DomainError::invalid("email", "missing @"))?;
        if local.is_empty() || domain.contains('@') {
            return Err(DomainError::invalid("email", "invalid email format"));
        }
        if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
            return Err(DomainError::invalid("email", "invalid domain"));
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

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
