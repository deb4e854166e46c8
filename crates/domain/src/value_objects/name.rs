use crate::errors::DomainError;
use serde::Serialize;
use std::fmt;

const MAX_LEN: usize = 100;

/// Display name of a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::invalid("name", "cannot be empty"));
        }
        if value.chars().count() > MAX_LEN {
            return Err(DomainError::invalid(
                "name",
                format!("maximum {} characters", MAX_LEN),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
