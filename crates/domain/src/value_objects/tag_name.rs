use crate::errors::DomainError;
use serde::Serialize;
use std::fmt;

const MAX_LEN: usize = 30;

/// Public handle (`@alice`) of a user. Stored without the leading `@`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(DomainError::invalid("tag name", "cannot be empty"));
        }
        if value.chars().count() > MAX_LEN {
            return Err(DomainError::invalid(
                "tag name",
                format!("maximum {} characters", MAX_LEN),
            ));
        }
        if let Some(c) = value
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-')))
        {
            return Err(DomainError::invalid(
                "tag name",
                format!("character '{}' is not allowed", c),
            ));
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

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
