use crate::errors::DomainError;
use serde::Serialize;
use std::fmt;

const MAX_LEN: usize = 500;

/// Free-form profile text. Absent bios are the empty string, never null.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Bio(String);

impl Bio {
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let value = value.trim();
        if value.chars().count() > MAX_LEN {
            return Err(DomainError::invalid(
                "bio",
                format!("maximum {} characters", MAX_LEN),
            ));
        }
        Ok(Self(value.to_string()))
    }

    pub fn from_optional(value: Option<&str>) -> Result<Self, DomainError> {
        value.map_or_else(|| Ok(Self::default()), Self::new)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Bio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
