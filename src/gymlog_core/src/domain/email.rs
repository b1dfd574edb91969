use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

// Structural check only: local part, one '@', dotted domain. Anything
// stricter belongs to an upstream validation layer.
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

#[derive(Debug, Error, PartialEq)]
pub enum EmailError {
    #[error("Email must not be empty")]
    Empty,
    #[error("Malformed email address")]
    Malformed,
}

/// Validated email address. Stored and compared case-sensitively, exactly as
/// submitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: impl Into<String>) -> Result<Self, EmailError> {
        let raw = raw.into();

        if raw.is_empty() {
            return Err(EmailError::Empty);
        }
        if !EMAIL_PATTERN.is_match(&raw) {
            return Err(EmailError::Malformed);
        }

        Ok(Self(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
