use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("Password must not be empty")]
    Empty,
}

/// Plaintext password submitted on registration or login. Wrapped in
/// `Secret` so it is redacted from `Debug` output and never logged.
///
/// No length or complexity policy is applied here; that is a concern of the
/// caller-facing validation layer.
#[derive(Debug, Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn parse(raw: Secret<String>) -> Result<Self, PasswordError> {
        if raw.expose_secret().is_empty() {
            return Err(PasswordError::Empty);
        }

        Ok(Self(raw))
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(raw: Secret<String>) -> Result<Self, Self::Error> {
        Self::parse(raw)
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

/// Salted one-way hash of a password in PHC string format, as produced by
/// the hashing adapter. Never contains the plaintext.
#[derive(Debug, Clone)]
pub struct PasswordHashString(Secret<String>);

impl From<String> for PasswordHashString {
    fn from(raw: String) -> Self {
        Self(Secret::from(raw))
    }
}

impl AsRef<Secret<String>> for PasswordHashString {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}
