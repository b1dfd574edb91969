use async_trait::async_trait;
use thiserror::Error;

use crate::domain::password::{Password, PasswordHashString};

#[derive(Debug, Error)]
pub enum PasswordHashError {
    #[error("Malformed password hash")]
    MalformedHash,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for PasswordHashError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::MalformedHash, Self::MalformedHash) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Salted password hashing primitive. Hashing and verification are
/// intentionally slow, so the port is async and implementations are expected
/// to offload the work from the async runtime.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &Password) -> Result<PasswordHashString, PasswordHashError>;

    /// Constant-time comparison of a candidate password against a stored
    /// hash. A mismatch is `Ok(false)`; errors are reserved for hashes that
    /// cannot be parsed at all.
    async fn verify(
        &self,
        candidate: &Password,
        stored: &PasswordHashString,
    ) -> Result<bool, PasswordHashError>;
}
