use argon2::{
    Algorithm, Argon2, Params, PasswordHash, PasswordVerifier, Version,
    password_hash::{self, PasswordHasher as _, SaltString, rand_core},
};
use secrecy::{ExposeSecret, Secret};

use gymlog_core::{Password, PasswordHashError, PasswordHashString, PasswordHasher};

/// Argon2id-backed implementation of the `PasswordHasher` port.
///
/// Key derivation is intentionally slow, so both operations run under
/// `spawn_blocking` and never stall the async runtime.
#[derive(Default, Clone)]
pub struct Argon2PasswordHasher;

fn build_argon2<'a>() -> Result<Argon2<'a>, PasswordHashError> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None)
            .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?,
    ))
}

#[async_trait::async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHashString, PasswordHashError> {
        let password = password.clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(rand_core::OsRng);
                build_argon2()?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|h| PasswordHashString::from(h.to_string()))
                    .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))
            })
        })
        .await
        .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?
    }

    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(
        &self,
        candidate: &Password,
        stored: &PasswordHashString,
    ) -> Result<bool, PasswordHashError> {
        let candidate = candidate.clone();
        let stored = Secret::from(stored.as_ref().expose_secret().clone());
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected_hash = PasswordHash::new(stored.expose_secret())
                    .map_err(|_| PasswordHashError::MalformedHash)?;

                match build_argon2()?.verify_password(
                    candidate.as_ref().expose_secret().as_bytes(),
                    &expected_hash,
                ) {
                    Ok(()) => Ok(true),
                    Err(password_hash::Error::Password) => Ok(false),
                    Err(e) => Err(PasswordHashError::UnexpectedError(e.to_string())),
                }
            })
        })
        .await
        .map_err(|e| PasswordHashError::UnexpectedError(e.to_string()))?
    }
}
