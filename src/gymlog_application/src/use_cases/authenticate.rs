use gymlog_core::{
    AuthenticatedUser, Email, Password, PasswordHashError, PasswordHasher, UserLookup,
    UserStoreError,
};

/// Error types specific to the authenticate use case
#[derive(Debug, thiserror::Error)]
pub enum AuthenticateError {
    /// Unknown email and wrong password both collapse into this one variant
    /// so a caller cannot probe which emails are registered.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User store error: {0}")]
    UserStoreError(#[from] UserStoreError),
    #[error("Password hash error: {0}")]
    PasswordHashError(#[from] PasswordHashError),
}

/// Authenticate use case - verifies a credential pair against stored users
///
/// Looks the user up through the injected `UserLookup` capability, verifies
/// the submitted password against the stored hash through the injected
/// `PasswordHasher`, and returns the user with the hash stripped. Stateless;
/// never mutates the stored record.
pub struct AuthenticateUseCase<L, H>
where
    L: UserLookup,
    H: PasswordHasher,
{
    users: L,
    hasher: H,
}

impl<L, H> AuthenticateUseCase<L, H>
where
    L: UserLookup,
    H: PasswordHasher,
{
    pub fn new(users: L, hasher: H) -> Self {
        Self { users, hasher }
    }

    /// Execute the authenticate use case
    ///
    /// # Arguments
    /// * `email` - Submitted email address
    /// * `password` - Submitted plaintext password
    ///
    /// # Returns
    /// The authenticated user (password hash stripped), or
    /// `InvalidCredentials` when the email is unknown or the password does
    /// not match. Store and hash-parsing failures keep their own variants;
    /// they are infrastructure faults, not credential outcomes.
    #[tracing::instrument(name = "AuthenticateUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        email: Email,
        password: Password,
    ) -> Result<AuthenticatedUser, AuthenticateError> {
        let Some(user) = self.users.find_by_email(&email).await? else {
            return Err(AuthenticateError::InvalidCredentials);
        };

        if !self.hasher.verify(&password, user.password_hash()).await? {
            return Err(AuthenticateError::InvalidCredentials);
        }

        Ok(AuthenticatedUser::from(user))
    }
}
