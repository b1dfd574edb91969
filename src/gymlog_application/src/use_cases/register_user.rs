use gymlog_core::{
    Email, NewUser, Password, PasswordHashError, PasswordHasher, User, UserStore, UserStoreError,
};

/// Error types specific to the register user use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterUserError {
    #[error("Email already in use")]
    EmailAlreadyInUse,
    #[error("User store error: {0}")]
    UserStoreError(UserStoreError),
    #[error("Password hash error: {0}")]
    PasswordHashError(#[from] PasswordHashError),
}

/// Register user use case - handles user registration
///
/// Hashes the submitted password through the injected `PasswordHasher` and
/// persists the user. The plaintext password never reaches the store.
pub struct RegisterUserUseCase<S, H>
where
    S: UserStore,
    H: PasswordHasher,
{
    users: S,
    hasher: H,
}

impl<S, H> RegisterUserUseCase<S, H>
where
    S: UserStore,
    H: PasswordHasher,
{
    pub fn new(users: S, hasher: H) -> Self {
        Self { users, hasher }
    }

    /// Execute the register user use case
    ///
    /// # Returns
    /// The created user, or `EmailAlreadyInUse` when the email is taken.
    /// Email uniqueness is enforced by the store, not here.
    #[tracing::instrument(name = "RegisterUserUseCase::execute", skip(self, password))]
    pub async fn execute(
        &self,
        name: String,
        email: Email,
        password: Password,
    ) -> Result<User, RegisterUserError> {
        let password_hash = self.hasher.hash(&password).await?;

        self.users
            .add_user(NewUser {
                name,
                email,
                password_hash,
            })
            .await
            .map_err(|e| match e {
                UserStoreError::UserAlreadyExists => RegisterUserError::EmailAlreadyInUse,
                other => RegisterUserError::UserStoreError(other),
            })
    }
}
