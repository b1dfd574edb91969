use chrono::{DateTime, Utc};
use secrecy::ExposeSecret;
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

use gymlog_core::{
    Email, NewUser, PasswordHashString, User, UserId, UserLookup, UserStore, UserStoreError,
};

/// PostgreSQL-backed user store. Email uniqueness is enforced by the unique
/// constraint on `users.email`.
#[derive(Clone)]
pub struct PostgresUserStore {
    pool: PgPool,
}

impl PostgresUserStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresUserStore { pool }
    }
}

#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    name: String,
    email: String,
    password_hash: String,
    created_at: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> Result<User, UserStoreError> {
        let email =
            Email::parse(self.email).map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        Ok(User::new(
            UserId::from(self.id),
            self.name,
            email,
            PasswordHashString::from(self.password_hash),
            self.created_at,
        ))
    }
}

#[async_trait::async_trait]
impl UserLookup for PostgresUserStore {
    #[tracing::instrument(name = "Looking up user by email in PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, password_hash, created_at
                FROM users
                WHERE email = $1
            "#,
        )
        .bind(email.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }
}

#[async_trait::async_trait]
impl UserStore for PostgresUserStore {
    #[tracing::instrument(name = "Adding user to PostgreSQL", skip_all)]
    async fn add_user(&self, new_user: NewUser) -> Result<User, UserStoreError> {
        let id = UserId::new();
        let created_at = Utc::now();

        sqlx::query(
            r#"
                INSERT INTO users (id, name, email, password_hash, created_at)
                VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(id.as_uuid())
        .bind(&new_user.name)
        .bind(new_user.email.as_str())
        .bind(new_user.password_hash.as_ref().expose_secret())
        .bind(created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return UserStoreError::UserAlreadyExists;
                }
            }
            UserStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(User::new(
            id,
            new_user.name,
            new_user.email,
            new_user.password_hash,
            created_at,
        ))
    }

    #[tracing::instrument(name = "Looking up user by id in PostgreSQL", skip_all)]
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, UserStoreError> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT id, name, email, password_hash, created_at
                FROM users
                WHERE id = $1
            "#,
        )
        .bind(id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| UserStoreError::UnexpectedError(e.to_string()))?;

        row.map(UserRow::into_user).transpose()
    }
}
