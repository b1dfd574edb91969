use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gymlog_application::RegisterUserUseCase;
use gymlog_core::{Email, Password, PasswordHasher, User, UserStore};

use super::error::ApiError;

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: Secret<String>,
}

/// User document returned by the API. Never carries the password hash.
#[derive(Serialize)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: *user.id().as_uuid(),
            name: user.name().to_string(),
            email: user.email().to_string(),
            created_at: user.created_at(),
        }
    }
}

#[tracing::instrument(name = "Register user", skip_all)]
pub async fn register<S, H>(
    State((user_store, hasher)): State<(S, H)>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    S: UserStore + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let email = Email::parse(request.email)?;
    let password = Password::parse(request.password)?;

    let use_case = RegisterUserUseCase::new(user_store, hasher);
    let user = use_case.execute(request.name, email, password).await?;

    Ok((StatusCode::CREATED, Json(UserResponse::from(user))))
}
