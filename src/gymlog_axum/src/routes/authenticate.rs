use axum::{Json, extract::State, response::IntoResponse};
use chrono::{DateTime, Utc};
use secrecy::Secret;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gymlog_application::AuthenticateUseCase;
use gymlog_core::{AuthenticatedUser, Email, Password, PasswordHasher, UserLookup};

use super::error::ApiError;

#[derive(Deserialize)]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: Secret<String>,
}

/// The authenticated user, hash already stripped by the use case. No
/// session or token is issued; that concern lives outside this service.
#[derive(Serialize)]
pub struct AuthenticatedUserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

impl From<AuthenticatedUser> for AuthenticatedUserResponse {
    fn from(user: AuthenticatedUser) -> Self {
        Self {
            id: *user.id.as_uuid(),
            name: user.name,
            email: user.email.to_string(),
            created_at: user.created_at,
        }
    }
}

#[tracing::instrument(name = "Authenticate", skip_all)]
pub async fn authenticate<L, H>(
    State((user_lookup, hasher)): State<(L, H)>,
    Json(request): Json<AuthenticateRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    L: UserLookup + Clone + 'static,
    H: PasswordHasher + Clone + 'static,
{
    let email = Email::parse(request.email)?;
    let password = Password::parse(request.password)?;

    let use_case = AuthenticateUseCase::new(user_lookup, hasher);
    let user = use_case.execute(email, password).await?;

    Ok(Json(AuthenticatedUserResponse::from(user)))
}
