use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use gymlog_application::CheckInUseCase;
use gymlog_core::{CheckIn, CheckInStore, GymId, UserId, UserStore};

use super::error::ApiError;

#[derive(Deserialize)]
pub struct CheckInRequest {
    pub user_id: Uuid,
    pub gym_id: Uuid,
}

#[derive(Serialize)]
pub struct CheckInResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub gym_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<CheckIn> for CheckInResponse {
    fn from(check_in: CheckIn) -> Self {
        Self {
            id: *check_in.id().as_uuid(),
            user_id: *check_in.user_id().as_uuid(),
            gym_id: *check_in.gym_id().as_uuid(),
            created_at: check_in.created_at(),
        }
    }
}

#[tracing::instrument(name = "Check in", skip_all)]
pub async fn check_in<U, C>(
    State((user_store, check_in_store)): State<(U, C)>,
    Json(request): Json<CheckInRequest>,
) -> Result<impl IntoResponse, ApiError>
where
    U: UserStore + Clone + 'static,
    C: CheckInStore + Clone + 'static,
{
    let use_case = CheckInUseCase::new(user_store, check_in_store);
    let check_in = use_case
        .execute(UserId::from(request.user_id), GymId::from(request.gym_id))
        .await?;

    Ok((StatusCode::CREATED, Json(CheckInResponse::from(check_in))))
}
