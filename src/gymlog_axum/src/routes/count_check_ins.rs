use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};
use serde::Serialize;
use uuid::Uuid;

use gymlog_application::CountCheckInsUseCase;
use gymlog_core::{CheckInStore, UserId};

use super::error::ApiError;

#[derive(Serialize)]
pub struct CheckInsCountResponse {
    pub check_ins_count: u64,
}

#[tracing::instrument(name = "Count check-ins", skip_all)]
pub async fn count_check_ins<C>(
    State(check_in_store): State<C>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError>
where
    C: CheckInStore + Clone + 'static,
{
    let use_case = CountCheckInsUseCase::new(check_in_store);
    let check_ins_count = use_case.execute(&UserId::from(user_id)).await?;

    Ok(Json(CheckInsCountResponse { check_ins_count }))
}
