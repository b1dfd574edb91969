use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

use gymlog_application::{AuthenticateError, CheckInError, RegisterUserError};
use gymlog_core::{CheckInStoreError, EmailError, PasswordError, UserStoreError};

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Email already in use")]
    EmailAlreadyInUse,

    #[error("User not found")]
    UserNotFound,

    #[error("Already checked in today")]
    AlreadyCheckedInToday,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            ApiError::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),

            ApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),

            ApiError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),

            ApiError::EmailAlreadyInUse | ApiError::AlreadyCheckedInToday => {
                (StatusCode::CONFLICT, self.to_string())
            }

            ApiError::UnexpectedError(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<EmailError> for ApiError {
    fn from(error: EmailError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for ApiError {
    fn from(error: PasswordError) -> Self {
        ApiError::InvalidInput(error.to_string())
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::UserAlreadyExists => ApiError::EmailAlreadyInUse,
            UserStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<CheckInStoreError> for ApiError {
    fn from(error: CheckInStoreError) -> Self {
        match error {
            CheckInStoreError::AlreadyCheckedInToday => ApiError::AlreadyCheckedInToday,
            CheckInStoreError::UnexpectedError(e) => ApiError::UnexpectedError(e),
        }
    }
}

impl From<AuthenticateError> for ApiError {
    fn from(error: AuthenticateError) -> Self {
        match error {
            AuthenticateError::InvalidCredentials => ApiError::InvalidCredentials,
            AuthenticateError::UserStoreError(e) => e.into(),
            AuthenticateError::PasswordHashError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<RegisterUserError> for ApiError {
    fn from(error: RegisterUserError) -> Self {
        match error {
            RegisterUserError::EmailAlreadyInUse => ApiError::EmailAlreadyInUse,
            RegisterUserError::UserStoreError(e) => e.into(),
            RegisterUserError::PasswordHashError(e) => ApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<CheckInError> for ApiError {
    fn from(error: CheckInError) -> Self {
        match error {
            CheckInError::UserNotFound => ApiError::UserNotFound,
            CheckInError::AlreadyCheckedInToday => ApiError::AlreadyCheckedInToday,
            CheckInError::UserStoreError(e) => e.into(),
            CheckInError::CheckInStoreError(e) => e.into(),
        }
    }
}
