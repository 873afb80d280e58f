use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::RepositoryError;
use thiserror::Error;
use uuid::Uuid;

pub const INVALID_INPUT: &str = "Input data not provided or invalid";

#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found using ID {0}")]
    NotFound(Uuid),

    #[error("User not found using email {0}")]
    EmailNotFound(String),

    #[error("User not found using name {0}")]
    NameNotFound(String),

    #[error("Email already used by another user")]
    Conflict,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("{0}")]
    BadRequest(String),

    #[error("Password hashing error: {0}")]
    PasswordHash(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl UserError {
    pub fn invalid_input() -> Self {
        UserError::BadRequest(INVALID_INPUT.to_string())
    }
}

pub type UserResult<T> = Result<T, UserError>;

impl From<RepositoryError> for UserError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => UserError::NotFound(id),
            // `email` is the only unique column
            RepositoryError::Conflict(_) => UserError::Conflict,
            RepositoryError::Database(e) => UserError::Internal(format!("Database error: {}", e)),
        }
    }
}

impl From<sea_orm::DbErr> for UserError {
    fn from(err: sea_orm::DbErr) -> Self {
        RepositoryError::from(err).into()
    }
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        let message = err.to_string();
        match err {
            UserError::NotFound(_) | UserError::EmailNotFound(_) | UserError::NameNotFound(_) => {
                AppError::NotFound(message)
            }
            UserError::Conflict => AppError::Conflict(message),
            UserError::InvalidCredentials => AppError::Unauthorized(message),
            UserError::BadRequest(_) => AppError::BadRequest(message),
            UserError::PasswordHash(_) | UserError::Internal(_) => {
                AppError::InternalServerError(message)
            }
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
