use axum::response::{IntoResponse, Response};
use axum_helpers::AppError;
use database::RepositoryError;
use thiserror::Error;
use uuid::Uuid;

pub const INVALID_INPUT: &str = "Input data not provided or invalid";

#[derive(Debug, Error)]
pub enum ProductError {
    #[error("Product not found using ID {0}")]
    NotFound(Uuid),

    #[error("Product not found using name: {0}")]
    NameNotFound(String),

    #[error("Name already used on another product.")]
    Conflict,

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ProductError {
    pub fn invalid_input() -> Self {
        ProductError::BadRequest(INVALID_INPUT.to_string())
    }
}

pub type ProductResult<T> = Result<T, ProductError>;

impl From<RepositoryError> for ProductError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound(id) => ProductError::NotFound(id),
            // `name` is the only unique column
            RepositoryError::Conflict(_) => ProductError::Conflict,
            RepositoryError::Database(e) => ProductError::Internal(format!("Database error: {}", e)),
        }
    }
}

impl From<sea_orm::DbErr> for ProductError {
    fn from(err: sea_orm::DbErr) -> Self {
        RepositoryError::from(err).into()
    }
}

impl From<ProductError> for AppError {
    fn from(err: ProductError) -> Self {
        let message = err.to_string();
        match err {
            ProductError::NotFound(_) | ProductError::NameNotFound(_) => AppError::NotFound(message),
            ProductError::Conflict => AppError::Conflict(message),
            ProductError::BadRequest(_) => AppError::BadRequest(message),
            ProductError::Internal(_) => AppError::InternalServerError(message),
        }
    }
}

impl IntoResponse for ProductError {
    fn into_response(self) -> Response {
        AppError::from(self).into_response()
    }
}
