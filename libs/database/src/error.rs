use uuid::Uuid;

/// Errors raised while connecting to or probing a database.
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    #[cfg(feature = "postgres")]
    #[error("PostgreSQL error: {0}")]
    Postgres(#[from] sea_orm::DbErr),

    #[error("Health check failed: {0}")]
    HealthCheckFailed(String),
}

pub type DatabaseResult<T> = Result<T, DatabaseError>;

/// Storage-level failures surfaced by repositories.
///
/// Domain crates convert these into their own error enums.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Model not found with ID: {0}")]
    NotFound(Uuid),

    #[error("Unique constraint violated: {0}")]
    Conflict(String),

    #[cfg(feature = "postgres")]
    #[error("Database error: {0}")]
    Database(sea_orm::DbErr),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(feature = "postgres")]
impl From<sea_orm::DbErr> for RepositoryError {
    fn from(err: sea_orm::DbErr) -> Self {
        match err.sql_err() {
            Some(sea_orm::SqlErr::UniqueConstraintViolation(detail)) => {
                RepositoryError::Conflict(detail)
            }
            _ => RepositoryError::Database(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message_carries_id() {
        let id = Uuid::now_v7();
        let err = RepositoryError::NotFound(id);
        assert_eq!(err.to_string(), format!("Model not found with ID: {}", id));
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn test_generic_db_error_is_not_conflict() {
        let err = RepositoryError::from(sea_orm::DbErr::Custom("boom".to_string()));
        assert!(matches!(err, RepositoryError::Database(_)));
    }
}
