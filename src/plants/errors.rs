//! # Store Errors
//!
//! Error types for the plant repository.

use sqlx::error::ErrorKind;
use thiserror::Error;

/// Result type for repository operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Repository errors
#[derive(Debug, Error)]
pub enum StoreError {
    /// Storage rejected a write because of a schema rule
    #[error("Constraint violation: {0}")]
    Constraint(String),

    /// Any other storage failure
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Classify a storage error, splitting out constraint rejections
    pub fn classify(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db_err) = &err {
            match db_err.kind() {
                ErrorKind::UniqueViolation
                | ErrorKind::ForeignKeyViolation
                | ErrorKind::NotNullViolation
                | ErrorKind::CheckViolation => {
                    return StoreError::Constraint(db_err.message().to_string());
                }
                _ => {}
            }
        }
        StoreError::Database(err)
    }

    /// True for constraint rejections
    pub fn is_constraint(&self) -> bool {
        matches!(self, StoreError::Constraint(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_errors_are_not_constraints() {
        let err = StoreError::classify(sqlx::Error::RowNotFound);
        assert!(!err.is_constraint());
        assert!(matches!(err, StoreError::Database(sqlx::Error::RowNotFound)));
    }

    #[test]
    fn test_display() {
        let err = StoreError::Constraint("UNIQUE constraint failed: plants.id".to_string());
        assert_eq!(
            err.to_string(),
            "Constraint violation: UNIQUE constraint failed: plants.id"
        );
    }
}
