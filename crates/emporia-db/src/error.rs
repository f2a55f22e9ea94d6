//! # Database Error Types
//!
//! Error types for gateway operations. Driver errors are categorized by
//! PostgreSQL SQLSTATE so that callers can react to the cases the flows
//! care about; everything else stays a generic query failure.
//!
//! ```text
//! sqlx::Error::Database, SQLSTATE 23505  → DbError::UniqueViolation
//! sqlx::Error::Database, SQLSTATE 23503  → DbError::ForeignKeyViolation
//! sqlx::Error::RowNotFound               → DbError::NotFound
//! sqlx::Error::Io / Configuration        → DbError::ConnectionFailed
//! anything else                          → DbError::QueryFailed / Internal
//! ```
//!
//! The one mapping the application depends on: registering a duplicate
//! username raises a unique violation, which the terminal flow reports as
//! "username already exists" rather than a generic error.

use thiserror::Error;

// SQLSTATE class 23: integrity constraint violations.
const SQLSTATE_UNIQUE_VIOLATION: &str = "23505";
const SQLSTATE_FOREIGN_KEY_VIOLATION: &str = "23503";

/// Database operation errors.
#[derive(Debug, Error)]
pub enum DbError {
    /// Entity not found in the database.
    #[error("{entity} not found: {id}")]
    NotFound { entity: String, id: String },

    /// Unique constraint violation, e.g. a duplicate username.
    #[error("Duplicate value for {constraint}")]
    UniqueViolation { constraint: String },

    /// Foreign key constraint violation.
    #[error("Foreign key violation: {0}")]
    ForeignKeyViolation(String),

    /// Could not open or keep the connection.
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Migration failed to apply.
    #[error("Migration failed: {0}")]
    MigrationFailed(String),

    /// A statement or procedure call failed.
    ///
    /// This includes errors raised inside procedures themselves, such as
    /// `create_purchase` rejecting a purchase whose stock ran out between
    /// the client-side check and the call.
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Anything the categories above do not cover.
    #[error("Internal database error: {0}")]
    Internal(String),
}

impl DbError {
    /// Creates a NotFound error for a given entity type and id.
    pub fn not_found(entity: impl Into<String>, id: impl ToString) -> Self {
        DbError::NotFound {
            entity: entity.into(),
            id: id.to_string(),
        }
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => DbError::NotFound {
                entity: "Record".to_string(),
                id: "unknown".to_string(),
            },

            sqlx::Error::Database(db_err) => match db_err.code().as_deref() {
                Some(SQLSTATE_UNIQUE_VIOLATION) => DbError::UniqueViolation {
                    constraint: db_err.constraint().unwrap_or("unknown").to_string(),
                },
                Some(SQLSTATE_FOREIGN_KEY_VIOLATION) => {
                    DbError::ForeignKeyViolation(db_err.message().to_string())
                }
                _ => DbError::QueryFailed(db_err.message().to_string()),
            },

            sqlx::Error::Io(e) => DbError::ConnectionFailed(e.to_string()),
            sqlx::Error::Tls(e) => DbError::ConnectionFailed(e.to_string()),
            sqlx::Error::Configuration(e) => DbError::ConnectionFailed(e.to_string()),
            sqlx::Error::PoolClosed => DbError::ConnectionFailed("connection closed".to_string()),

            other => DbError::Internal(other.to_string()),
        }
    }
}

impl From<sqlx::migrate::MigrateError> for DbError {
    fn from(err: sqlx::migrate::MigrateError) -> Self {
        DbError::MigrationFailed(err.to_string())
    }
}

/// Result type for database operations.
pub type DbResult<T> = Result<T, DbError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_helper() {
        let err = DbError::not_found("Product", 7);
        assert_eq!(err.to_string(), "Product not found: 7");
    }

    #[test]
    fn test_unique_violation_message() {
        let err = DbError::UniqueViolation {
            constraint: "customers_username_key".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Duplicate value for customers_username_key"
        );
    }

    #[test]
    fn test_row_not_found_maps_to_not_found() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
