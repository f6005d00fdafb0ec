//! Error types for lightbnb-db
//!
//! Every gateway operation returns [`DbError`]. "Row not found" and "query
//! failed" are separate variants so callers never have to guess which one a
//! missing value means.

use thiserror::Error;

use crate::models::ValidationError;

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, DbError>;

/// Database error type
#[derive(Debug, Error)]
pub enum DbError {
    #[error("not found: {resource} '{id}'")]
    NotFound { resource: &'static str, id: String },

    /// Unique constraint violation (e.g. duplicate email)
    #[error("conflict: {resource} violates {constraint}")]
    Conflict {
        resource: &'static str,
        constraint: String,
    },

    /// Foreign key violation (e.g. property owner does not exist)
    #[error("missing reference: {resource} violates {constraint}")]
    MissingReference {
        resource: &'static str,
        constraint: String,
    },

    #[error("invalid input: {0}")]
    Validation(#[from] ValidationError),

    /// The pool could not hand out a connection
    #[error("database unavailable: {0}")]
    Unavailable(#[source] sqlx::Error),

    #[error("migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("database error: {0}")]
    Sqlx(#[source] sqlx::Error),
}

/// Coarse classification of a [`DbError`], stable for logging and matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Conflict,
    MissingReference,
    Validation,
    Unavailable,
    Database,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NotFound => "not_found",
            Self::Conflict => "conflict",
            Self::MissingReference => "missing_reference",
            Self::Validation => "validation",
            Self::Unavailable => "unavailable",
            Self::Database => "database",
        }
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl DbError {
    /// Create a not-found error
    pub fn not_found(resource: &'static str, id: impl ToString) -> Self {
        Self::NotFound {
            resource,
            id: id.to_string(),
        }
    }

    /// Classify a sqlx error raised while operating on `resource`.
    ///
    /// Constraint violations become [`DbError::Conflict`] or
    /// [`DbError::MissingReference`]; connectivity failures become
    /// [`DbError::Unavailable`].
    pub fn from_sqlx(resource: &'static str, err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::RowNotFound => Self::NotFound {
                resource,
                id: String::from("?"),
            },
            sqlx::Error::Database(ref db) if db.is_unique_violation() => Self::Conflict {
                resource,
                constraint: db.constraint().unwrap_or("unique constraint").to_owned(),
            },
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                Self::MissingReference {
                    resource,
                    constraint: db.constraint().unwrap_or("foreign key").to_owned(),
                }
            }
            sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::WorkerCrashed => Self::Unavailable(err),
            other => Self::Sqlx(other),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound { .. } => ErrorKind::NotFound,
            Self::Conflict { .. } => ErrorKind::Conflict,
            Self::MissingReference { .. } => ErrorKind::MissingReference,
            Self::Validation(_) => ErrorKind::Validation,
            Self::Unavailable(_) => ErrorKind::Unavailable,
            Self::Migration(_) | Self::Sqlx(_) => ErrorKind::Database,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

impl From<sqlx::Error> for DbError {
    fn from(err: sqlx::Error) -> Self {
        Self::from_sqlx("row", err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_display() {
        let err = DbError::not_found("user", "a@b.com");
        assert_eq!(err.to_string(), "not found: user 'a@b.com'");
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert!(err.is_not_found());
    }

    #[test]
    fn pool_failures_are_unavailable() {
        let err = DbError::from_sqlx("user", sqlx::Error::PoolTimedOut);
        assert_eq!(err.kind(), ErrorKind::Unavailable);
        assert!(err.to_string().starts_with("database unavailable"));

        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = DbError::from_sqlx("property", sqlx::Error::Io(io));
        assert_eq!(err.kind(), ErrorKind::Unavailable);
    }

    #[test]
    fn row_not_found_maps_to_not_found() {
        let err: DbError = sqlx::Error::RowNotFound.into();
        assert!(err.is_not_found());
    }

    #[test]
    fn other_errors_are_database_kind() {
        let err = DbError::from_sqlx("user", sqlx::Error::Protocol("bad frame".into()));
        assert_eq!(err.kind(), ErrorKind::Database);
        assert_eq!(err.kind().to_string(), "database");
    }

    #[test]
    fn validation_converts() {
        let err: DbError = ValidationError::Empty { field: "name" }.into();
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert_eq!(err.to_string(), "invalid input: name cannot be empty");
    }
}
