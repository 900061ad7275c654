use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    /// Unique-constraint violation on `identities.email` or
    /// `identities.federated_id`. This is how a race between two
    /// concurrent writers for the same credential is resolved: the
    /// second writer gets this error, never a duplicate row.
    #[error("Duplicate identity: {field} already exists {location}")]
    Duplicate {
        field: &'static str,
        location: ErrorLocation,
    },

    #[error("Corrupt row: {message} {location}")]
    Row {
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &source
            && db.is_unique_violation()
        {
            // SQLite reports "UNIQUE constraint failed: identities.<column>"
            let field = if db.message().contains("federated_id") {
                "federated_id"
            } else {
                "email"
            };
            return Self::Duplicate {
                field,
                location: ErrorLocation::from(Location::caller()),
            };
        }

        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl DbError {
    #[track_caller]
    pub(crate) fn row<S: Into<String>>(message: S) -> Self {
        Self::Row {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
