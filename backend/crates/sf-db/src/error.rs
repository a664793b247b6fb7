use error_location::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity already registered: {email} {location}")]
    Duplicate {
        email: String,
        location: ErrorLocation,
    },

    #[error("Identity not found: {email} {location}")]
    NotFound {
        email: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl DbError {
    /// Unique-constraint failures become `Duplicate`; everything else stays `Sqlx`
    #[track_caller]
    pub(crate) fn from_insert(source: sqlx::Error, email: &str) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match &source {
            sqlx::Error::Database(db) if db.is_unique_violation() => Self::Duplicate {
                email: email.to_string(),
                location,
            },
            _ => Self::Sqlx { source, location },
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
