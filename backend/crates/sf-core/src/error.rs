use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    #[error("Invalid attachment format: {message} {location}")]
    InvalidAttachment {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    /// Validation failure tied to a named field
    #[track_caller]
    pub fn field<F: Into<String>, M: Into<String>>(field: F, message: M) -> Self {
        CoreError::Validation {
            message: message.into(),
            field: Some(field.into()),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn attachment<M: Into<String>>(message: M) -> Self {
        CoreError::InvalidAttachment {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message without the capture location, suitable for clients
    pub fn message(&self) -> &str {
        match self {
            CoreError::Validation { message, .. } => message,
            CoreError::InvalidAttachment { message, .. } => message,
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
