use error_location::ErrorLocation;
use std::panic::Location;
use thiserror::Error;

pub const FETCH_FAILED_MESSAGE: &str = "An unexpected error occurred while fetching profile data.";
pub const SAVE_FAILED_MESSAGE: &str = "An error occurred while saving profile data.";
pub const MISSING_SESSION_MESSAGE: &str = "You must be logged in to access this page.";

/// Client-side failure taxonomy
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("No session identity present {location}")]
    MissingSession { location: ErrorLocation },

    #[error("Duplicate identity: {message} {location}")]
    DuplicateIdentity {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid attachment format: {message} {location}")]
    InvalidAttachmentFormat {
        message: String,
        location: ErrorLocation,
    },

    #[error("Validation failed: {message} {location}")]
    ValidationFailure {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// Structured server rejection that is not a validation problem
    #[error("API error: {message} (code: {code}, status: {status}) {location}")]
    Api {
        status: u16,
        code: String,
        message: String,
        location: ErrorLocation,
    },

    /// Network failure or a non-2xx response without a structured body
    #[error("Transport failure: {message} {location}")]
    TransportFailure {
        message: String,
        location: ErrorLocation,
    },

    #[error("Cannot {operation} while {state} {location}")]
    InvalidTransition {
        state: &'static str,
        operation: &'static str,
        location: ErrorLocation,
    },

    #[error("Session file error: {message} {location}")]
    Session {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn validation<M: Into<String>>(message: M, field: Option<&str>) -> Self {
        ClientError::ValidationFailure {
            message: message.into(),
            field: field.map(String::from),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn transport<M: Into<String>>(message: M) -> Self {
        ClientError::TransportFailure {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn session<M: Into<String>>(message: M) -> Self {
        ClientError::Session {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid_transition(state: &'static str, operation: &'static str) -> Self {
        ClientError::InvalidTransition {
            state,
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Network or server-side failure, as opposed to a rejected submission
    pub fn is_transport(&self) -> bool {
        match self {
            ClientError::TransportFailure { .. } => true,
            ClientError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Text suitable for showing to the user, without capture location
    pub fn user_message(&self) -> String {
        match self {
            ClientError::MissingSession { .. } => MISSING_SESSION_MESSAGE.to_string(),
            ClientError::DuplicateIdentity { message, .. }
            | ClientError::InvalidAttachmentFormat { message, .. }
            | ClientError::ValidationFailure { message, .. }
            | ClientError::Api { message, .. }
            | ClientError::TransportFailure { message, .. }
            | ClientError::Session { message, .. } => message.clone(),
            ClientError::InvalidTransition {
                state, operation, ..
            } => format!("Cannot {} while {}", operation, state),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        ClientError::transport(err.to_string())
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        ClientError::transport(format!("Malformed response: {}", err))
    }
}

impl From<sf_core::CoreError> for ClientError {
    #[track_caller]
    fn from(err: sf_core::CoreError) -> Self {
        let location = ErrorLocation::from(Location::caller());
        match err {
            sf_core::CoreError::Validation { message, field, .. } => {
                ClientError::ValidationFailure {
                    message,
                    field,
                    location,
                }
            }
            sf_core::CoreError::InvalidAttachment { message, .. } => {
                ClientError::InvalidAttachmentFormat { message, location }
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
