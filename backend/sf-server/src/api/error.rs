//! REST API error types
//!
//! Every failure is rendered as
//! `{"success": false, "message": ..., "code": ..., "field": ...}`.

use sf_auth::AuthError;
use sf_core::CoreError;
use sf_db::DbError;

use std::panic::Location;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use error_location::ErrorLocation;
use serde::Serialize;
use thiserror::Error;

/// JSON error response body
#[derive(Debug, Serialize)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: String,
    /// Machine-readable error code (e.g. "DUPLICATE_IDENTITY")
    pub code: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// 404
    #[error("Resource not found: {message} {location}")]
    NotFound {
        message: String,
        location: ErrorLocation,
    },

    /// 400
    #[error("Validation failed: {message} {location}")]
    Validation {
        message: String,
        field: Option<String>,
        location: ErrorLocation,
    },

    /// 400
    #[error("Invalid attachment: {message} {location}")]
    InvalidAttachment {
        message: String,
        location: ErrorLocation,
    },

    /// 409
    #[error("Duplicate identity: {message} {location}")]
    Duplicate {
        message: String,
        location: ErrorLocation,
    },

    /// 500
    #[error("Internal error: {message} {location}")]
    Internal {
        message: String,
        location: ErrorLocation,
    },
}

pub const DUPLICATE_IDENTITY_MESSAGE: &str = "Email already registered.";

impl ApiError {
    #[track_caller]
    pub fn duplicate() -> Self {
        ApiError::Duplicate {
            message: DUPLICATE_IDENTITY_MESSAGE.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found<S: Into<String>>(message: S) -> Self {
        ApiError::NotFound {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Validation { .. } | ApiError::InvalidAttachment { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Duplicate { .. } => StatusCode::CONFLICT,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ApiError::NotFound { .. } => "NOT_FOUND",
            ApiError::Validation { .. } => "VALIDATION_ERROR",
            ApiError::InvalidAttachment { .. } => "INVALID_ATTACHMENT_FORMAT",
            ApiError::Duplicate { .. } => "DUPLICATE_IDENTITY",
            ApiError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Log the error with location for debugging
        if self.status().is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }

        let status = self.status();
        let code = self.code();
        let (message, field) = match self {
            ApiError::Validation { message, field, .. } => (message, field),
            ApiError::NotFound { message, .. }
            | ApiError::InvalidAttachment { message, .. }
            | ApiError::Duplicate { message, .. }
            | ApiError::Internal { message, .. } => (message, None),
        };

        let body = ApiErrorResponse {
            success: false,
            message,
            code,
            field,
        };

        (status, Json(body)).into_response()
    }
}

impl From<CoreError> for ApiError {
    #[track_caller]
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Validation { message, field, .. } => ApiError::Validation {
                message,
                field,
                location: ErrorLocation::from(Location::caller()),
            },
            CoreError::InvalidAttachment { message, .. } => ApiError::InvalidAttachment {
                message,
                location: ErrorLocation::from(Location::caller()),
            },
        }
    }
}

/// Convert database errors to API errors
impl From<DbError> for ApiError {
    #[track_caller]
    fn from(e: DbError) -> Self {
        match e {
            DbError::Duplicate { .. } => ApiError::duplicate(),
            DbError::NotFound { email, .. } => {
                ApiError::not_found(format!("No profile found for {}", email))
            }
            other => {
                // Don't expose internal database details to clients
                log::error!("Database error: {}", other);
                ApiError::Internal {
                    message: "Database operation failed".to_string(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
        }
    }
}

impl From<AuthError> for ApiError {
    #[track_caller]
    fn from(e: AuthError) -> Self {
        log::error!("Credential hashing error: {}", e);
        ApiError::Internal {
            message: "Failed to process credentials".to_string(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
