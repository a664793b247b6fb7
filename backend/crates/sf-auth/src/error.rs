use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid hash parameters: {message} {location}")]
    InvalidParams {
        message: String,
        location: ErrorLocation,
    },

    #[error("Credential hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    #[error("Malformed credential hash: {message} {location}")]
    MalformedHash {
        message: String,
        location: ErrorLocation,
    },

    #[error("Hashing task failed: {source} {location}")]
    Task {
        #[source]
        source: tokio::task::JoinError,
        location: ErrorLocation,
    },
}

pub type Result<T> = std::result::Result<T, AuthError>;
