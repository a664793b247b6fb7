use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Config error: {0}")]
    Config(#[from] sf_config::ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] sf_db::DbError),

    #[error("Credential hasher error: {0}")]
    Auth(#[from] sf_auth::AuthError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ServerError>;
