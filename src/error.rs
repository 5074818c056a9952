use thiserror::Error as ThisError;

use crate::services::reddit::RedditError;

#[derive(ThisError, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Malformed timestamp: {0}")]
    MalformedTimestamp(String),

    #[error("Fetch error: {0}")]
    Fetch(String),
}

impl From<RedditError> for AppError {
    fn from(err: RedditError) -> Self {
        AppError::Fetch(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

// Alias for convenience
pub type Error = AppError;
