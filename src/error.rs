//! Error types for the ColdTrack client

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    #[error("Reference store error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // field_errors iterates in hash order; sort for a stable message
        let mut parts: Vec<String> = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let detail = errs
                    .iter()
                    .filter_map(|e| e.message.as_ref().map(ToString::to_string))
                    .collect::<Vec<_>>()
                    .join(", ");
                if detail.is_empty() {
                    format!("{field} is invalid")
                } else {
                    format!("{field}: {detail}")
                }
            })
            .collect();
        parts.sort();
        AppError::Validation(parts.join("; "))
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
