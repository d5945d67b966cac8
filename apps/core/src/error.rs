use thiserror::Error;

/// Application-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents transport-level failures reaching the model endpoint.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Represents a non-success status returned by the model endpoint.
    #[error("Analysis request failed with status {status}: {body}")]
    Api { status: u16, body: String },

    /// Represents a response payload that could not be parsed into an
    /// analysis result (malformed JSON, missing fields, out-of-range values).
    #[error("Invalid analysis result: {0}")]
    InvalidResponse(String),

    /// Represents configuration-related errors (e.g., missing environment variables).
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// The single human-readable string surfaced in the error banner.
    ///
    /// Transport and API failures collapse into one generic message; a
    /// payload that arrived but did not match the expected shape gets its
    /// own wording so the user knows resubmitting may help.
    pub fn user_message(&self) -> String {
        match self {
            AppError::InvalidResponse(_) => {
                "Invalid analysis result received from AI.".to_string()
            }
            AppError::Config(msg) => msg.clone(),
            AppError::Http(_) | AppError::Api { .. } => {
                "Analysis failed. Please try again.".to_string()
            }
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidResponse(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::InvalidResponse(format!("Validation errors: {}", err))
    }
}
