use thiserror::Error;

#[derive(Error, Debug)]
pub enum AdminError {
    #[error("Not authorized: {message}")]
    NotAuthorized { message: String },

    #[error("Not found: {message}")]
    NotFound { message: String },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Precondition failed: {message}")]
    PreconditionFailed { message: String },

    #[error("Server error (HTTP {status}): {message}")]
    Server { status: u16, message: String },

    #[error("Request timed out after {elapsed_ms} ms")]
    Timeout { elapsed_ms: u64 },

    #[error("Operation was abandoned before it completed")]
    Interrupted,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error in {field}: {reason}")]
    Config { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, AdminError>;

impl AdminError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, AdminError::NotFound { .. })
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, AdminError::Timeout { .. })
    }
}
