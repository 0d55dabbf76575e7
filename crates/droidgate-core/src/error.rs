//! Error types for Droidgate.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Credential not found")]
    CredentialMissing,

    #[error("Credential file is malformed: {0}")]
    CredentialMalformed(String),

    #[error("Credential not match")]
    CredentialMismatch,

    #[error("Authorization scheme must be Bearer")]
    MalformedScheme,

    #[error("Authorization token is missing")]
    MissingToken,

    #[error("Authorization token is invalid")]
    InvalidToken,

    #[error("Failed to execute program: {0}")]
    Execution(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
